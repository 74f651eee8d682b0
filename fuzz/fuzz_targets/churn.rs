#![no_main]

use libfuzzer_sys::fuzz_target;
use multiview_list::test::{self, Action};

// add/remove heavy workload, then every traversal order once
fuzz_target!(|data: Vec<i8>| {
    let mut actions: Vec<Action> = data
        .iter()
        .map(|&value| {
            if value < 0 {
                Action::Remove { value: -(value / 2) }
            } else {
                Action::Add { value: value / 2 }
            }
        })
        .collect();
    for kind in 0..6 {
        actions.push(Action::Walk { kind });
    }

    test::test_with_actions(&actions);
});
