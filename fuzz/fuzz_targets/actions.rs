#![no_main]

use libfuzzer_sys::fuzz_target;
use multiview_list::test::{self, Action};

fuzz_target!(|data: Vec<Action>| { test::test_with_actions(&data) });
