//! Model checking for the container: every action is applied to the real
//! [`Bag`] and to a plain shadow vector, and the two must agree on length,
//! printed form and every traversal order.

use rand::{rngs::StdRng, Rng};

use crate::{
    bag::Bag,
    view::{walk, Error},
};

const KINDS: u8 = 6;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Action {
    Add { value: i8 },
    Remove { value: i8 },
    Walk { kind: u8 },
}

pub fn apply(bag: &mut Bag<i8>, model: &mut Vec<i8>, action: &Action) {
    match action {
        Action::Add { value } => {
            bag.add(*value);
            model.push(*value);
        }
        Action::Remove { value } => {
            let expect_hit = model.contains(value);
            model.retain(|x| x != value);
            match bag.remove(value) {
                Ok(()) => assert!(expect_hit),
                Err(Error::NotFound) => assert!(!expect_hit),
                Err(other) => panic!("unexpected error from remove: {other}"),
            }
        }
        Action::Walk { kind } => check_walk(bag, model, *kind % KINDS),
    }

    assert_eq!(bag.len(), model.len());
    assert_eq!(bag.to_string(), format_model(model));
}

fn check_walk(bag: &Bag<i8>, model: &[i8], kind: u8) {
    let got = match kind {
        0 => walk(bag.begin_order(), &bag.end_order()),
        1 => walk(bag.begin_ascending(), &bag.end_ascending()),
        2 => walk(bag.begin_descending(), &bag.end_descending()),
        3 => walk(bag.begin_reverse(), &bag.end_reverse()),
        4 => walk(bag.begin_side_cross(), &bag.end_side_cross()),
        5 => walk(bag.begin_middle_out(), &bag.end_middle_out()),
        _ => unreachable!(),
    }
    .unwrap();

    let want = match kind {
        0 => model.to_vec(),
        1 => ascending(model),
        2 => descending(model),
        3 => {
            let mut v = model.to_vec();
            v.reverse();
            v
        }
        4 => side_cross(model),
        5 => middle_out(model),
        _ => unreachable!(),
    };

    if got != want {
        dbg!(model, kind);
        panic!("walk diverged from the model: got {got:?}, want {want:?}");
    }
}

fn format_model(model: &[i8]) -> String {
    let items: Vec<String> = model.iter().map(|x| x.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

fn ascending(model: &[i8]) -> Vec<i8> {
    let mut v = model.to_vec();
    v.sort();
    v
}

fn descending(model: &[i8]) -> Vec<i8> {
    let mut v = ascending(model);
    v.reverse();
    v
}

fn side_cross(model: &[i8]) -> Vec<i8> {
    let sorted = ascending(model);
    let mut out = Vec::with_capacity(sorted.len());
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        out.push(sorted[lo]);
        lo += 1;
        if lo < hi {
            hi -= 1;
            out.push(sorted[hi]);
        }
    }
    out
}

fn middle_out(model: &[i8]) -> Vec<i8> {
    let n = model.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out = vec![model[n / 2]];
    let mut index = n / 2;
    let mut offset = 0;
    let mut leftward = true;
    loop {
        if leftward {
            if index <= offset {
                break;
            }
            offset += 1;
            index -= offset;
        } else {
            if index + offset >= n {
                break;
            }
            offset += 1;
            index += offset;
            // the step right of the last element is the terminal position
            if index >= n {
                break;
            }
        }
        leftward = !leftward;
        out.push(model[index]);
    }
    out
}

fn gen(rng: &mut impl Rng) -> Action {
    match rng.gen_range(0..4) {
        0 | 1 => Action::Add {
            value: rng.gen_range(-20..20),
        },
        2 => Action::Remove {
            value: rng.gen_range(-20..20),
        },
        3 => Action::Walk {
            kind: rng.gen_range(0..KINDS),
        },
        _ => unreachable!(),
    }
}

pub fn test(seed: u64, n_actions: usize) {
    let mut rng: StdRng = rand::SeedableRng::seed_from_u64(seed);
    let mut bag = Bag::new();
    let mut model = Vec::new();
    for _ in 0..n_actions {
        let action = gen(&mut rng);
        apply(&mut bag, &mut model, &action);
    }

    for kind in 0..KINDS {
        check_walk(&bag, &model, kind);
    }
}

pub fn test_with_actions(actions: &[Action]) {
    let mut bag = Bag::new();
    let mut model = Vec::new();
    for action in actions {
        apply(&mut bag, &mut model, action);
    }

    for kind in 0..KINDS {
        check_walk(&bag, &model, kind);
    }
}

#[cfg(test)]
mod model_test {
    use super::Action;

    #[test]
    fn run() {
        for seed in 0..100 {
            crate::test::test(seed, 1000);
        }
    }

    #[test]
    fn run_long() {
        crate::test::test(123, 10000);
    }

    #[test]
    fn replay_walk_after_removing_everything() {
        crate::test::test_with_actions(&[
            Action::Add { value: 3 },
            Action::Add { value: 3 },
            Action::Remove { value: 3 },
            Action::Walk { kind: 4 },
            Action::Walk { kind: 5 },
        ]);
    }

    use ctor::ctor;
    #[ctor]
    fn init_color_backtrace() {
        color_backtrace::install();
    }
}
