//! Registry of example planning domains, keyed by integer id.
//!
//! The ids follow the worked examples this tool ships with: 1 is the
//! five-state domain with a self-loop and a nondeterministic trap, 4
//! extends it with an escape action, 6 is the gripper domain.

use actl_model::{LabeledState, Lts, Transition};

/// Ids of the registered domains, in order.
pub const MODEL_IDS: [u32; 3] = [1, 4, 6];

/// Look up a domain by id.
pub fn model(id: u32) -> Option<Lts> {
    match id {
        1 => Some(five_state()),
        4 => Some(five_state_with_escape()),
        6 => Some(gripper()),
        _ => None,
    }
}

/// One-line description of a registered domain.
pub fn describe(id: u32) -> Option<&'static str> {
    match id {
        1 => Some("five states; self-loop at 3, nondeterministic trap under c"),
        4 => Some("model 1 plus state 5 and the escape action d at state 3"),
        6 => Some("gripper: two rooms, one ball, grab may slip"),
        _ => None,
    }
}

fn assemble(states: Vec<LabeledState>, transitions: Vec<Transition>) -> Lts {
    Lts::new(states, transitions).expect("registered domains are well-formed")
}

fn five_state() -> Lts {
    assemble(
        vec![
            LabeledState::new(0, ["p", "q"]),
            LabeledState::new(1, ["p"]),
            LabeledState::new(2, ["r"]),
            LabeledState::new(3, ["q"]),
            LabeledState::new(4, ["p", "q", "r"]),
        ],
        vec![
            Transition::new(0, "a", [1]),
            Transition::new(0, "b", [3]),
            Transition::new(1, "b", [1, 2]),
            Transition::new(3, "a", [3]),
            Transition::new(3, "c", [2, 4]),
        ],
    )
}

fn five_state_with_escape() -> Lts {
    assemble(
        vec![
            LabeledState::new(0, ["p", "q"]),
            LabeledState::new(1, ["p"]),
            LabeledState::new(2, ["r"]),
            LabeledState::new(3, ["q"]),
            LabeledState::new(4, ["p", "q", "r"]),
            LabeledState::new(5, ["r"]),
        ],
        vec![
            Transition::new(0, "a", [1]),
            Transition::new(0, "b", [3]),
            Transition::new(1, "b", [1, 2]),
            Transition::new(3, "a", [3]),
            Transition::new(3, "c", [2, 4]),
            Transition::new(3, "d", [5]),
        ],
    )
}

fn gripper() -> Lts {
    assemble(
        vec![
            LabeledState::new(0, ["at(robot,1)", "at(ball,1)"]),
            LabeledState::new(1, ["at(robot,1)", "at(ball,2)"]),
            LabeledState::new(2, ["at(robot,1)", "carrying"]),
            LabeledState::new(3, ["at(robot,2)", "at(ball,1)"]),
            LabeledState::new(4, ["at(robot,2)", "at(ball,2)"]),
            LabeledState::new(5, ["at(robot,2)", "carrying"]),
        ],
        vec![
            Transition::new(0, "move", [3]),
            Transition::new(3, "move", [0]),
            Transition::new(1, "move", [4]),
            Transition::new(4, "move", [1]),
            Transition::new(2, "move", [5]),
            Transition::new(5, "move", [2]),
            Transition::new(0, "grab", [0, 2]),
            Transition::new(4, "grab", [4, 5]),
            Transition::new(2, "drop", [0]),
            Transition::new(5, "drop", [4]),
        ],
    )
}
