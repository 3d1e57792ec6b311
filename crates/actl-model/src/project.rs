//! Projections of a domain through a policy.
//!
//! `induced` restricts a domain to the states and transitions a policy
//! selects; `with_tau_loops` additionally materializes τ-self-loops on the
//! policy's goal states so the preimage operators can see them during
//! fixed-point iteration.

use crate::lts::{Action, LabeledState, Lts, StateId, Transition};
use crate::policy::Policy;
use crate::set;

/// The LTS a policy carves out of a domain.
///
/// States are the policy's domain plus every successor of a selected
/// transition. Successors keep their labels even when the policy does not
/// cover them, so the projection is self-contained as a display of where the
/// policy can end up. Transitions are exactly those the policy selects.
pub fn induced(lts: &Lts, policy: &Policy) -> Lts {
    let selected: Vec<Transition> = lts
        .transitions()
        .iter()
        .filter(|t| policy.contains(t.source, &t.action))
        .cloned()
        .collect();

    let mut ids = policy.dom();
    for t in &selected {
        ids = set::union(&ids, &t.targets);
    }
    let states: Vec<LabeledState> = lts
        .states()
        .iter()
        .filter(|s| ids.binary_search(&s.id).is_ok())
        .cloned()
        .collect();

    Lts::from_sorted_parts(states, selected)
}

/// The induced LTS augmented with a synthetic `(S, τ, {S})` loop for every
/// τ-pair of the policy. The loops keep goal states reachable from
/// themselves, which is what lets the ν- and μ-iterations of the globally
/// operators retain them.
pub fn with_tau_loops(lts: &Lts, policy: &Policy) -> Lts {
    let projected = induced(lts, policy);
    let mut transitions = projected.transitions().to_vec();
    for (state, action) in policy.goals().pairs() {
        debug_assert_eq!(*action, Action::Tau);
        if projected.state(*state).is_some() {
            transitions.push(Transition {
                source: *state,
                action: Action::Tau,
                targets: vec![*state],
            });
        }
    }
    transitions.sort_by(|a, b| (a.source, &a.action).cmp(&(b.source, &b.action)));
    Lts::from_sorted_parts(projected.states().to_vec(), transitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Lts {
        Lts::new(
            vec![
                LabeledState::new(0, ["p"]),
                LabeledState::new(1, ["q"]),
                LabeledState::new(2, ["r"]),
                LabeledState::new(3, ["r", "s"]),
            ],
            vec![
                Transition::new(0, "a", [1]),
                Transition::new(0, "b", [2]),
                Transition::new(1, "a", [2, 3]),
            ],
        )
        .unwrap()
    }

    fn policy(entries: &[(u32, &str)]) -> Policy {
        Policy::from_pairs(entries.iter().map(|&(s, a)| {
            let action = if a == "τ" {
                Action::Tau
            } else {
                Action::name(a)
            };
            (StateId(s), action)
        }))
    }

    #[test]
    fn induced_selects_policy_transitions() {
        let lts = induced(&domain(), &policy(&[(0, "a"), (1, "a")]));
        assert_eq!(
            lts.transitions(),
            &[Transition::new(0, "a", [1]), Transition::new(1, "a", [2, 3])]
        );
    }

    #[test]
    fn induced_keeps_dead_end_successor_labels() {
        // The policy never covers 2 or 3, but (1, a) can end up there, so
        // both stay in the projection with their labels.
        let lts = induced(&domain(), &policy(&[(1, "a")]));
        assert_eq!(
            lts.state_ids(),
            vec![StateId(1), StateId(2), StateId(3)]
        );
        assert_eq!(
            lts.state(StateId(3)).unwrap().labels,
            vec!["r".to_string(), "s".to_string()]
        );
    }

    #[test]
    fn induced_drops_uncovered_transitions() {
        let lts = induced(&domain(), &policy(&[(0, "b")]));
        assert_eq!(lts.transitions(), &[Transition::new(0, "b", [2])]);
        assert_eq!(lts.state_ids(), vec![StateId(0), StateId(2)]);
    }

    #[test]
    fn tau_loops_added_for_goal_pairs() {
        let lts = with_tau_loops(&domain(), &policy(&[(0, "a"), (1, "τ")]));
        let tau = lts
            .transitions()
            .iter()
            .find(|t| t.action == Action::Tau)
            .unwrap();
        assert_eq!(tau.source, StateId(1));
        assert_eq!(tau.targets, vec![StateId(1)]);
        // The τ-pair shows up in the universe, available as a ν seed.
        assert!(lts.universe().contains(StateId(1), &Action::Tau));
    }
}
