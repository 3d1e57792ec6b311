//! Weak and strong preimage of a policy under an LTS.
//!
//! Both operators answer "which state-action pairs lead into the target
//! region", differing in how they quantify over nondeterministic outcomes:
//! the weak preimage admits a transition when some outcome lands in the
//! target, the strong preimage when every outcome does.

use crate::lts::{Action, Lts, StateId, Transition};
use crate::policy::Policy;
use crate::set;

/// How a preimage quantifies over a transition's outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    /// Some outcome reaches the target.
    May,
    /// Every outcome reaches the target.
    Must,
}

/// Weak preimage: pairs `(S, A)` whose transition may land in the target's
/// domain.
pub fn weak_preimage(lts: &Lts, target: &Policy) -> Policy {
    preimage(lts, target, Quantifier::May)
}

/// Strong preimage: pairs `(S, A)` whose transition must land in the
/// target's domain.
pub fn strong_preimage(lts: &Lts, target: &Policy) -> Policy {
    preimage(lts, target, Quantifier::Must)
}

fn preimage(lts: &Lts, target: &Policy, quantifier: Quantifier) -> Policy {
    let dom = target.dom();
    let pairs = lts
        .transitions()
        .iter()
        .filter(|t| admits(t, &dom, quantifier))
        .map(|t| (t.source, t.action.clone()));
    Policy::from_pairs(pairs)
}

/// The self-loop rule: a pure self-loop makes no progress and never
/// propagates coverage, except for a τ-loop, which marks an
/// already-satisfied state and must.
fn admits(t: &Transition, dom: &[StateId], quantifier: Quantifier) -> bool {
    if t.is_pure_self_loop() && t.action != Action::Tau {
        return false;
    }
    match quantifier {
        Quantifier::May => set::intersects(&t.targets, dom),
        Quantifier::Must => set::is_subset(&t.targets, dom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lts::LabeledState;

    fn domain() -> Lts {
        // 0 --a--> {1,2}   1 --b--> {2}   3 --c--> {3}   (pure self-loop)
        Lts::new(
            vec![
                LabeledState::new(0, ["p"]),
                LabeledState::new(1, ["p"]),
                LabeledState::new(2, ["q"]),
                LabeledState::new(3, ["p"]),
            ],
            vec![
                Transition::new(0, "a", [1, 2]),
                Transition::new(1, "b", [2]),
                Transition::new(3, "c", [3]),
            ],
        )
        .unwrap()
    }

    fn target(states: &[u32]) -> Policy {
        let ids: Vec<StateId> = states.iter().map(|&s| StateId(s)).collect();
        Policy::goal_cover(&ids)
    }

    #[test]
    fn weak_admits_partial_overlap() {
        let pre = weak_preimage(&domain(), &target(&[2]));
        assert_eq!(
            pre,
            Policy::from_pairs(vec![
                (StateId(0), Action::name("a")),
                (StateId(1), Action::name("b")),
            ])
        );
    }

    #[test]
    fn strong_requires_containment() {
        let pre = strong_preimage(&domain(), &target(&[2]));
        assert_eq!(
            pre,
            Policy::from_pairs(vec![(StateId(1), Action::name("b"))])
        );
        // With both outcomes covered the nondeterministic action qualifies.
        let pre = strong_preimage(&domain(), &target(&[1, 2]));
        assert!(pre.contains(StateId(0), &Action::name("a")));
    }

    #[test]
    fn pure_self_loop_never_propagates() {
        let pre = weak_preimage(&domain(), &target(&[3]));
        assert!(!pre.contains(StateId(3), &Action::name("c")));
        let pre = strong_preimage(&domain(), &target(&[3]));
        assert!(!pre.contains(StateId(3), &Action::name("c")));
    }

    #[test]
    fn tau_loop_is_admitted() {
        // Synthetic τ-loops (as produced by the goal-loop projection) keep
        // goal states visible to both preimages.
        let states = vec![LabeledState::new(0, ["g"])];
        let tau_loop = Transition {
            source: StateId(0),
            action: Action::Tau,
            targets: vec![StateId(0)],
        };
        let lts = Lts::from_sorted_parts(states, vec![tau_loop]);
        let pre = weak_preimage(&lts, &target(&[0]));
        assert!(pre.contains(StateId(0), &Action::Tau));
        let pre = strong_preimage(&lts, &target(&[0]));
        assert!(pre.contains(StateId(0), &Action::Tau));
    }
}
