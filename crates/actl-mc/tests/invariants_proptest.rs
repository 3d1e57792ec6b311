//! Property tests over randomly generated planning domains.
//!
//! The generators build small but fully valid domains (1-5 states, labels
//! drawn from {p, q, r}, up to two actions per state with nondeterministic
//! outcomes) and arbitrary well-formed goal formulas, then check the
//! evaluator's structural guarantees: canonical outputs, domain soundness,
//! exact atomic covers, the propositional connectives as set algebra,
//! fixed-point termination, and the self-loop rule.

use actl_mc::sat;
use actl_model::{
    induced, strong_preimage, weak_preimage, Action, LabeledState, Lts, Policy, StateId,
    Transition,
};
use actl_syntax::Formula;
use proptest::prelude::*;

const PROPS: [&str; 3] = ["p", "q", "r"];
const ACTIONS: [&str; 2] = ["a", "b"];

/// Generate a valid domain: `n` states with label bitmasks over PROPS and
/// an optional transition per (state, action) with a nonempty target mask.
fn arb_lts() -> impl Strategy<Value = Lts> {
    (1u32..=5).prop_flat_map(|n| {
        (
            prop::collection::vec(0u8..8, n as usize),
            prop::collection::vec(prop::option::of(1u8..32), (n as usize) * ACTIONS.len()),
        )
            .prop_map(move |(label_masks, target_masks)| {
                let states: Vec<LabeledState> = label_masks
                    .iter()
                    .enumerate()
                    .map(|(id, mask)| {
                        let labels = PROPS
                            .iter()
                            .enumerate()
                            .filter(|(bit, _)| mask & (1u8 << bit) != 0)
                            .map(|(_, p)| *p);
                        LabeledState::new(id as u32, labels)
                    })
                    .collect();

                let mut transitions = Vec::new();
                for (slot, mask) in target_masks.iter().enumerate() {
                    let Some(mask) = mask else { continue };
                    let source = (slot / ACTIONS.len()) as u32;
                    let action = ACTIONS[slot % ACTIONS.len()];
                    let targets: Vec<u32> = (0..n).filter(|t| mask & (1u8 << t) != 0).collect();
                    if !targets.is_empty() {
                        transitions.push(Transition::new(source, action, targets));
                    }
                }
                Lts::new(states, transitions).expect("generated domain is valid")
            })
    })
}

/// Generate a well-formed goal formula: negation only on atoms.
fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        Just(Formula::True),
        prop::sample::select(&PROPS[..]).prop_map(Formula::atom),
        prop::sample::select(&PROPS[..]).prop_map(|p| Formula::atom(p).not()),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.clone().prop_map(Formula::ex),
            inner.clone().prop_map(Formula::ax),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.eu(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.au(b)),
            inner.clone().prop_map(Formula::ef),
            inner.clone().prop_map(Formula::af),
            inner.clone().prop_map(Formula::eg),
            inner.prop_map(Formula::ag),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// Evaluation terminates, returns a canonical set, and never covers a
    /// state outside the domain.
    #[test]
    fn sat_terminates_canonical_and_sound(lts in arb_lts(), formula in arb_formula()) {
        let policy = sat(&lts, &formula).unwrap();
        prop_assert!(policy.pairs().windows(2).all(|w| w[0] < w[1]));
        let ids = lts.state_ids();
        for state in policy.dom() {
            prop_assert!(ids.binary_search(&state).is_ok());
        }
    }

    /// Atomic formulas cover exactly their labeled states, all τ-tagged.
    #[test]
    fn atomic_cover_is_exact(lts in arb_lts()) {
        for prop in PROPS {
            let policy = sat(&lts, &Formula::atom(prop)).unwrap();
            for (state, action) in policy.pairs() {
                prop_assert_eq!(action, &Action::Tau);
                prop_assert!(lts.state(*state).unwrap().satisfies(prop));
            }
            for state in lts.states() {
                prop_assert_eq!(state.satisfies(prop), policy.covers(state.id));
            }
        }
        let everything = sat(&lts, &Formula::True).unwrap();
        prop_assert_eq!(everything.dom(), lts.state_ids());
    }

    /// Conjunction and disjunction are policy intersection and union.
    #[test]
    fn connectives_are_set_algebra(
        lts in arb_lts(),
        left in arb_formula(),
        right in arb_formula(),
    ) {
        let l = sat(&lts, &left).unwrap();
        let r = sat(&lts, &right).unwrap();
        let and = sat(&lts, &left.clone().and(right.clone())).unwrap();
        let or = sat(&lts, &left.or(right)).unwrap();
        prop_assert_eq!(and, l.intersect(&r));
        prop_assert_eq!(or, l.union(&r));
    }

    /// Projecting through the policy of `true` keeps every state and only
    /// existing transitions.
    #[test]
    fn projection_of_true_is_conservative(lts in arb_lts()) {
        let policy = sat(&lts, &Formula::True).unwrap();
        let projection = induced(&lts, &policy);
        prop_assert_eq!(projection.state_ids(), lts.state_ids());
        for t in projection.transitions() {
            prop_assert!(lts.transitions().contains(t));
        }
    }

    /// Preimages never admit a non-τ pure self-loop, whatever the target.
    #[test]
    fn preimages_obey_the_self_loop_rule(lts in arb_lts(), target_mask in 0u8..32) {
        let targets: Vec<StateId> = lts
            .state_ids()
            .into_iter()
            .filter(|s| target_mask & (1u8 << s.0) != 0)
            .collect();
        let target = Policy::goal_cover(&targets);
        for pre in [weak_preimage(&lts, &target), strong_preimage(&lts, &target)] {
            for (state, action) in pre.pairs() {
                let t = lts
                    .transitions()
                    .iter()
                    .find(|t| t.source == *state && &t.action == action)
                    .unwrap();
                prop_assert!(!t.is_pure_self_loop());
            }
        }
    }

    /// The weak preimage dominates the strong preimage.
    #[test]
    fn strong_preimage_implies_weak(lts in arb_lts(), target_mask in 0u8..32) {
        let targets: Vec<StateId> = lts
            .state_ids()
            .into_iter()
            .filter(|s| target_mask & (1u8 << s.0) != 0)
            .collect();
        let target = Policy::goal_cover(&targets);
        let strong = strong_preimage(&lts, &target);
        let weak = weak_preimage(&lts, &target);
        prop_assert_eq!(strong.intersect(&weak), strong);
    }
}
