//! Policies: sets of state-action pairs.
//!
//! A policy prescribes which actions to attempt from which states. A τ-pair
//! `(S, τ)` marks S as a goal / live-end: already satisfied, nothing to do.
//! A state may carry several actions when a union of sub-policies expresses
//! nondeterministic choice across viable plans. Policies are canonically
//! sorted so structural equality is set equality.

use crate::lts::{Action, StateId};
use crate::set;
use std::fmt;

/// Evaluator mode consulted by [`Policy::prune`].
///
/// `Min` is the least-fixed-point mode: newly discovered pairs for states the
/// accumulator already covers are dropped, so the iteration grows
/// monotonically and halts. `Max` is the greatest-fixed-point mode: the
/// iteration shrinks from the universal policy and must not discard coverage
/// mid-flight, so pruning is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Min,
    Max,
}

/// A set of state-action pairs, canonically sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Policy {
    pairs: Vec<(StateId, Action)>,
}

impl Policy {
    /// The empty policy.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a policy from arbitrary pairs, canonicalizing.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (StateId, Action)>) -> Self {
        Self {
            pairs: set::canonicalize(pairs),
        }
    }

    /// The policy `{ (S, τ) | S ∈ states }` marking every given state as a
    /// goal.
    pub fn goal_cover(states: &[StateId]) -> Self {
        debug_assert!(set::is_canonical(states));
        Self {
            pairs: states.iter().map(|&s| (s, Action::Tau)).collect(),
        }
    }

    /// The pairs in canonical order.
    pub fn pairs(&self) -> &[(StateId, Action)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the policy contains exactly this pair.
    pub fn contains(&self, state: StateId, action: &Action) -> bool {
        self.pairs
            .binary_search_by(|(s, a)| s.cmp(&state).then_with(|| a.cmp(action)))
            .is_ok()
    }

    /// Whether the policy covers the given state with any action.
    pub fn covers(&self, state: StateId) -> bool {
        self.pairs.binary_search_by(|(s, _)| s.cmp(&state)).is_ok()
    }

    /// The domain: the set of states the policy covers, sorted.
    pub fn dom(&self) -> Vec<StateId> {
        set::canonicalize(self.pairs.iter().map(|(s, _)| *s))
    }

    /// Retain only pairs whose state lies in the given set.
    pub fn restrict(&self, states: &[StateId]) -> Self {
        debug_assert!(set::is_canonical(states));
        Self {
            pairs: set::build(&self.pairs, |(s, _)| states.binary_search(s).is_ok()),
        }
    }

    /// Prune against an accumulator. In `Min` scope, drop pairs whose state
    /// the accumulator already covers; in `Max` scope, keep everything.
    pub fn prune(&self, accumulator: &Policy, scope: Scope) -> Self {
        match scope {
            Scope::Max => self.clone(),
            Scope::Min => {
                let covered = accumulator.dom();
                Self {
                    pairs: set::build(&self.pairs, |(s, _)| covered.binary_search(s).is_err()),
                }
            }
        }
    }

    /// Keep only the τ-pairs: the goal states this policy has certified.
    pub fn goals(&self) -> Self {
        Self {
            pairs: set::build(&self.pairs, |(_, a)| *a == Action::Tau),
        }
    }

    /// Set union.
    pub fn union(&self, other: &Policy) -> Self {
        Self {
            pairs: set::union(&self.pairs, &other.pairs),
        }
    }

    /// Set intersection.
    pub fn intersect(&self, other: &Policy) -> Self {
        Self {
            pairs: set::intersect(&self.pairs, &other.pairs),
        }
    }

    /// Set difference.
    pub fn difference(&self, other: &Policy) -> Self {
        Self {
            pairs: set::difference(&self.pairs, &other.pairs),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (state, action)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({state}, {action})")?;
        }
        write!(f, "}}")
    }
}
