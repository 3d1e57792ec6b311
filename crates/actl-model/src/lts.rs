//! Labeled transition systems for nondeterministic planning domains.
//!
//! An LTS pairs a set of proposition-labeled states with a set of
//! transitions `(source, action, successors)`. A transition's successor set
//! is nonempty; more than one successor expresses nondeterministic outcomes
//! of the action. The system is immutable once constructed.

use crate::policy::Policy;
use crate::set;
use std::fmt;
use thiserror::Error;

/// A state identifier. Opaque and totally ordered; displayed as the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An action. `Tau` is the reserved marker for "already satisfied, do
/// nothing"; it never occurs in a source domain and is only synthesized on
/// goal states during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// The reserved goal marker τ.
    Tau,
    /// A named domain action.
    Name(String),
}

impl Action {
    /// Create a named action.
    pub fn name(name: impl Into<String>) -> Self {
        Action::Name(name.into())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tau => write!(f, "τ"),
            Action::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A state together with the propositions that hold in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledState {
    pub id: StateId,
    /// Sorted, deduplicated proposition texts.
    pub labels: Vec<String>,
}

impl LabeledState {
    /// Create a labeled state, canonicalizing the label set.
    pub fn new(id: u32, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: StateId(id),
            labels: set::canonicalize(labels.into_iter().map(Into::into)),
        }
    }

    /// Whether the given proposition holds in this state.
    pub fn satisfies(&self, prop: &str) -> bool {
        self.labels.binary_search_by(|l| l.as_str().cmp(prop)).is_ok()
    }
}

/// A transition: one action at one state, with its nondeterministic
/// outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub source: StateId,
    pub action: Action,
    /// Sorted, nonempty set of possible successor states.
    pub targets: Vec<StateId>,
}

impl Transition {
    /// Create a transition with a named action.
    pub fn new(source: u32, action: impl Into<String>, targets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            source: StateId(source),
            action: Action::name(action),
            targets: set::canonicalize(targets.into_iter().map(StateId)),
        }
    }

    /// A transition that cannot make progress: its only outcome is its own
    /// source. Such transitions are ignored by the preimage operators unless
    /// the action is τ.
    pub fn is_pure_self_loop(&self) -> bool {
        self.targets == [self.source]
    }
}

/// A malformed-domain error.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate state {id}")]
    DuplicateState { id: StateId },

    #[error("duplicate transition ({state}, {action})")]
    DuplicateTransition { state: StateId, action: Action },

    #[error("transition ({state}, {action}) references unknown state {id}")]
    UnknownState {
        state: StateId,
        action: Action,
        id: StateId,
    },

    #[error("transition ({state}, {action}) has no successors")]
    EmptySuccessors { state: StateId, action: Action },

    #[error("the action τ is reserved and cannot appear in a source domain (state {state})")]
    ReservedAction { state: StateId },
}

/// An immutable labeled transition system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lts {
    /// States sorted by id.
    states: Vec<LabeledState>,
    /// Transitions sorted by (source, action).
    transitions: Vec<Transition>,
}

impl Lts {
    /// Build a source domain, validating its invariants: unique state ids,
    /// unique `(source, action)` pairs, nonempty successor sets that only
    /// reference known states, and no reserved τ action.
    pub fn new(
        states: impl IntoIterator<Item = LabeledState>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, ModelError> {
        let mut states: Vec<LabeledState> = states.into_iter().collect();
        states.sort_by_key(|s| s.id);
        for w in states.windows(2) {
            if w[0].id == w[1].id {
                return Err(ModelError::DuplicateState { id: w[0].id });
            }
        }
        let ids: Vec<StateId> = states.iter().map(|s| s.id).collect();

        let mut transitions: Vec<Transition> = transitions.into_iter().collect();
        transitions.sort_by(|a, b| (a.source, &a.action).cmp(&(b.source, &b.action)));
        for w in transitions.windows(2) {
            if w[0].source == w[1].source && w[0].action == w[1].action {
                return Err(ModelError::DuplicateTransition {
                    state: w[0].source,
                    action: w[0].action.clone(),
                });
            }
        }
        for t in &transitions {
            if t.action == Action::Tau {
                return Err(ModelError::ReservedAction { state: t.source });
            }
            if t.targets.is_empty() {
                return Err(ModelError::EmptySuccessors {
                    state: t.source,
                    action: t.action.clone(),
                });
            }
            for &id in std::iter::once(&t.source).chain(&t.targets) {
                if ids.binary_search(&id).is_err() {
                    return Err(ModelError::UnknownState {
                        state: t.source,
                        action: t.action.clone(),
                        id,
                    });
                }
            }
        }

        Ok(Self {
            states,
            transitions,
        })
    }

    /// Assemble an LTS from parts already in canonical order. Used by the
    /// projections, which derive well-formed systems (possibly containing
    /// synthetic τ-loops) from a validated source.
    pub(crate) fn from_sorted_parts(states: Vec<LabeledState>, transitions: Vec<Transition>) -> Self {
        debug_assert!(set::is_canonical(
            &states.iter().map(|s| s.id).collect::<Vec<_>>()
        ));
        debug_assert!(set::is_canonical(
            &transitions
                .iter()
                .map(|t| (t.source, t.action.clone()))
                .collect::<Vec<_>>()
        ));
        Self {
            states,
            transitions,
        }
    }

    /// The labeled states, sorted by id.
    pub fn states(&self) -> &[LabeledState] {
        &self.states
    }

    /// The transitions, sorted by (source, action).
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// All state ids, sorted.
    pub fn state_ids(&self) -> Vec<StateId> {
        self.states.iter().map(|s| s.id).collect()
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Option<&LabeledState> {
        self.states
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &self.states[i])
    }

    /// The universal policy: every `(source, action)` pair that appears in
    /// the transition set. Top element of the greatest-fixed-point
    /// iteration.
    pub fn universe(&self) -> Policy {
        Policy::from_pairs(
            self.transitions
                .iter()
                .map(|t| (t.source, t.action.clone())),
        )
    }
}
