//! Recursive formula evaluator: from an alpha-CTL goal formula to a policy.
//!
//! `sat` descends the formula tree, synthesizing a policy per subformula.
//! Atomic formulas tag their satisfying states with τ; the propositional
//! connectives are policy set algebra; the local operators are a single
//! preimage; the global operators run fixed-point iterations of the step
//! functions in [`crate::omega`].
//!
//! The globally operators `eg`/`ag` are evaluated in two phases. First a
//! greatest fixed point, seeded from everything the subformula's region
//! offers, peels away pairs that can escape the region; self-loops and
//! disconnected states fall out here. Then a least fixed point over the
//! stabilized region demands forward reachability to a τ-marked live-end,
//! which dissolves nonprogressing cycles and traps. The `scope` flag
//! switches the pruning discipline between the two phases and is saved and
//! restored around the whole construction, so nested globally operators
//! compose.

use actl_model::{
    induced, strong_preimage, weak_preimage, with_tau_loops, Lts, Policy, Scope, StateId,
};
use actl_syntax::Formula;
use thiserror::Error;
use tracing::debug;

use crate::{fixpoint, omega};

/// Evaluation error.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("negation applies only to atomic formulas, found `{formula}`")]
    NonAtomicNegation { formula: String },

    #[error("fixed-point iteration failed to stabilize within {bound} steps")]
    FixpointDiverged { bound: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Synthesize the policy satisfying `formula` over `lts`.
pub fn sat(lts: &Lts, formula: &Formula) -> EvalResult<Policy> {
    Evaluator::new(lts).satisfy(formula)
}

/// Synthesize a policy and project the domain through it: the LTS of states
/// and transitions the policy commits to.
pub fn check(lts: &Lts, formula: &Formula) -> EvalResult<Lts> {
    let policy = sat(lts, formula)?;
    Ok(induced(lts, &policy))
}

/// Formula evaluator over a fixed domain.
pub struct Evaluator<'a> {
    lts: &'a Lts,
    scope: Scope,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator; scope starts in least-fixed-point mode.
    pub fn new(lts: &'a Lts) -> Self {
        Self {
            lts,
            scope: Scope::Min,
        }
    }

    /// Satisfaction: the policy achieving `formula` from every state it
    /// covers.
    pub fn satisfy(&mut self, formula: &Formula) -> EvalResult<Policy> {
        let policy = match formula {
            Formula::True | Formula::Atom(_) => self.atomic_cover(formula)?,

            Formula::Not(inner) => {
                let everything = self.atomic_cover(&Formula::True)?;
                everything.difference(&self.atomic_cover(inner)?)
            }

            Formula::And(left, right) => self.satisfy(left)?.intersect(&self.satisfy(right)?),
            Formula::Or(left, right) => self.satisfy(left)?.union(&self.satisfy(right)?),

            // The local operators report which states are covered, not how:
            // the evaluator has climbed one level, so the pairs collapse to
            // τ-tags for the caller.
            Formula::Ex(inner) => {
                let target = self.satisfy(inner)?;
                Policy::goal_cover(&weak_preimage(self.lts, &target).dom())
            }
            Formula::Ax(inner) => {
                let target = self.satisfy(inner)?;
                Policy::goal_cover(&strong_preimage(self.lts, &target).dom())
            }

            Formula::Eu(along, goal) => {
                let along = self.satisfy(along)?.dom();
                let goal = self.satisfy(goal)?;
                fixpoint::least(
                    self.lts,
                    omega::eu_step(self.lts, &along, &goal, self.scope),
                )?
            }
            Formula::Au(along, goal) => {
                let along = self.satisfy(along)?.dom();
                let goal = self.satisfy(goal)?;
                fixpoint::least(
                    self.lts,
                    omega::au_step(self.lts, &along, &goal, self.scope),
                )?
            }
            Formula::Ef(goal) => {
                let goal = self.satisfy(goal)?;
                fixpoint::least(self.lts, omega::ef_step(self.lts, &goal, self.scope))?
            }
            Formula::Af(goal) => {
                let goal = self.satisfy(goal)?;
                fixpoint::least(self.lts, omega::af_step(self.lts, &goal, self.scope))?
            }

            Formula::Eg(inner) => self.globally(inner, false)?,
            Formula::Ag(inner) => self.globally(inner, true)?,
        };
        debug!(formula = %formula, size = policy.len(), "sat");
        Ok(policy)
    }

    /// The τ-tagged cover of an atomic formula.
    fn atomic_cover(&self, formula: &Formula) -> EvalResult<Policy> {
        let covered: Vec<StateId> = match formula {
            Formula::True => self.lts.state_ids(),
            Formula::Atom(prop) => self
                .lts
                .states()
                .iter()
                .filter(|s| s.satisfies(prop))
                .map(|s| s.id)
                .collect(),
            other => {
                return Err(EvalError::NonAtomicNegation {
                    formula: other.to_string(),
                })
            }
        };
        Ok(Policy::goal_cover(&covered))
    }

    /// Two-phase evaluation of the globally operators; `strong` selects
    /// `ag` over `eg`. The caller's scope is restored on every exit path.
    fn globally(&mut self, inner: &Formula, strong: bool) -> EvalResult<Policy> {
        let saved = self.scope;
        let result = self.globally_phases(inner, strong);
        self.scope = saved;
        result
    }

    fn globally_phases(&mut self, inner: &Formula, strong: bool) -> EvalResult<Policy> {
        // ν-phase: evaluate the invariant region without pruning, loop its
        // goal states, and shrink onto the pairs that cannot (eg: need not)
        // leave it.
        self.scope = Scope::Max;
        let region = self.satisfy(inner)?;
        let looped = with_tau_loops(self.lts, &region);
        let stable = if strong {
            fixpoint::greatest(&looped, omega::ag_step(&looped))?
        } else {
            fixpoint::greatest(&looped, omega::eg_step(&looped))?
        };

        // μ-phase: within the stabilized region, require every covered
        // state to make progress towards a live-end.
        let arena = with_tau_loops(self.lts, &stable);
        let goals = stable.goals();
        self.scope = Scope::Min;
        fixpoint::least(&arena, omega::ef_step(&arena, &goals, self.scope))
    }
}
