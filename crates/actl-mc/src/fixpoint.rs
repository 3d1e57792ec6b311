//! Fixed-point driver over the policy lattice.
//!
//! Iterates a monotone step function until two consecutive policies are
//! structurally equal. Policies are canonically sorted sets, so the equality
//! check is exact and cheap. Termination is guaranteed by finiteness of the
//! state-action universe and monotonicity of the step functions built in
//! [`crate::omega`]; a safety bound turns a non-monotone step (a bug) into
//! an error instead of a hang.

use crate::eval::EvalError;
use actl_model::{Lts, Policy};
use tracing::trace;

/// Least fixed point: iterate from the empty policy.
pub fn least(lts: &Lts, step: impl Fn(&Policy) -> Policy) -> Result<Policy, EvalError> {
    iterate(lts, Policy::empty(), step)
}

/// Greatest fixed point: iterate from the universal policy.
pub fn greatest(lts: &Lts, step: impl Fn(&Policy) -> Policy) -> Result<Policy, EvalError> {
    iterate(lts, lts.universe(), step)
}

fn iterate(
    lts: &Lts,
    seed: Policy,
    step: impl Fn(&Policy) -> Policy,
) -> Result<Policy, EvalError> {
    // Every policy in a monotone chain stays inside the transition universe
    // plus one τ-pair per state, so the chain length is bounded by their
    // combined size.
    let bound = lts.universe().len() + lts.states().len() + 1;
    let mut current = seed;
    for iteration in 0..bound {
        let next = step(&current);
        if next == current {
            trace!(iteration, size = current.len(), "fixed point reached");
            return Ok(current);
        }
        trace!(iteration, size = next.len(), "fixed-point step");
        current = next;
    }
    Err(EvalError::FixpointDiverged { bound })
}
