//! Alpha-CTL policy synthesis for nondeterministic planning domains.
//!
//! The entry points are [`sat`], which synthesizes the policy satisfying a
//! goal formula over a labeled transition system, and [`check`], which also
//! projects the domain through that policy.

pub mod eval;
pub mod fixpoint;
pub mod omega;

pub use eval::{check, sat, EvalError, EvalResult, Evaluator};
