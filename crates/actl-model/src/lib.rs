//! Planning-domain model for the alpha-CTL checker: labeled transition
//! systems, policies, preimage operators, and policy projections.

pub mod lts;
pub mod policy;
pub mod preimage;
pub mod project;
pub mod set;

pub use lts::{Action, LabeledState, Lts, ModelError, StateId, Transition};
pub use policy::{Policy, Scope};
pub use preimage::{strong_preimage, weak_preimage};
pub use project::{induced, with_tau_loops};
