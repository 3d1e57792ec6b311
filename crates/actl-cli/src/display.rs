//! Text rendering of domains and policies.

use actl_model::{Lts, Policy};
use std::fmt::Write;

/// Render an LTS as an indented states/transitions listing.
pub fn render_lts(lts: &Lts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "states:");
    for state in lts.states() {
        let _ = writeln!(out, "  {}: {{{}}}", state.id, state.labels.join(", "));
    }
    let _ = writeln!(out, "transitions:");
    for t in lts.transitions() {
        let targets: Vec<String> = t.targets.iter().map(|s| s.to_string()).collect();
        let _ = writeln!(
            out,
            "  {} --{}--> {{{}}}",
            t.source,
            t.action,
            targets.join(", ")
        );
    }
    out
}

/// Render a policy as one pair per line.
pub fn render_policy(policy: &Policy) -> String {
    if policy.is_empty() {
        return "  (empty: the goal is unachievable)\n".to_string();
    }
    let mut out = String::new();
    for (state, action) in policy.pairs() {
        let _ = writeln!(out, "  {state}: {action}");
    }
    out
}
