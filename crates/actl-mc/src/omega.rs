//! Step-function constructors for the global temporal operators.
//!
//! Each constructor closes over the LTS (and, for the until/finally
//! families, the goal policy, the states the path formula must hold in, and
//! the current evaluation scope) and returns the monotone step consumed by
//! the fixed-point driver. The until/finally steps grow a least fixed point:
//! they pick up the preimage of the accumulator, prune it against what is
//! already covered, and fold the goal seed back in. The globally steps are
//! partial: they only make sense driven from the universal policy by the
//! greatest-fixed-point driver, which shrinks them onto the region that can
//! sustain the invariant.

use actl_model::{strong_preimage, weak_preimage, Lts, Policy, Scope, StateId};

/// Step for `eu(psi, phi)`: weak preimage restricted to psi-states.
pub fn eu_step<'a>(
    lts: &'a Lts,
    along: &'a [StateId],
    goal: &'a Policy,
    scope: Scope,
) -> impl Fn(&Policy) -> Policy + 'a {
    move |x| {
        weak_preimage(lts, x)
            .restrict(along)
            .prune(x, scope)
            .union(x)
            .union(goal)
    }
}

/// Step for `au(psi, phi)`: strong preimage restricted to psi-states.
pub fn au_step<'a>(
    lts: &'a Lts,
    along: &'a [StateId],
    goal: &'a Policy,
    scope: Scope,
) -> impl Fn(&Policy) -> Policy + 'a {
    move |x| {
        strong_preimage(lts, x)
            .restrict(along)
            .prune(x, scope)
            .union(x)
            .union(goal)
    }
}

/// Step for `ef(phi)`: unrestricted weak preimage.
pub fn ef_step<'a>(
    lts: &'a Lts,
    goal: &'a Policy,
    scope: Scope,
) -> impl Fn(&Policy) -> Policy + 'a {
    move |x| weak_preimage(lts, x).prune(x, scope).union(x).union(goal)
}

/// Step for `af(phi)`: unrestricted strong preimage.
pub fn af_step<'a>(
    lts: &'a Lts,
    goal: &'a Policy,
    scope: Scope,
) -> impl Fn(&Policy) -> Policy + 'a {
    move |x| strong_preimage(lts, x).prune(x, scope).union(x).union(goal)
}

/// Step for the ν-phase of `eg(phi)`: keep pairs some outcome of which
/// stays inside the current region.
pub fn eg_step(lts: &Lts) -> impl Fn(&Policy) -> Policy + '_ {
    let universe = lts.universe();
    move |x| weak_preimage(lts, x).intersect(&universe)
}

/// Step for the ν-phase of `ag(phi)`: keep pairs every outcome of which
/// stays inside the current region.
pub fn ag_step(lts: &Lts) -> impl Fn(&Policy) -> Policy + '_ {
    let universe = lts.universe();
    move |x| strong_preimage(lts, x).intersect(&universe)
}
