//! Abstract syntax tree for alpha-CTL goal formulas.
//!
//! Alpha-CTL is branching-time temporal logic with existential actions: the
//! path quantifiers E/A range over the executions an agent can enforce by
//! choosing actions, not over arbitrary paths. Negation is restricted to
//! atomic formulas; the evaluator rejects anything else.

use std::fmt;

/// An alpha-CTL goal formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// The literal `true`, satisfied by every state.
    True,
    /// An atomic proposition, compared against state labels by identity.
    /// Ground compound terms such as `at(ball,2)` are stored in canonical
    /// text form.
    Atom(String),
    /// Negation; the argument must be atomic.
    Not(Box<Formula>),
    /// Conjunction.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction.
    Or(Box<Formula>, Box<Formula>),
    /// Exists Next: some action may reach the subgoal in one step.
    Ex(Box<Formula>),
    /// All Next: some action must reach the subgoal in one step.
    Ax(Box<Formula>),
    /// Exists Until: `eu(psi, phi)`, psi may hold along a path until phi.
    Eu(Box<Formula>, Box<Formula>),
    /// All Until: `au(psi, phi)`, psi holds until phi on every outcome.
    Au(Box<Formula>, Box<Formula>),
    /// Exists Finally: the subgoal is reachable.
    Ef(Box<Formula>),
    /// All Finally: the subgoal is unavoidable.
    Af(Box<Formula>),
    /// Exists Globally: some controllable execution keeps the subgoal
    /// invariant forever.
    Eg(Box<Formula>),
    /// All Globally: every outcome of the chosen actions keeps the subgoal
    /// invariant forever.
    Ag(Box<Formula>),
}

impl Formula {
    /// Constructors for convenience.
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn not(self) -> Self {
        Formula::Not(Box::new(self))
    }

    pub fn and(self, other: Self) -> Self {
        Formula::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Self) -> Self {
        Formula::Or(Box::new(self), Box::new(other))
    }

    pub fn ex(self) -> Self {
        Formula::Ex(Box::new(self))
    }

    pub fn ax(self) -> Self {
        Formula::Ax(Box::new(self))
    }

    /// `self` holds along some controllable path until `goal`.
    pub fn eu(self, goal: Self) -> Self {
        Formula::Eu(Box::new(self), Box::new(goal))
    }

    /// `self` holds along every outcome until `goal`.
    pub fn au(self, goal: Self) -> Self {
        Formula::Au(Box::new(self), Box::new(goal))
    }

    pub fn ef(self) -> Self {
        Formula::Ef(Box::new(self))
    }

    pub fn af(self) -> Self {
        Formula::Af(Box::new(self))
    }

    pub fn eg(self) -> Self {
        Formula::Eg(Box::new(self))
    }

    pub fn ag(self) -> Self {
        Formula::Ag(Box::new(self))
    }

    /// Whether this formula is atomic (`true` or a proposition).
    /// Negation is only defined on atomic formulas.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::True | Formula::Atom(_))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "true"),
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(phi) => write!(f, "not({phi})"),
            Formula::And(phi, psi) => write!(f, "and({phi}, {psi})"),
            Formula::Or(phi, psi) => write!(f, "or({phi}, {psi})"),
            Formula::Ex(phi) => write!(f, "ex({phi})"),
            Formula::Ax(phi) => write!(f, "ax({phi})"),
            Formula::Eu(psi, phi) => write!(f, "eu({psi}, {phi})"),
            Formula::Au(psi, phi) => write!(f, "au({psi}, {phi})"),
            Formula::Ef(phi) => write!(f, "ef({phi})"),
            Formula::Af(phi) => write!(f, "af({phi})"),
            Formula::Eg(phi) => write!(f, "eg({phi})"),
            Formula::Ag(phi) => write!(f, "ag({phi})"),
        }
    }
}
