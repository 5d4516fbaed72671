//! # Registry
//!
//! The declarative table of distribution families.
//!
//! Every family is described by a [FamilySpec]:
//!  - An ordered list of parameter names.
//!  - A [ParameterDomain], wich selects the default guard.
//!  - An [EnumerationRule], the enumeration descriptor of the family.
//!  - An optional custom [Guard] that replaces the default one.
//!
//! Adding a family means adding a variant to [Family] and a row to [REGISTRY].
//! The guard, the dispatch and the enumeration of a
//! [Distribution](crate::distribution::Distribution) are all driven by this table.
//!

use core::fmt;

use crate::guard::{self, Guard, Parameters};

/// The parametric families known by the library.
///
/// The order of the variants is the order of the rows in [REGISTRY].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    // Natural-valued
    Bernoulli,
    Binomial,
    Geometric,
    Poisson,
    // Real-valued
    Beta,
    Cauchy,
    Exponential,
    Gamma,
    Logistic,
    Normal,
    Uniform,
    // Unconstrained
    Categorical,
}

/// Classification of the parameters of a family. Governs the default coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterDomain {
    /// Integer-like values (counts). Samples are integers.
    Natural,
    /// Real scalars. Samples are floating point.
    Real,
    /// Arbitrary structured data (a weight vector). Served by a native engine,
    /// not by the numeric backend.
    Unconstrained,
}

/// How the support of a family can be enumerated.
#[derive(Debug, Clone, Copy)]
pub enum EnumerationRule {
    /// A fixed number of values.
    Count(usize),
    /// The number of values depends on the parameters of the distribution.
    Derived(fn(&Parameters) -> usize),
    /// Infinitely many values that can be listed one by one.
    Lazy,
    /// The support is not countable.
    NotEnumerable,
}

/// One row of the [REGISTRY].
#[derive(Debug, Clone, Copy)]
pub struct FamilySpec {
    pub family: Family,
    pub name: &'static str,
    pub parameters: &'static [&'static str],
    pub domain: ParameterDomain,
    pub enumeration: EnumerationRule,
    /// Replaces the default guard of the [ParameterDomain] if present.
    pub custom_guard: Option<Guard>,
}

fn binomial_count(parameters: &Parameters) -> usize {
    // `as` saturates: negative or NaN `n` gives a single value, a huge `n`
    // gives `usize::MAX`
    return match parameters {
        Parameters::Scalars(values) => values
            .first()
            .map_or(0, |&n| n as usize)
            .saturating_add(1),
        Parameters::Categorical(_) => 0,
    };
}

fn categorical_count(parameters: &Parameters) -> usize {
    return match parameters {
        Parameters::Scalars(_) => 0,
        Parameters::Categorical(categorical) => categorical.len(),
    };
}

/// The family table.
pub static REGISTRY: [FamilySpec; 12] = [
    FamilySpec {
        family: Family::Bernoulli,
        name: "bernoulli",
        parameters: &["prob"],
        domain: ParameterDomain::Natural,
        enumeration: EnumerationRule::Count(2),
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Binomial,
        name: "binomial",
        parameters: &["n", "p"],
        domain: ParameterDomain::Natural,
        enumeration: EnumerationRule::Derived(binomial_count),
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Geometric,
        name: "geometric",
        parameters: &["p"],
        domain: ParameterDomain::Natural,
        enumeration: EnumerationRule::Lazy,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Poisson,
        name: "poisson",
        parameters: &["mean"],
        domain: ParameterDomain::Natural,
        enumeration: EnumerationRule::Lazy,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Beta,
        name: "beta",
        parameters: &["a", "b"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Cauchy,
        name: "cauchy",
        parameters: &["mode", "scale"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Exponential,
        name: "exponential",
        parameters: &["mean"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Gamma,
        name: "gamma",
        parameters: &["shape", "scale"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Logistic,
        name: "logistic",
        parameters: &["mean", "scale"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Normal,
        name: "normal",
        parameters: &["mean", "stddev"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Uniform,
        name: "uniform",
        parameters: &["min", "max"],
        domain: ParameterDomain::Real,
        enumeration: EnumerationRule::NotEnumerable,
        custom_guard: None,
    },
    FamilySpec {
        family: Family::Categorical,
        name: "categorical",
        parameters: &["weights"],
        domain: ParameterDomain::Unconstrained,
        enumeration: EnumerationRule::Derived(categorical_count),
        custom_guard: Some(guard::categorical_guard),
    },
];

impl Family {
    /// Every family, in registry order.
    pub const ALL: [Family; 12] = [
        Family::Bernoulli,
        Family::Binomial,
        Family::Geometric,
        Family::Poisson,
        Family::Beta,
        Family::Cauchy,
        Family::Exponential,
        Family::Gamma,
        Family::Logistic,
        Family::Normal,
        Family::Uniform,
        Family::Categorical,
    ];

    /// Returns the row of the [REGISTRY] that declares this family.
    #[must_use]
    pub fn spec(self) -> &'static FamilySpec {
        return &REGISTRY[self as usize];
    }

    /// The lowercase name of the family (`"normal"`, `"categorical"`...).
    #[must_use]
    pub fn name(self) -> &'static str {
        return self.spec().name;
    }

    /// Finds a family by name. The comparison ignores ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Family> {
        return REGISTRY
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
            .map(|spec| spec.family);
    }

    #[must_use]
    pub fn domain(self) -> ParameterDomain {
        return self.spec().domain;
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FamilySpec {
    /// Returns the guard that runs when a distribution of this family is built:
    /// the custom one if declared, otherwise the default coercion to floating point.
    #[must_use]
    pub fn guard(&self) -> Guard {
        return self.custom_guard.unwrap_or(guard::default_guard);
    }

    /// Position of the parameter called `name`, if the family declares it.
    #[must_use]
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        return self.parameters.iter().position(|&p| p == name);
    }
}
