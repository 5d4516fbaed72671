//! A Domain represents the set of points where a distribution puts its mass
//! (the [support](https://en.wikipedia.org/wiki/Support_(mathematics))).
//!
//! It has 2 variants, wrapped by [Support]:
//!  - [DiscreteDomain]: natural families and the categorical family.
//!  - [ContinuousDomain]: real families.
//!
//! Discrete domains can be iterated (see [DiscreteDomain::iter]). The iterator
//! is finite exactly when the enumeration descriptor of the distribution is a
//! finite count.
//!

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// If `max < min` the domain is empty.
    Range(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    From(i64),
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range (both inclusive).
    ///
    /// The first number is the minimum, and the last is the maximum.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
}

/// The support of a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Support {
    Discrete(DiscreteDomain),
    Continuous(ContinuousDomain),
}

impl DiscreteDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x.fract() != 0.0 {
            // the value is fractional (or NaN / infinite)
            return false;
        }

        let x_int: i64 = x as i64;

        return match self {
            DiscreteDomain::Range(min, max) => (*min <= x_int) && (x_int <= *max),
            DiscreteDomain::From(min) => *min <= x_int,
        };
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// The upper bound can be positive infinity. If the bounds are finite,
    /// the values themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match &self {
            DiscreteDomain::Range(min, max) => (*min as f64, *max as f64),
            DiscreteDomain::From(min) => (*min as f64, f64::INFINITY),
        };
    }

    /// Returns an iteratior that iterates trough all the elements in the domain,
    /// in increasing order.
    ///
    /// Warning: the iterator may be infinite.
    #[must_use]
    pub fn iter(&self) -> DiscreteDomainIterator<'_> {
        return DiscreteDomainIterator {
            domain: self,
            next_value: None,
            done: false,
        };
    }

    /// Returns the number of elements in the domain, or [None] if it is infinite.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        return match self {
            DiscreteDomain::Range(min, max) => {
                if max < min {
                    Some(0)
                } else {
                    Some(max.abs_diff(*min) as usize + 1)
                }
            }
            DiscreteDomain::From(_) => None,
        };
    }

    /// Returns true if the domain contains a finite number of elements.
    #[must_use]
    pub fn contains_finite_elements(&self) -> bool {
        return match self {
            DiscreteDomain::Range(_, _) => true,
            DiscreteDomain::From(_) => false,
        };
    }
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        return match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
        };
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
        };
    }
}

impl Support {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        return match self {
            Support::Discrete(domain) => domain.contains(x),
            Support::Continuous(domain) => domain.contains(x),
        };
    }

    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match self {
            Support::Discrete(domain) => domain.get_bounds(),
            Support::Continuous(domain) => domain.get_bounds(),
        };
    }
}

pub struct DiscreteDomainIterator<'a> {
    domain: &'a DiscreteDomain,
    /// [None] before the first value has been given.
    next_value: Option<i64>,
    /// Set after giving `i64::MAX`.
    done: bool,
}

impl Iterator for DiscreteDomainIterator<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current: i64 = match self.next_value {
            Some(v) => v,
            None => match self.domain {
                DiscreteDomain::Range(min, _) | DiscreteDomain::From(min) => *min,
            },
        };

        if let DiscreteDomain::Range(_, max) = self.domain {
            if *max < current {
                return None;
            }
        }

        match current.checked_add(1) {
            Some(next) => self.next_value = Some(next),
            None => self.done = true,
        }
        return Some(current);
    }
}
