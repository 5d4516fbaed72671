use UnifiedDistributions::{
    distribution::{Distribution, Enumeration, Sample},
    distributions::Categorical::Categorical,
    domain::DiscreteDomain,
    errors::DistributionError,
    guard::{Argument, normalize_weights},
    registry::Family,
};
use assert_approx_eq::assert_approx_eq;

const EPSILON: f64 = 1.0e-9;

fn weight_sets() -> Vec<Vec<f64>> {
    return vec![
        vec![0.2, 0.3, 0.5],
        vec![2.0, 2.0, 4.0],
        vec![1.0],
        vec![0.1, 0.0, 0.4, 0.0, 0.5],
        vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0],
    ];
}

#[cfg(test)]
mod construction_tests {

    use super::*;

    #[test]
    fn weights_are_normalized() {
        let d: Distribution = Distribution::categorical([2.0, 2.0, 4.0]).unwrap();
        assert_eq!(d.weights(), Some(&[0.25, 0.25, 0.5][..]));
        assert_eq!(d.parameters(), None);
        assert_eq!(d.family(), Family::Categorical);
    }

    #[test]
    fn normalized_weights_are_kept() {
        let d: Distribution = Distribution::categorical(vec![0.3, 0.7]).unwrap();
        assert_eq!(d.weights(), Some(&[0.3, 0.7][..]));
    }

    #[test]
    fn integer_weights() {
        let d: Distribution = Distribution::categorical(vec![1_i32, 3]).unwrap();
        assert_eq!(d.weights(), Some(&[0.25, 0.75][..]));
    }

    #[test]
    fn invalid_weights() {
        let cases: [Vec<f64>; 6] = [
            vec![-1.0, 2.0],
            vec![0.0, 0.0],
            vec![],
            vec![1.0, f64::NAN],
            vec![1.0, f64::INFINITY],
            vec![f64::MAX, f64::MAX],
        ];

        for weights in cases {
            let result = Distribution::categorical(weights.clone());
            assert!(
                matches!(
                    result,
                    Err(DistributionError::InvalidArgument {
                        family: Family::Categorical,
                        parameter: "weights",
                        ..
                    })
                ),
                "{weights:?} should be rejected"
            );
        }
    }

    #[test]
    fn scalar_instead_of_weights() {
        let result = Distribution::categorical(0.5);
        assert!(matches!(result, Err(DistributionError::InvalidArgument { .. })));
    }

    #[test]
    fn wrong_number_of_arguments() {
        let arguments: Vec<Argument> = vec![Argument::from(vec![1.0, 2.0]), Argument::from(1.0)];
        let result = Distribution::new(Family::Categorical, arguments);
        assert!(matches!(
            result,
            Err(DistributionError::InvalidArgument {
                family: Family::Categorical,
                ..
            })
        ));

        let result = Distribution::new(Family::Categorical, vec![]);
        assert!(matches!(result, Err(DistributionError::InvalidArgument { .. })));
    }

    #[test]
    fn engine_constructor() {
        let engine: Categorical = Categorical::new(&[1.0, 1.0]).unwrap();
        assert_eq!(engine.len(), 2);
        assert!(!engine.is_empty());
        assert_eq!(engine.domain(), DiscreteDomain::Range(0, 1));

        let d: Distribution = Distribution::from(engine);
        assert_eq!(d, Distribution::categorical([0.5, 0.5]).unwrap());

        assert!(Categorical::new(&[-0.5, 1.5]).is_err());
    }

    #[test]
    fn normalize() {
        let normalized: Box<[f64]> = normalize_weights(vec![1.0, 2.0, 1.0]).unwrap();
        assert_eq!(&normalized[..], &[0.25, 0.5, 0.25]);
    }

    #[test]
    fn enumeration() {
        for weights in weight_sets() {
            let len: usize = weights.len();
            let d: Distribution = Distribution::categorical(weights).unwrap();
            assert_eq!(d.enumeration(), Enumeration::Finite(len));
        }
    }
}

#[cfg(test)]
mod operation_tests {

    use super::*;

    #[test]
    fn pdf_adds_up_to_one() {
        for weights in weight_sets() {
            let len: usize = weights.len();
            let d: Distribution = Distribution::categorical(weights).unwrap();
            let total: f64 = (0..len).map(|k| d.pdf(k as f64, false).unwrap()).sum();
            assert_approx_eq!(total, 1.0, EPSILON);
        }
    }

    #[test]
    fn cdf_is_monotone_and_ends_at_one() {
        for weights in weight_sets() {
            let len: usize = weights.len();
            let d: Distribution = Distribution::categorical(weights).unwrap();

            let mut previous: f64 = 0.0;
            for k in 0..len {
                let c: f64 = d.cdf(k as f64, false, false).unwrap();
                assert!(previous <= c);
                // cdf(k) = cdf(k - 1) + pdf(k)
                assert_approx_eq!(c, previous + d.pdf(k as f64, false).unwrap(), EPSILON);
                previous = c;
            }
            assert_approx_eq!(previous, 1.0, EPSILON);
        }
    }

    #[test]
    fn inverse_of_cdf() {
        for weights in weight_sets() {
            let len: usize = weights.len();
            let d: Distribution = Distribution::categorical(weights).unwrap();

            for k in 0..len {
                if d.pdf(k as f64, false).unwrap() == 0.0 {
                    // a category without mass is never the result of the scan
                    continue;
                }
                let p: f64 = d.cdf(k as f64, false, false).unwrap() - EPSILON;
                assert_eq!(d.inv_cdf(p, false, false).unwrap(), k as f64);
            }
        }
    }

    #[test]
    fn log_and_complement() {
        let d: Distribution = Distribution::categorical([0.2, 0.3, 0.5]).unwrap();
        for k in 0..3 {
            let x: f64 = f64::from(k);
            let pdf: f64 = d.pdf(x, false).unwrap();
            let cdf: f64 = d.cdf(x, false, false).unwrap();

            assert_approx_eq!(d.pdf(x, true).unwrap(), pdf.ln(), EPSILON);
            assert_approx_eq!(d.cdf(x, false, true).unwrap(), 1.0 - cdf, EPSILON);
            assert_approx_eq!(d.cdf(x, true, false).unwrap(), cdf.ln(), EPSILON);
        }
        // log(1 - 1) = -inf
        assert_eq!(d.cdf(2.0, true, true).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn known_values() {
        let d: Distribution = Distribution::categorical([2.0, 2.0, 4.0]).unwrap();
        assert_eq!(d.pdf(0.0, false).unwrap(), 0.25);
        assert_eq!(d.pdf(2.0, false).unwrap(), 0.5);
        assert_eq!(d.cdf(1.0, false, false).unwrap(), 0.5);
        assert_eq!(d.inv_cdf(0.6, false, false).unwrap(), 2.0);
        assert_eq!(d.inv_cdf(0.0, false, false).unwrap(), 0.0);
    }

    #[test]
    fn out_of_range() {
        let d: Distribution = Distribution::categorical([0.2, 0.3, 0.5]).unwrap();
        for x in [3.0, -1.0, 0.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(d.pdf(x, false), Err(DistributionError::OutOfRange { len: 3, .. })),
                "pdf({x})"
            );
            assert!(
                matches!(
                    d.cdf(x, false, false),
                    Err(DistributionError::OutOfRange { len: 3, .. })
                ),
                "cdf({x})"
            );
        }
    }

    #[test]
    fn unsupported_inverse_flags() {
        let d: Distribution = Distribution::categorical([0.2, 0.3, 0.5]).unwrap();
        for (log, complement) in [(true, false), (false, true), (true, true)] {
            let result = d.inv_cdf(0.5_f64.ln(), log, complement);
            assert!(matches!(
                result,
                Err(DistributionError::UnsupportedCombination {
                    operation: "inv_cdf",
                    ..
                })
            ));
        }
    }

    #[test]
    fn exhausted_support() {
        let d: Distribution = Distribution::categorical([0.2, 0.3, 0.5]).unwrap();
        for p in [1.0, 1.5, f64::NAN] {
            assert!(matches!(
                d.inv_cdf(p, false, false),
                Err(DistributionError::ExhaustedSupport { .. })
            ));
        }
    }

    #[test]
    fn rounding_can_exhaust_the_support() {
        let mut weights: Vec<f64> = vec![1.0; 10];
        weights.push(3.0);
        let d: Distribution = Distribution::categorical(weights).unwrap();

        let total: f64 = d.weights().unwrap().iter().sum();
        assert_eq!(total, 1.0);

        // the largest value a `[0, 1)` draw can produce
        let u: f64 = 1.0 - f64::EPSILON / 2.0;
        assert!(matches!(
            d.inv_cdf(u, false, false),
            Err(DistributionError::ExhaustedSupport { .. })
        ));
    }

    #[test]
    fn samples_are_indices() {
        let d: Distribution = Distribution::categorical([0.0, 1.0, 0.0]).unwrap();
        let mut rng = UnifiedDistributions::configuration::seeded_rng(11);
        for s in d.sample_multiple(100, &mut rng).unwrap() {
            assert_eq!(s, Sample::Integer(1));
        }
    }
}
