use UnifiedDistributions::{
    configuration,
    distribution::{Distribution, Sample},
};
use assert_approx_eq::assert_approx_eq;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Pearson's chi-squared statistic for the observed counts against the
/// expected probabilities.
fn chi_squared(observed: &[usize], probabilities: &[f64]) -> f64 {
    let n: f64 = observed.iter().sum::<usize>() as f64;
    return observed
        .iter()
        .zip(probabilities)
        .map(|(&o, &p)| {
            let expected: f64 = n * p;
            let diff: f64 = o as f64 - expected;
            diff * diff / expected
        })
        .sum();
}

#[cfg(test)]
mod goodness_of_fit_tests {

    use super::*;

    #[test]
    fn categorical_frequencies() {
        let probabilities: [f64; 3] = [0.2, 0.3, 0.5];
        let d: Distribution = Distribution::categorical(probabilities).unwrap();
        let mut rng = configuration::seeded_rng(20240601);

        let mut observed: [usize; 3] = [0; 3];
        for s in d.sample_multiple(100_000, &mut rng).unwrap() {
            match s {
                Sample::Integer(k) => observed[k as usize] += 1,
                Sample::Real(_) => panic!("categorical samples are integers"),
            }
        }

        // 2 degrees of freedom, 0.1% significance
        let critical: f64 = ChiSquared::new(2.0).unwrap().inverse_cdf(0.999);
        // closed form for 2 degrees of freedom: -2 ln(0.001)
        assert_approx_eq!(critical, 13.815510557964274, 0.01);

        let statistic: f64 = chi_squared(&observed, &probabilities);
        assert!(
            statistic < critical,
            "chi^2 = {statistic} (critical {critical}), observed {observed:?}"
        );
    }

    #[test]
    fn sample_means() {
        let mut rng = configuration::seeded_rng(5);
        let n: usize = 50_000;

        // (distribution, expected mean, tolerance)
        let cases: [(Distribution, f64, f64); 6] = [
            (Distribution::bernoulli(0.3).unwrap(), 0.3, 0.02),
            (Distribution::binomial(10, 0.4).unwrap(), 4.0, 0.05),
            (Distribution::poisson(3.0).unwrap(), 3.0, 0.05),
            (Distribution::exponential(2.0).unwrap(), 2.0, 0.05),
            (Distribution::normal(-1.0, 2.0).unwrap(), -1.0, 0.05),
            (Distribution::uniform(2.0, 4.0).unwrap(), 3.0, 0.02),
        ];

        for (d, expected, tolerance) in cases {
            let samples: Vec<Sample> = d.sample_multiple(n, &mut rng).unwrap();
            let mean: f64 = samples.iter().map(|s| s.as_f64()).sum::<f64>() / n as f64;
            assert!(
                (mean - expected).abs() < tolerance,
                "{}: mean {mean}, expected {expected}",
                d.family()
            );
        }
    }

    #[test]
    fn empirical_cdf() {
        let d: Distribution = Distribution::logistic(0.0, 1.0).unwrap();
        let mut rng = configuration::seeded_rng(99);
        let n: usize = 50_000;

        let samples: Vec<Sample> = d.sample_multiple(n, &mut rng).unwrap();
        for x in [-2.0, 0.0, 1.5] {
            let below: usize = samples.iter().filter(|s| s.as_f64() <= x).count();
            let empirical: f64 = below as f64 / n as f64;
            assert_approx_eq!(empirical, d.cdf(x, false, false).unwrap(), 0.01);
        }
    }
}
