//! Welch t-test timing comparison between two input classes

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Statistics of one two-class timing comparison
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub confidence_interval: (f64, f64),
    pub combined_score: f64,
    pub is_constant_time: bool,
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let avg = start.elapsed().as_nanos() / self.num_iterations.max(1) as u128;
            times.push(avg);
        }
        times
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drops samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let denom = (var_a / n_a + var_b / n_b).sqrt();
        if denom == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / denom
    }

    // Welch-Satterthwaite
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let term_a = Self::variance(times_a, mean_a) / n_a;
        let term_b = Self::variance(times_b, mean_b) / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    /// Two-tailed p-value from Student's t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat.abs() < 2.0 { 0.5 } else { 0.01 };
        }

        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.5,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        if pooled == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / pooled
    }

    fn t_critical_value(df: f64, confidence_level: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0),
            Err(_) => 1.96,
        }
    }

    /// Weighted mix of mean ratio, t-statistic and relative spread; 1.0 is ideal
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;

        if !score.is_finite() || score < 1.0 {
            mean_ratio
        } else {
            score
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        combined_score_threshold: f64,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);

        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let var_a = Self::variance(&clean_a, mean_a);
        let var_b = Self::variance(&clean_b, mean_b);
        let std_dev_a = var_a.sqrt();
        let std_dev_b = var_b.sqrt();

        let mean_ratio = f64::max(mean_a, mean_b) / f64::min(mean_a, mean_b).max(1.0);
        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let cohens_d = Self::cohens_d(&clean_a, &clean_b);

        let standard_error =
            (var_a / clean_a.len() as f64 + var_b / clean_b.len() as f64).sqrt();
        let margin = Self::t_critical_value(degrees_of_freedom, 0.95) * standard_error;
        let mean_diff = (mean_a - mean_b).abs();
        let confidence_interval = ((mean_diff - margin).max(0.0), mean_diff + margin);

        let rel_std_dev = f64::max(std_dev_a / mean_a, std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            confidence_interval,
            combined_score,
            is_constant_time: combined_score <= combined_score_threshold,
        })
    }
}

/// One-paragraph report for test output
pub fn describe(analysis: &TimingAnalysis, name: &str) -> String {
    let verdict = if analysis.is_constant_time {
        "PASS"
    } else {
        "FAIL"
    };
    format!(
        "{verdict}: {name}\n  mean: {:.0} ns vs {:.0} ns (ratio {:.3})\n  t={:.2}, df={:.1}, p={:.3e}, d={:.2}\n  95% CI of difference: ({:.1}, {:.1}) ns\n  combined score: {:.3}",
        analysis.mean_a,
        analysis.mean_b,
        analysis.mean_ratio,
        analysis.t_statistic,
        analysis.degrees_of_freedom,
        analysis.p_value,
        analysis.cohens_d,
        analysis.confidence_interval.0,
        analysis.confidence_interval.1,
        analysis.combined_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_score_as_constant_time() {
        let tester = TimingTester::new(8, 1);
        let a = [100u128, 101, 99, 100, 102, 98, 100, 100];
        let analysis = tester.analyze_constant_time(&a, &a, 1.8).unwrap();

        assert_eq!(analysis.mean_ratio, 1.0);
        assert_eq!(analysis.t_statistic, 0.0);
        assert!(analysis.is_constant_time);
        assert!(describe(&analysis, "same").starts_with("PASS"));
    }

    #[test]
    fn test_separated_samples_fail() {
        let tester = TimingTester::new(8, 1);
        let a = [100u128, 101, 99, 100, 102, 98, 100, 100];
        let b = [300u128, 301, 299, 300, 302, 298, 300, 300];
        let analysis = tester.analyze_constant_time(&a, &b, 1.8).unwrap();

        assert!(analysis.mean_ratio > 2.9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_remove_outliers() {
        let times = [10u128, 11, 10, 12, 11, 10, 1000, 11];
        let clean = TimingTester::remove_outliers(&times);
        assert!(!clean.contains(&1000));
        assert_eq!(clean.len(), 7);
    }
}
