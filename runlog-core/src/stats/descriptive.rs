/// The five summary statistics of one group.
///
/// Every field is `NaN` when the group has no samples; `std` is also `NaN`
/// for a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptive {
    pub mean: f64,
    /// Sample standard deviation (N - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Descriptive {
    pub const EMPTY: Self = Self {
        mean: f64::NAN,
        std: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
        median: f64::NAN,
    };

    /// Computes the statistics of `samples`, sorting them in place.
    pub fn from_samples(samples: &mut [f64]) -> Self {
        if samples.is_empty() {
            return Self::EMPTY;
        }

        samples.sort_by(f64::total_cmp);
        let n = samples.len();
        let min = samples[0];
        let max = samples[n - 1];

        // Identical samples: keep mean exact and std at zero.
        if min == max {
            return Self {
                mean: min,
                std: if n > 1 { 0.0 } else { f64::NAN },
                min,
                max,
                median: min,
            };
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let variance =
                samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        Self {
            mean,
            std,
            min,
            max,
            median: median(samples),
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.mean, self.std, self.min, self.max, self.median]
    }
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
