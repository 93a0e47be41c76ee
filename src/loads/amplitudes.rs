use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum AmplitudeError {
    #[error("Multipliers and times must have the same length: {multipliers} vs {times}")]
    LengthMismatch { multipliers: usize, times: usize },

    #[error("Time step must be a finite number: {0}")]
    NonFiniteStep(f64),
}

/// A discretized scaling function of time.
///
/// Multiplies a load's magnitude over an analysis history: at `times[i]`
/// the load is scaled by `multipliers[i]`. The two sequences always have
/// the same length; the check happens at construction, not at first use.
/// Deserialization goes through [`Amplitude::new`], so serialized data
/// cannot smuggle in mismatched sequences either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AmplitudeData")]
pub struct Amplitude {
    multipliers: Vec<f64>,
    times: Vec<f64>,
}

#[derive(Deserialize)]
struct AmplitudeData {
    multipliers: Vec<f64>,
    times: Vec<f64>,
}

impl TryFrom<AmplitudeData> for Amplitude {
    type Error = AmplitudeError;

    fn try_from(data: AmplitudeData) -> Result<Self, Self::Error> {
        Amplitude::new(data.multipliers, data.times)
    }
}

impl Amplitude {
    pub fn new(multipliers: Vec<f64>, times: Vec<f64>) -> Result<Self, AmplitudeError> {
        if multipliers.len() != times.len() {
            return Err(AmplitudeError::LengthMismatch {
                multipliers: multipliers.len(),
                times: times.len(),
            });
        }
        Ok(Self { multipliers, times })
    }

    /// A time axis of uniform steps: `times[i] = first_value + fixed_interval * i`,
    /// one step per multiplier.
    pub fn equally_spaced(
        multipliers: Vec<f64>,
        first_value: f64,
        fixed_interval: f64,
    ) -> Result<Self, AmplitudeError> {
        if !fixed_interval.is_finite() {
            return Err(AmplitudeError::NonFiniteStep(fixed_interval));
        }
        let times = (0..multipliers.len())
            .map(|i| first_value + fixed_interval * i as f64)
            .collect();
        Ok(Self { multipliers, times })
    }

    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The `(multiplier, time)` pairs in input order.
    ///
    /// A fresh iterator per call: pairing is recomputed, never consumed.
    pub fn multipliers_times(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.multipliers
            .iter()
            .copied()
            .zip(self.times.iter().copied())
    }
}
