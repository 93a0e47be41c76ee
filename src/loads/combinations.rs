use serde::{Deserialize, Serialize};

use crate::loads::{ScalarLoad, VectorLoad};

/// A factored combination of load cases, e.g. `1.35*DL + 1.5*LL`.
///
/// Cases keep their declaration order so deck writers emit combinations
/// deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    pub name: String,
    factors: Vec<(String, f64)>,
}

impl LoadCombination {
    pub fn new(name: impl Into<String>, factors: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            factors,
        }
    }

    /// Ultimate limit state: 1.35 dead, 1.35 superimposed dead, 1.5 live.
    pub fn uls() -> Self {
        Self::new(
            "ULS",
            vec![
                ("DL".to_string(), 1.35),
                ("SDL".to_string(), 1.35),
                ("LL".to_string(), 1.5),
            ],
        )
    }

    /// Serviceability limit state: unit factors.
    pub fn sls() -> Self {
        Self::new(
            "SLS",
            vec![
                ("DL".to_string(), 1.0),
                ("SDL".to_string(), 1.0),
                ("LL".to_string(), 1.0),
            ],
        )
    }

    /// Accidental fire combination: full dead, reduced live.
    pub fn fire() -> Self {
        Self::new(
            "Fire",
            vec![
                ("DL".to_string(), 1.0),
                ("SDL".to_string(), 1.0),
                ("LL".to_string(), 0.3),
            ],
        )
    }

    pub fn load_cases(&self) -> impl Iterator<Item = &str> {
        self.factors.iter().map(|(case, _)| case.as_str())
    }

    pub fn load_factors(&self) -> impl Iterator<Item = f64> + '_ {
        self.factors.iter().map(|(_, factor)| *factor)
    }

    pub fn factor(&self, case: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(c, _)| c == case)
            .map(|(_, f)| *f)
    }

    /// A new load scaled by this combination's factor for the given case.
    ///
    /// The input is cloned, never mutated; `None` when the case is not part
    /// of the combination.
    pub fn factored_vector_load(&self, case: &str, load: &VectorLoad) -> Option<VectorLoad> {
        self.factor(case).map(|f| {
            let mut scaled = load.clone();
            scaled.scale(f);
            scaled
        })
    }

    /// Scalar-load counterpart of [`factored_vector_load`].
    ///
    /// [`factored_vector_load`]: Self::factored_vector_load
    pub fn factored_scalar_load(&self, case: &str, load: &ScalarLoad) -> Option<ScalarLoad> {
        self.factor(case).map(|f| {
            let mut scaled = load.clone();
            scaled.scale(f);
            scaled
        })
    }
}
