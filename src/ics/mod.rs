use serde::{Deserialize, Serialize};

use crate::types::{Temperature, kelvin};

/// Initial nodal temperature for a transient or thermal step.
///
/// Stored as the base magnitude (kelvins); the value is settable after
/// construction because thermal histories often rewrite the starting
/// temperature per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialTemperature {
    temperature: f64,
}

impl InitialTemperature {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    pub fn from_quantity(temperature: Temperature) -> Self {
        Self {
            temperature: temperature.get::<kelvin>(),
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = value;
    }
}

/// Initial stress state as the three normal components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialStress {
    stress: [f64; 3],
}

impl InitialStress {
    pub fn new(stress: [f64; 3]) -> Self {
        Self { stress }
    }

    pub fn stress(&self) -> [f64; 3] {
        self.stress
    }

    pub fn set_stress(&mut self, value: [f64; 3]) {
        self.stress = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_temperature_is_settable() {
        let mut t0 = InitialTemperature::new(293.15);
        t0.set_temperature(300.0);
        assert_relative_eq!(t0.temperature(), 300.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_quantity_converts_to_kelvins() {
        use crate::types::degree_celsius;
        let t0 = InitialTemperature::from_quantity(Temperature::new::<degree_celsius>(20.0));
        assert_relative_eq!(t0.temperature(), 293.15, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_temperature_round_trips() {
        let t0 = InitialTemperature::new(293.15);
        let json = serde_json::to_string(&t0).unwrap();
        let back: InitialTemperature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t0);
    }

    #[test]
    fn test_initial_stress_round_trips() {
        let s = InitialStress::new([1.0, -2.0, 0.5]);
        let json = serde_json::to_string(&s).unwrap();
        let back: InitialStress = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stress(), [1.0, -2.0, 0.5]);
    }
}
