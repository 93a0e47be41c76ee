mod display;

pub use uom::si::f64::{Force, ThermodynamicTemperature, Time, Torque};

pub use uom::si::{
    force::{kilonewton, kip, newton, pound_force},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
    time::{hour, millisecond, minute, second},
    torque::{kilonewton_meter, newton_meter, pound_force_foot, pound_force_inch},
};
pub use uom::si::{force, thermodynamic_temperature, time, torque};

use serde::{Deserialize, Serialize};

// Type aliases for domain clarity (zero cost)
pub type Moment = Torque;
pub type Temperature = ThermodynamicTemperature;

pub use display::{
    DisplayForce, DisplayMoment, DisplayTime, MagnitudeMode, MagnitudeModeGuard, magnitude_mode,
    scoped_magnitude_mode, set_magnitude_mode,
};

// Canonical internal units are SI base (just documentation)
/// Internal standard: newtons
pub const INTERNAL_FORCE_UNIT: &str = "newtons";
/// Internal standard: newton-meters
pub const INTERNAL_MOMENT_UNIT: &str = "newton-meters";
/// Internal standard: seconds
pub const INTERNAL_TIME_UNIT: &str = "seconds";

use std::marker::PhantomData;

/// A raw magnitude tagged with the unit string it was authored in.
///
/// Model inputs arrive in whatever unit the author wrote them in; they are
/// converted to canonical SI base values before any load or boundary
/// condition stores them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type ForceValue = WithUnit<Force>;
pub type MomentValue = WithUnit<Moment>;
pub type TimeValue = WithUnit<Time>;
pub type TemperatureValue = WithUnit<Temperature>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown force unit: {0}")]
    UnknownForceUnit(String),

    #[error("Unknown moment unit: {0}")]
    UnknownMomentUnit(String),

    #[error("Unknown time unit: {0}")]
    UnknownTimeUnit(String),

    #[error("Unknown temperature unit: {0}")]
    UnknownTemperatureUnit(String),
}

impl WithUnit<Force> {
    pub fn to_force(&self) -> Result<Force, UnitError> {
        match self.unit.as_str() {
            "N" | "n" | "newton" | "Newton" | "NEWTON" | "newtons" | "Newtons" | "NEWTONS" => {
                Ok(Force::new::<newton>(self.value))
            }
            "kN" | "KN" | "kn" | "kilonewton" | "Kilonewton" | "KILONEWTON" | "kilonewtons"
            | "Kilonewtons" | "KILONEWTONS" => Ok(Force::new::<kilonewton>(self.value)),
            "lbf" | "Lbf" | "LBF" | "pound-force" | "Pound-Force" | "POUND-FORCE"
            | "pound force" | "pounds-force" => Ok(Force::new::<pound_force>(self.value)),
            "kip" | "Kip" | "KIP" | "kips" | "Kips" | "KIPS" => Ok(Force::new::<kip>(self.value)),
            _ => Err(UnitError::UnknownForceUnit(self.unit.clone())),
        }
    }

    pub fn from_force(f: Force, unit: &str) -> Result<Self, UnitError> {
        let value = match unit {
            "N" | "n" | "newton" | "Newton" | "NEWTON" | "newtons" | "Newtons" | "NEWTONS" => {
                f.get::<newton>()
            }
            "kN" | "KN" | "kn" | "kilonewton" | "Kilonewton" | "KILONEWTON" | "kilonewtons"
            | "Kilonewtons" | "KILONEWTONS" => f.get::<kilonewton>(),
            "lbf" | "Lbf" | "LBF" | "pound-force" | "Pound-Force" | "POUND-FORCE"
            | "pound force" | "pounds-force" => f.get::<pound_force>(),
            "kip" | "Kip" | "KIP" | "kips" | "Kips" | "KIPS" => f.get::<kip>(),
            _ => return Err(UnitError::UnknownForceUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Moment> {
    pub fn to_moment(&self) -> Result<Moment, UnitError> {
        match self.unit.as_str() {
            "Nm" | "N*m" | "N·m" | "newton-meter" | "Newton-Meter" | "newton meters"
            | "newton-meters" => Ok(Moment::new::<newton_meter>(self.value)),
            "kNm" | "kN*m" | "kN·m" | "kilonewton-meter" | "kilonewton-meters" => {
                Ok(Moment::new::<kilonewton_meter>(self.value))
            }
            "lbf-ft" | "lbf*ft" | "ft-lbf" | "pound-force-foot" | "pound-force-feet" => {
                Ok(Moment::new::<pound_force_foot>(self.value))
            }
            "lbf-in" | "lbf*in" | "in-lbf" | "pound-force-inch" | "pound-force-inches" => {
                Ok(Moment::new::<pound_force_inch>(self.value))
            }
            _ => Err(UnitError::UnknownMomentUnit(self.unit.clone())),
        }
    }

    pub fn from_moment(m: Moment, unit: &str) -> Result<Self, UnitError> {
        let value = match unit {
            "Nm" | "N*m" | "N·m" | "newton-meter" | "Newton-Meter" | "newton meters"
            | "newton-meters" => m.get::<newton_meter>(),
            "kNm" | "kN*m" | "kN·m" | "kilonewton-meter" | "kilonewton-meters" => {
                m.get::<kilonewton_meter>()
            }
            "lbf-ft" | "lbf*ft" | "ft-lbf" | "pound-force-foot" | "pound-force-feet" => {
                m.get::<pound_force_foot>()
            }
            "lbf-in" | "lbf*in" | "in-lbf" | "pound-force-inch" | "pound-force-inches" => {
                m.get::<pound_force_inch>()
            }
            _ => return Err(UnitError::UnknownMomentUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Time> {
    pub fn to_time(&self) -> Result<Time, UnitError> {
        match self.unit.as_str() {
            "s" | "S" | "sec" | "Sec" | "SEC" | "second" | "Second" | "SECOND" | "seconds"
            | "Seconds" | "SECONDS" => Ok(Time::new::<second>(self.value)),
            "ms" | "Ms" | "MS" | "millisecond" | "Millisecond" | "milliseconds"
            | "Milliseconds" => Ok(Time::new::<millisecond>(self.value)),
            "min" | "Min" | "MIN" | "minute" | "Minute" | "MINUTE" | "minutes" | "Minutes"
            | "MINUTES" => Ok(Time::new::<minute>(self.value)),
            "h" | "H" | "hr" | "Hr" | "HR" | "hour" | "Hour" | "HOUR" | "hours" | "Hours"
            | "HOURS" => Ok(Time::new::<hour>(self.value)),
            _ => Err(UnitError::UnknownTimeUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Temperature> {
    pub fn to_temperature(&self) -> Result<Temperature, UnitError> {
        match self.unit.as_str() {
            "K" | "k" | "kelvin" | "Kelvin" | "KELVIN" => {
                Ok(Temperature::new::<kelvin>(self.value))
            }
            "C" | "c" | "°C" | "celsius" | "Celsius" | "CELSIUS" => {
                Ok(Temperature::new::<degree_celsius>(self.value))
            }
            "F" | "f" | "°F" | "fahrenheit" | "Fahrenheit" | "FAHRENHEIT" => {
                Ok(Temperature::new::<degree_fahrenheit>(self.value))
            }
            _ => Err(UnitError::UnknownTemperatureUnit(self.unit.clone())),
        }
    }
}

/// Convert a UOM Force to the internal base magnitude (newtons)
#[inline]
pub fn to_base_force(f: Force) -> f64 {
    f.get::<newton>()
}

/// Convert an internal base magnitude (newtons) to a UOM Force
#[inline]
pub fn from_base_force(value: f64) -> Force {
    Force::new::<newton>(value)
}

/// Convert a UOM Moment to the internal base magnitude (newton-meters)
#[inline]
pub fn to_base_moment(m: Moment) -> f64 {
    m.get::<newton_meter>()
}

/// Convert an internal base magnitude (newton-meters) to a UOM Moment
#[inline]
pub fn from_base_moment(value: f64) -> Moment {
    Moment::new::<newton_meter>(value)
}

/// Convert a UOM Time to the internal base magnitude (seconds)
#[inline]
pub fn to_base_time(t: Time) -> f64 {
    t.get::<second>()
}

/// Convert an internal base magnitude (seconds) to a UOM Time
#[inline]
pub fn from_base_time(value: f64) -> Time {
    Time::new::<second>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_force_tag_converts_to_base_newtons() {
        let tagged = ForceValue::new(2.0, "kN");
        let force = tagged.to_force().unwrap();
        assert_relative_eq!(to_base_force(force), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_force_unit_is_an_error() {
        let tagged = ForceValue::new(1.0, "furlongs");
        assert!(matches!(
            tagged.to_force(),
            Err(UnitError::UnknownForceUnit(_))
        ));
    }

    #[test]
    fn test_moment_tag_round_trips_through_base() {
        let tagged = MomentValue::new(3.5, "kNm");
        let m = tagged.to_moment().unwrap();
        assert_relative_eq!(to_base_moment(m), 3500.0, epsilon = 1e-9);

        let back = MomentValue::from_moment(m, "kNm").unwrap();
        assert_relative_eq!(back.value, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_time_tag_converts_minutes() {
        let tagged = TimeValue::new(2.0, "min");
        assert_relative_eq!(
            to_base_time(tagged.to_time().unwrap()),
            120.0,
            epsilon = 1e-9
        );
    }
}
