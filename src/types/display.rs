use std::cell::Cell;
use std::fmt;

use crate::types::{Force, Moment, Time, newton, newton_meter, second};

/// Whether display wrappers print unit-tagged quantities or bare base-unit
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeMode {
    /// Print the value with its base unit symbol, e.g. `1250 N`.
    #[default]
    Tagged,
    /// Print the bare base-unit magnitude, e.g. `1250`.
    Bare,
}

thread_local! {
    static MAGNITUDE_MODE: Cell<MagnitudeMode> = const { Cell::new(MagnitudeMode::Tagged) };
}

/// The mode currently in effect on this thread.
pub fn magnitude_mode() -> MagnitudeMode {
    MAGNITUDE_MODE.with(Cell::get)
}

/// Set the mode for this thread until changed again.
pub fn set_magnitude_mode(mode: MagnitudeMode) {
    MAGNITUDE_MODE.with(|m| m.set(mode));
}

/// Guard that restores the previous magnitude mode when dropped.
///
/// The mode is thread-local, so a scoped override on one task never leaks
/// into another.
#[must_use = "the previous mode is restored when the guard is dropped"]
pub struct MagnitudeModeGuard {
    previous: MagnitudeMode,
}

/// Switch the magnitude mode for the enclosing scope.
///
/// ```
/// use fea_core::types::{DisplayForce, MagnitudeMode, from_base_force, scoped_magnitude_mode};
///
/// let force = from_base_force(1250.0);
/// let _guard = scoped_magnitude_mode(MagnitudeMode::Bare);
/// assert_eq!(format!("{}", DisplayForce(force)), "1250");
/// ```
pub fn scoped_magnitude_mode(mode: MagnitudeMode) -> MagnitudeModeGuard {
    let previous = magnitude_mode();
    set_magnitude_mode(mode);
    MagnitudeModeGuard { previous }
}

impl Drop for MagnitudeModeGuard {
    fn drop(&mut self) {
        set_magnitude_mode(self.previous);
    }
}

#[derive(Debug)]
pub struct DisplayForce(pub Force);
#[derive(Debug)]
pub struct DisplayMoment(pub Moment);
#[derive(Debug)]
pub struct DisplayTime(pub Time);

fn write_magnitude(f: &mut fmt::Formatter<'_>, value: f64, symbol: &str) -> fmt::Result {
    match magnitude_mode() {
        MagnitudeMode::Tagged => write!(f, "{} {}", value, symbol),
        MagnitudeMode::Bare => write!(f, "{}", value),
    }
}

impl fmt::Display for DisplayForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_magnitude(f, self.0.get::<newton>(), "N")
    }
}

impl fmt::Display for DisplayMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_magnitude(f, self.0.get::<newton_meter>(), "N·m")
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_magnitude(f, self.0.get::<second>(), "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::from_base_force;

    #[test]
    fn test_default_mode_is_tagged() {
        assert_eq!(format!("{}", DisplayForce(from_base_force(10.0))), "10 N");
    }

    #[test]
    fn test_scoped_mode_restores_on_drop() {
        let force = from_base_force(10.0);
        {
            let _guard = scoped_magnitude_mode(MagnitudeMode::Bare);
            assert_eq!(format!("{}", DisplayForce(force)), "10");
        }
        assert_eq!(format!("{}", DisplayForce(force)), "10 N");
    }

    #[test]
    fn test_nested_scopes_unwind_in_order() {
        let force = from_base_force(2.5);
        let _outer = scoped_magnitude_mode(MagnitudeMode::Bare);
        {
            let _inner = scoped_magnitude_mode(MagnitudeMode::Tagged);
            assert_eq!(format!("{}", DisplayForce(force)), "2.5 N");
        }
        assert_eq!(format!("{}", DisplayForce(force)), "2.5");
    }
}
