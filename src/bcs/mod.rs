use serde::{Deserialize, Serialize};

use crate::geometry::{Frame, TOL, frames_match, local_axes};

#[derive(Debug, thiserror::Error)]
pub enum BcError {
    #[error("Cannot combine boundary conditions with different frames: {left:?} vs {right:?}")]
    FrameMismatch {
        left: Option<Frame>,
        right: Option<Frame>,
    },
}

/// Coefficients of a linear relation among the global translational DOFs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofCoefficients {
    #[serde(rename = "UX")]
    pub ux: f64,
    #[serde(rename = "UY")]
    pub uy: f64,
    #[serde(rename = "UZ")]
    pub uz: f64,
}

/// One homogeneous constraint equation: `ux*UX + uy*UY + uz*UZ = rhs`.
///
/// A restraint is a zero-displacement condition, so `rhs` is always `0.0`;
/// the coefficients are the direction cosines of the restrained local axis
/// and carry no units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEquation {
    pub coefficients: DofCoefficients,
    pub rhs: f64,
}

/// Displacement restraints on the six DOFs of a node, expressed in a local
/// frame.
///
/// Translational restraints (`x`, `y`, `z`) follow the frame when projected
/// into global axes. Rotational restraints (`xx`, `yy`, `zz`) map directly
/// to the global rotational DOFs and are never projected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralDisplacement {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub xx: bool,
    pub yy: bool,
    pub zz: bool,
    pub frame: Option<Frame>,
}

impl GeneralDisplacement {
    pub fn new(x: bool, y: bool, z: bool, xx: bool, yy: bool, zz: bool) -> Self {
        Self {
            x,
            y,
            z,
            xx,
            yy,
            zz,
            frame: None,
        }
    }

    /// All six DOFs restrained.
    pub fn fixed() -> Self {
        Self::new(true, true, true, true, true, true)
    }

    /// Translations restrained, rotations free.
    pub fn pinned() -> Self {
        Self::new(true, true, true, false, false, false)
    }

    /// Pinned, released along local x.
    pub fn roller_x() -> Self {
        Self::new(false, true, true, false, false, false)
    }

    /// Pinned, released along local y.
    pub fn roller_y() -> Self {
        Self::new(true, false, true, false, false, false)
    }

    /// Pinned, released along local z.
    pub fn roller_z() -> Self {
        Self::new(true, true, false, false, false, false)
    }

    /// Pinned, released along local x and y.
    pub fn roller_xy() -> Self {
        Self::new(false, false, true, false, false, false)
    }

    /// Pinned, released along local y and z.
    pub fn roller_yz() -> Self {
        Self::new(true, false, false, false, false, false)
    }

    /// Pinned, released along local x and z.
    pub fn roller_xz() -> Self {
        Self::new(false, true, false, false, false, false)
    }

    /// Pinned, clamped about local x.
    pub fn clamp_xx() -> Self {
        Self::new(true, true, true, true, false, false)
    }

    /// Pinned, clamped about local y.
    pub fn clamp_yy() -> Self {
        Self::new(true, true, true, false, true, false)
    }

    /// Pinned, clamped about local z.
    pub fn clamp_zz() -> Self {
        Self::new(true, true, true, false, false, true)
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Local restraint flags in declaration order.
    pub fn components(&self) -> [(&'static str, bool); 6] {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("xx", self.xx),
            ("yy", self.yy),
            ("zz", self.zz),
        ]
    }

    fn globally_restrained(&self, global_index: usize) -> bool {
        let (cx, cy, cz) = local_axes(self.frame.as_ref());
        [(self.x, cx), (self.y, cy), (self.z, cz)]
            .into_iter()
            .any(|(flag, axis)| flag && (axis[global_index].abs() - 1.0).abs() < TOL)
    }

    /// True when a restrained local axis aligns exactly with global X.
    ///
    /// A rotated restraint does not count: it restrains a combination of
    /// global DOFs and shows up in [`global_constraint_equations`] instead.
    ///
    /// [`global_constraint_equations`]: Self::global_constraint_equations
    pub fn global_x(&self) -> bool {
        self.globally_restrained(0)
    }

    /// True when a restrained local axis aligns exactly with global Y.
    pub fn global_y(&self) -> bool {
        self.globally_restrained(1)
    }

    /// True when a restrained local axis aligns exactly with global Z.
    pub fn global_z(&self) -> bool {
        self.globally_restrained(2)
    }

    /// Rotational restraints map straight to global rotational DOFs.
    pub fn global_xx(&self) -> bool {
        self.xx
    }

    pub fn global_yy(&self) -> bool {
        self.yy
    }

    pub fn global_zz(&self) -> bool {
        self.zz
    }

    /// Constraint equations in global translational DOFs implied by the
    /// local restraints.
    ///
    /// One equation per restrained local linear axis, in `x, y, z` order.
    /// This subsumes the axis-aligned case (one coefficient 1, the rest 0),
    /// so a deck writer can always consume equations uniformly and use the
    /// `global_*` flags only as a shortcut.
    pub fn global_constraint_equations(&self) -> Vec<ConstraintEquation> {
        if !(self.x || self.y || self.z) {
            return Vec::new();
        }
        let (cx, cy, cz) = local_axes(self.frame.as_ref());
        [(self.x, cx), (self.y, cy), (self.z, cz)]
            .into_iter()
            .filter(|(flag, _)| *flag)
            .map(|(_, axis)| ConstraintEquation {
                coefficients: DofCoefficients {
                    ux: axis.x,
                    uy: axis.y,
                    uz: axis.z,
                },
                rhs: 0.0,
            })
            .collect()
    }

    /// OR the other restraint's flags into this one, in place.
    ///
    /// Both operands must share a frame; the check happens here, not at
    /// projection time.
    pub fn combine(&mut self, other: &GeneralDisplacement) -> Result<&mut Self, BcError> {
        if !frames_match(self.frame.as_ref(), other.frame.as_ref()) {
            return Err(BcError::FrameMismatch {
                left: self.frame.clone(),
                right: other.frame.clone(),
            });
        }
        self.x |= other.x;
        self.y |= other.y;
        self.z |= other.z;
        self.xx |= other.xx;
        self.yy |= other.yy;
        self.zz |= other.zz;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra as na;

    fn rotated_about_z() -> Frame {
        // Local x -> global +Y, local y -> global -X
        Frame::new(
            na::Point3::origin(),
            na::Vector3::new(0.0, 1.0, 0.0),
            na::Vector3::new(-1.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_global_mapping_rotated_frame() {
        let bc = GeneralDisplacement::new(true, false, false, false, false, false)
            .with_frame(rotated_about_z());
        assert!(!bc.global_x());
        assert!(bc.global_y());
        assert!(!bc.global_z());
    }

    #[test]
    fn test_global_mapping_without_frame_is_identity() {
        let bc = GeneralDisplacement::new(true, false, true, false, false, false);
        assert!(bc.global_x());
        assert!(!bc.global_y());
        assert!(bc.global_z());
    }

    #[test]
    fn test_rotational_flags_pass_through() {
        let bc = GeneralDisplacement::new(false, false, false, true, false, true)
            .with_frame(rotated_about_z());
        assert!(bc.global_xx());
        assert!(!bc.global_yy());
        assert!(bc.global_zz());
    }

    #[test]
    fn test_constraint_equations_rotated_frame() {
        let bc = GeneralDisplacement::new(true, false, false, false, false, false)
            .with_frame(rotated_about_z());
        let eqs = bc.global_constraint_equations();
        assert_eq!(eqs.len(), 1);
        let eq = eqs[0];
        assert_eq!(eq.rhs, 0.0);
        assert_eq!(
            eq.coefficients,
            DofCoefficients {
                ux: 0.0,
                uy: 1.0,
                uz: 0.0
            }
        );
    }

    #[test]
    fn test_constraint_equations_follow_declaration_order() {
        let bc = GeneralDisplacement::pinned().with_frame(rotated_about_z());
        let eqs = bc.global_constraint_equations();
        assert_eq!(eqs.len(), 3);
        // Local x -> +Y, local y -> -X, local z -> +Z
        assert_eq!(eqs[0].coefficients.uy, 1.0);
        assert_eq!(eqs[1].coefficients.ux, -1.0);
        assert_eq!(eqs[2].coefficients.uz, 1.0);
    }

    #[test]
    fn test_unrestrained_bc_emits_no_equations() {
        let bc = GeneralDisplacement::default().with_frame(rotated_about_z());
        assert!(bc.global_constraint_equations().is_empty());
    }

    #[test]
    fn test_combine_ors_flags_in_place() {
        let frame = Frame::new(na::Point3::origin(), na::Vector3::x(), na::Vector3::y()).unwrap();
        let mut a = GeneralDisplacement::new(true, false, false, false, false, false)
            .with_frame(frame.clone());
        let b = GeneralDisplacement::new(false, true, false, false, false, false)
            .with_frame(frame);
        a.combine(&b).unwrap();
        assert!(a.x);
        assert!(a.y);
        assert!(!a.z);
    }

    #[test]
    fn test_combine_rejects_frame_mismatch() {
        let mut a = GeneralDisplacement::new(true, false, false, false, false, false).with_frame(
            Frame::new(na::Point3::origin(), na::Vector3::x(), na::Vector3::y()).unwrap(),
        );
        let b = GeneralDisplacement::new(false, false, true, false, false, false)
            .with_frame(rotated_about_z());
        assert!(matches!(
            a.combine(&b),
            Err(BcError::FrameMismatch { .. })
        ));
    }

    #[test]
    fn test_combine_treats_world_frame_as_no_frame() {
        let mut a = GeneralDisplacement::new(true, false, false, false, false, false);
        let b = GeneralDisplacement::new(false, true, false, false, false, false)
            .with_frame(Frame::world_xy());
        a.combine(&b).unwrap();
        assert!(a.x && a.y);
    }

    #[test]
    fn test_named_constructors() {
        assert!(GeneralDisplacement::fixed().components().iter().all(|(_, v)| *v));

        let pinned = GeneralDisplacement::pinned();
        assert!(pinned.x && pinned.y && pinned.z);
        assert!(!pinned.xx && !pinned.yy && !pinned.zz);

        let roller = GeneralDisplacement::roller_x();
        assert!(!roller.x && roller.y && roller.z);

        let clamp = GeneralDisplacement::clamp_zz();
        assert!(clamp.x && clamp.y && clamp.z && clamp.zz);
        assert!(!clamp.xx && !clamp.yy);
    }

    #[test]
    fn test_serde_round_trip() {
        let bc = GeneralDisplacement::clamp_xx().with_frame(rotated_about_z());
        let json = serde_json::to_string(&bc).unwrap();
        let back: GeneralDisplacement = serde_json::from_str(&json).unwrap();
        assert_eq!(bc, back);
    }

    #[test]
    fn test_equation_serializes_with_uppercase_dof_keys() {
        let bc = GeneralDisplacement::new(true, false, false, false, false, false);
        let eq = bc.global_constraint_equations()[0];
        let json = serde_json::to_value(eq).unwrap();
        assert_eq!(json["coefficients"]["UX"], 1.0);
        assert_eq!(json["coefficients"]["UY"], 0.0);
        assert_eq!(json["coefficients"]["UZ"], 0.0);
        assert_eq!(json["rhs"], 0.0);
    }
}
