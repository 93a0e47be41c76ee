pub mod amplitudes;
pub mod combinations;

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::geometry::{Frame, frames_match, project_linear_components};
use crate::types::{Force, Moment, to_base_force, to_base_moment};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot combine loads with different frames: {left:?} vs {right:?}")]
    FrameMismatch {
        left: Option<Frame>,
        right: Option<Frame>,
    },

    #[error("Load magnitude is not a finite number: {0}")]
    NonFiniteMagnitude(f64),
}

/// Concentrated forces and moments on a node, expressed in a local frame.
///
/// Components are canonical base magnitudes (newtons, newton-meters). An
/// unset component is absent, not zero: it contributes nothing to the
/// projection sums and stays unset through scaling. Linear components
/// (`x`, `y`, `z`) project through the frame's direction cosines; moment
/// components (`xx`, `yy`, `zz`) are defined directly in global axes, like
/// the rotational restraint flags on a displacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorLoad {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub xx: Option<f64>,
    pub yy: Option<f64>,
    pub zz: Option<f64>,
    pub frame: Option<Frame>,
    /// Name of the amplitude curve scaling this load over time.
    pub amplitude: Option<String>,
}

impl VectorLoad {
    /// Force-only load from base-unit magnitudes.
    pub fn from_forces(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self {
            x,
            y,
            z,
            ..Default::default()
        }
    }

    /// Build from unit-carrying quantities, converting to base magnitudes.
    pub fn from_quantities(
        x: Option<Force>,
        y: Option<Force>,
        z: Option<Force>,
        xx: Option<Moment>,
        yy: Option<Moment>,
        zz: Option<Moment>,
    ) -> Self {
        Self {
            x: x.map(to_base_force),
            y: y.map(to_base_force),
            z: z.map(to_base_force),
            xx: xx.map(to_base_moment),
            yy: yy.map(to_base_moment),
            zz: zz.map(to_base_moment),
            ..Default::default()
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_amplitude(mut self, amplitude: impl Into<String>) -> Self {
        self.amplitude = Some(amplitude.into());
        self
    }

    /// Local components in declaration order.
    pub fn components(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("xx", self.xx),
            ("yy", self.yy),
            ("zz", self.zz),
        ]
    }

    fn global_forces(&self) -> na::Vector3<f64> {
        project_linear_components(self.frame.as_ref(), self.x, self.y, self.z)
    }

    /// Global X force component, recomputed on demand.
    pub fn global_x(&self) -> f64 {
        self.global_forces().x
    }

    /// Global Y force component, recomputed on demand.
    pub fn global_y(&self) -> f64 {
        self.global_forces().y
    }

    /// Global Z force component, recomputed on demand.
    pub fn global_z(&self) -> f64 {
        self.global_forces().z
    }

    /// Moment components pass through unprojected; unset reads as zero.
    pub fn global_xx(&self) -> f64 {
        self.xx.unwrap_or(0.0)
    }

    pub fn global_yy(&self) -> f64 {
        self.yy.unwrap_or(0.0)
    }

    pub fn global_zz(&self) -> f64 {
        self.zz.unwrap_or(0.0)
    }

    /// Add the other load's components into this one, in place.
    ///
    /// Frames must match; a component set on either side is set on the
    /// result, components unset on both sides stay unset.
    pub fn accumulate(&mut self, other: &VectorLoad) -> Result<&mut Self, LoadError> {
        if !frames_match(self.frame.as_ref(), other.frame.as_ref()) {
            return Err(LoadError::FrameMismatch {
                left: self.frame.clone(),
                right: other.frame.clone(),
            });
        }
        fn merge(a: &mut Option<f64>, b: Option<f64>) {
            if let Some(vb) = b {
                *a = Some(a.unwrap_or(0.0) + vb);
            }
        }
        merge(&mut self.x, other.x);
        merge(&mut self.y, other.y);
        merge(&mut self.z, other.z);
        merge(&mut self.xx, other.xx);
        merge(&mut self.yy, other.yy);
        merge(&mut self.zz, other.zz);
        Ok(self)
    }

    /// Multiply every set component by a factor, in place. Unset components
    /// stay unset.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for component in [
            &mut self.x,
            &mut self.y,
            &mut self.z,
            &mut self.xx,
            &mut self.yy,
            &mut self.zz,
        ] {
            if let Some(v) = component {
                *v *= factor;
            }
        }
        self
    }
}

/// A single-magnitude load (heat flux, pressure on a face, prestress),
/// optionally driven by an amplitude curve. No frame: there is no direction
/// to project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarLoad {
    pub magnitude: f64,
    /// Name of the amplitude curve scaling this load over time. Serialized
    /// as an explicit null when absent.
    pub amplitude: Option<String>,
}

impl ScalarLoad {
    pub fn new(magnitude: f64) -> Result<Self, LoadError> {
        if !magnitude.is_finite() {
            return Err(LoadError::NonFiniteMagnitude(magnitude));
        }
        Ok(Self {
            magnitude,
            amplitude: None,
        })
    }

    pub fn with_amplitude(mut self, amplitude: impl Into<String>) -> Self {
        self.amplitude = Some(amplitude.into());
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.magnitude *= factor;
        self
    }
}

/// Gravity acting on a body, as an acceleration magnitude and a direction
/// factor per global axis. Gravity is global by definition; by default it
/// acts along negative global Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityLoad {
    pub g: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GravityLoad {
    pub fn new(g: f64) -> Self {
        Self {
            g,
            x: 0.0,
            y: 0.0,
            z: -1.0,
        }
    }

    pub fn with_direction(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// The acceleration vector in global axes.
    pub fn acceleration_vector(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z) * self.g
    }
}
