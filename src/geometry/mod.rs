use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Tolerance for axis alignment and frame comparison.
pub const TOL: f64 = 1e-12;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Frame axis has near-zero length: {axis:?}")]
    DegenerateAxis { axis: na::Vector3<f64> },

    #[error("Frame axes are near-parallel: {xaxis:?} vs {yaxis:?}")]
    ParallelAxes {
        xaxis: na::Vector3<f64>,
        yaxis: na::Vector3<f64>,
    },
}

/// A local orthonormal coordinate frame.
///
/// Defined by an origin and two in-plane axes; the local z axis is their
/// cross product. Axes are normalized at construction and the y axis is
/// re-orthogonalized against x, so the stored triple is always orthonormal.
/// Immutable once handed to a boundary condition or load. Deserialization
/// goes through [`Frame::new`], so serialized data gets the same
/// normalization and degeneracy checks as any other input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameData")]
pub struct Frame {
    origin: na::Point3<f64>,
    xaxis: na::Vector3<f64>,
    yaxis: na::Vector3<f64>,
}

#[derive(Deserialize)]
struct FrameData {
    origin: na::Point3<f64>,
    xaxis: na::Vector3<f64>,
    yaxis: na::Vector3<f64>,
}

impl TryFrom<FrameData> for Frame {
    type Error = FrameError;

    fn try_from(data: FrameData) -> Result<Self, Self::Error> {
        Frame::new(data.origin, data.xaxis, data.yaxis)
    }
}

impl Frame {
    pub fn new(
        origin: na::Point3<f64>,
        xaxis: na::Vector3<f64>,
        yaxis: na::Vector3<f64>,
    ) -> Result<Self, FrameError> {
        if xaxis.norm() < TOL {
            return Err(FrameError::DegenerateAxis { axis: xaxis });
        }
        if yaxis.norm() < TOL {
            return Err(FrameError::DegenerateAxis { axis: yaxis });
        }
        let x = xaxis.normalize();
        // Gram-Schmidt: remove the x component so y is exactly orthogonal
        let y_raw = yaxis - x * yaxis.dot(&x);
        if y_raw.norm() < TOL {
            return Err(FrameError::ParallelAxes { xaxis, yaxis });
        }
        Ok(Self {
            origin,
            xaxis: x,
            yaxis: y_raw.normalize(),
        })
    }

    /// The world frame: origin at zero, axes aligned with global X and Y.
    pub fn world_xy() -> Self {
        Self {
            origin: na::Point3::origin(),
            xaxis: na::Vector3::x(),
            yaxis: na::Vector3::y(),
        }
    }

    pub fn origin(&self) -> na::Point3<f64> {
        self.origin
    }

    pub fn xaxis(&self) -> na::Vector3<f64> {
        self.xaxis
    }

    pub fn yaxis(&self) -> na::Vector3<f64> {
        self.yaxis
    }

    /// Local z axis, derived from the in-plane axes.
    pub fn zaxis(&self) -> na::Vector3<f64> {
        self.xaxis.cross(&self.yaxis)
    }

    /// The three local axes expressed in global coordinates.
    ///
    /// Dotting one of these with a global unit axis gives the direction
    /// cosine used to project local quantities into global components.
    pub fn direction_cosines(&self) -> (na::Vector3<f64>, na::Vector3<f64>, na::Vector3<f64>) {
        (self.xaxis, self.yaxis, self.zaxis())
    }

    /// True when the local axes coincide with the global axes.
    ///
    /// The origin is irrelevant here: restraint and load directions do not
    /// depend on where the frame sits.
    pub fn is_world_aligned(&self) -> bool {
        (self.xaxis - na::Vector3::x()).norm() < TOL && (self.yaxis - na::Vector3::y()).norm() < TOL
    }

    /// True when this frame is indistinguishable from having no frame at all.
    pub fn is_world_xy(&self) -> bool {
        self.is_world_aligned() && self.origin.coords.norm() < TOL
    }

    fn approx_eq(&self, other: &Frame) -> bool {
        (self.origin - other.origin).norm() < TOL
            && (self.xaxis - other.xaxis).norm() < TOL
            && (self.yaxis - other.yaxis).norm() < TOL
    }
}

/// Frame-compatibility test used before combining two quantities.
///
/// An absent frame and the world frame are the same thing; anything else is
/// compared structurally within [`TOL`].
pub fn frames_match(a: Option<&Frame>, b: Option<&Frame>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(f), None) | (None, Some(f)) => f.is_world_xy(),
        (Some(fa), Some(fb)) => fa.approx_eq(fb),
    }
}

/// Local axes for an optional frame; identity triple when absent.
pub fn local_axes(
    frame: Option<&Frame>,
) -> (na::Vector3<f64>, na::Vector3<f64>, na::Vector3<f64>) {
    match frame {
        Some(f) => f.direction_cosines(),
        None => (na::Vector3::x(), na::Vector3::y(), na::Vector3::z()),
    }
}

/// Project optional local linear components into a global vector.
///
/// Each active component contributes `v * (local_axis · global_axis)` to
/// every global axis; absent components contribute nothing. With no frame,
/// local and global coincide.
pub fn project_linear_components(
    frame: Option<&Frame>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
) -> na::Vector3<f64> {
    let (cx, cy, cz) = local_axes(frame);

    let mut global = na::Vector3::zeros();
    if let Some(v) = x {
        global += cx * v;
    }
    if let Some(v) = y {
        global += cy * v;
    }
    if let Some(v) = z {
        global += cz * v;
    }
    global
}
