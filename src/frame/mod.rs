//! Homogeneous coordinate frames.
//!
//! Builds the 4×4 matrices the transform engine composes as
//! `M = FromOrigin · Op · ToOrigin`: the operation itself is defined at the
//! coordinate origin, so points are brought to the origin, operated on, and
//! brought back.

use std::fmt;
use std::str::FromStr;

use ndarray::{arr2, Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::model::Point3D;

/// Rotation degree of freedom: roll about X, pitch about Y, yaw about Z,
/// right-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    Roll,
    Pitch,
    Yaw,
}

/// Translation direction along one of the patient axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationAxis::Roll => "roll",
            RotationAxis::Pitch => "pitch",
            RotationAxis::Yaw => "yaw",
        }
    }
}

impl TranslationAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationAxis::X => "x",
            TranslationAxis::Y => "y",
            TranslationAxis::Z => "z",
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TranslationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationAxis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roll" => Ok(RotationAxis::Roll),
            "pitch" => Ok(RotationAxis::Pitch),
            "yaw" => Ok(RotationAxis::Yaw),
            _ => Err(GeometryError::UnknownAxis { key: s.to_string() }),
        }
    }
}

impl FromStr for TranslationAxis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(TranslationAxis::X),
            "y" => Ok(TranslationAxis::Y),
            "z" => Ok(TranslationAxis::Z),
            _ => Err(GeometryError::UnknownAxis { key: s.to_string() }),
        }
    }
}

/// Translation taking `origin` to (0, 0, 0).
pub fn translation_to_origin(origin: Point3D) -> Array2<f64> {
    arr2(&[
        [1.0, 0.0, 0.0, -origin.x],
        [0.0, 1.0, 0.0, -origin.y],
        [0.0, 0.0, 1.0, -origin.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Inverse of [`translation_to_origin`]: (0, 0, 0) back to `origin`.
pub fn translation_from_origin(origin: Point3D) -> Array2<f64> {
    arr2(&[
        [1.0, 0.0, 0.0, origin.x],
        [0.0, 1.0, 0.0, origin.y],
        [0.0, 0.0, 1.0, origin.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the given axis, angle in radians.
pub fn rotation(axis: RotationAxis, angle_rad: f64) -> Array2<f64> {
    let (c, s) = (angle_rad.cos(), angle_rad.sin());
    match axis {
        RotationAxis::Roll => arr2(&[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        RotationAxis::Pitch => arr2(&[
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        RotationAxis::Yaw => arr2(&[
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
    }
}

/// Pure translation of `delta` along the given axis.
pub fn axis_translation(axis: TranslationAxis, delta: f64) -> Array2<f64> {
    let mut m = Array2::eye(4);
    match axis {
        TranslationAxis::X => m[[0, 3]] = delta,
        TranslationAxis::Y => m[[1, 3]] = delta,
        TranslationAxis::Z => m[[2, 3]] = delta,
    }
    m
}

/// Conjugate an origin-defined operation so it acts about `origin`.
pub fn about_origin(op: &Array2<f64>, origin: Point3D) -> Array2<f64> {
    translation_from_origin(origin)
        .dot(op)
        .dot(&translation_to_origin(origin))
}

/// Apply a homogeneous matrix to one point, keeping the first three
/// components.
pub fn apply_to_point(m: &Array2<f64>, p: Point3D) -> Point3D {
    let v = m.dot(&Array1::from(vec![p.x, p.y, p.z, 1.0]));
    Point3D::new(v[0], v[1], v[2])
}
