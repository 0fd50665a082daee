//! Rigid transforms of a single named structure.
//!
//! One entry point, [`StructureSet::apply`], dispatches on [`Operation`]:
//! a rotation (degrees, about roll/pitch/yaw) or a translation (mm, along
//! x/y/z), both performed about a pivot point. When no pivot is supplied
//! the structure set's isocenter convention resolves one. The input set is
//! never touched; a transformed snapshot is returned.

use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::config::TransformConfig;
use crate::error::GeometryError;
use crate::frame;
use crate::model::{Point3D, Slice, StructureSet};
use crate::Result;

pub use crate::frame::{RotationAxis, TranslationAxis};

/// A rigid operation on one structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Rotation in degrees about the given axis.
    Rotate(RotationAxis, f64),
    /// Translation in millimeters along the given axis.
    Translate(TranslationAxis, f64),
}

impl Operation {
    pub fn magnitude(&self) -> f64 {
        match *self {
            Operation::Rotate(_, deg) => deg,
            Operation::Translate(_, mm) => mm,
        }
    }

    fn validate(&self, config: &TransformConfig) -> Result<()> {
        match *self {
            Operation::Rotate(_, deg) => {
                if !deg.is_finite() {
                    return Err(GeometryError::NonFiniteValue {
                        what: "rotation angle",
                        value: deg,
                    });
                }
                if deg.abs() >= config.max_rotation_deg {
                    return Err(GeometryError::MagnitudeOutOfRange {
                        what: "rotation angle (deg)",
                        value: deg,
                        limit: config.max_rotation_deg,
                    });
                }
            }
            Operation::Translate(_, mm) => {
                if !mm.is_finite() {
                    return Err(GeometryError::NonFiniteValue {
                        what: "translation delta",
                        value: mm,
                    });
                }
                if mm.abs() >= config.max_translation_mm {
                    return Err(GeometryError::MagnitudeOutOfRange {
                        what: "translation delta (mm)",
                        value: mm,
                        limit: config.max_translation_mm,
                    });
                }
            }
        }
        Ok(())
    }

    /// The origin-defined matrix for this operation.
    fn matrix(&self) -> Array2<f64> {
        match *self {
            Operation::Rotate(axis, deg) => frame::rotation(axis, deg.to_radians()),
            Operation::Translate(axis, mm) => frame::axis_translation(axis, mm),
        }
    }
}

/// Apply `op` to the named structure with explicit limits.
pub fn apply_with(
    set: &StructureSet,
    roi_name: &str,
    op: Operation,
    origin: Option<Point3D>,
    config: &TransformConfig,
) -> Result<StructureSet> {
    op.validate(config)?;
    let index = set
        .index_of(roi_name)
        .ok_or_else(|| GeometryError::UnknownStructure {
            name: roi_name.to_string(),
        })?;
    let origin = match origin {
        Some(p) if !p.is_finite() => {
            return Err(GeometryError::NonFiniteValue {
                what: "origin coordinate",
                value: [p.x, p.y, p.z]
                    .into_iter()
                    .find(|c| !c.is_finite())
                    .unwrap_or(f64::NAN),
            })
        }
        Some(p) => p,
        None => set.isocenter()?,
    };

    debug!(
        structure = roi_name,
        op = ?op,
        origin = ?origin,
        "applying rigid transform"
    );

    let m = frame::about_origin(&op.matrix(), origin);
    let mut snapshot = set.clone();
    snapshot.rois[index].slices = set.rois[index]
        .slices
        .par_iter()
        .map(|slice| transform_slice(slice, &m))
        .collect();
    Ok(snapshot)
}

fn transform_slice(slice: &Slice, m: &Array2<f64>) -> Slice {
    Slice::new(
        slice
            .points
            .iter()
            .map(|&p| frame::apply_to_point(m, p))
            .collect(),
    )
}

impl StructureSet {
    /// Apply a rotation or translation to the named structure.
    ///
    /// `origin` is the pivot point; `None` resolves the set's isocenter.
    /// Rotations are bounded to |angle| < 360 degrees and translations to
    /// |delta| < 1000 mm (clinical bounds).
    pub fn apply(
        &self,
        roi_name: &str,
        op: Operation,
        origin: Option<Point3D>,
    ) -> Result<StructureSet> {
        apply_with(self, roi_name, op, origin, &TransformConfig::default())
    }

    /// Rotate the named structure by `degrees` about `axis`.
    pub fn rotate(
        &self,
        roi_name: &str,
        degrees: f64,
        axis: RotationAxis,
        origin: Option<Point3D>,
    ) -> Result<StructureSet> {
        self.apply(roi_name, Operation::Rotate(axis, degrees), origin)
    }

    /// Translate the named structure by `mm` along `axis`.
    pub fn translate(
        &self,
        roi_name: &str,
        mm: f64,
        axis: TranslationAxis,
        origin: Option<Point3D>,
    ) -> Result<StructureSet> {
        self.apply(roi_name, Operation::Translate(axis, mm), origin)
    }
}
