//! Value types for structure-set geometry.
//!
//! A [`StructureSet`] owns an ordered list of named regions of interest
//! (ROIs); each [`Roi`] is a stack of [`Slice`] contours; each slice is an
//! ordered run of [`Point3D`] in millimeters. All engine operations take a
//! set by reference and return a fresh snapshot, so callers can keep the
//! original and the derived set side by side for comparison.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::Result;

/// A 3D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl TryFrom<&[f64]> for Point3D {
    type Error = GeometryError;

    /// Fallible conversion for callers holding raw coordinate buffers,
    /// e.g. an explicit transform origin. Exactly three finite values.
    fn try_from(v: &[f64]) -> Result<Self> {
        if v.len() != 3 {
            return Err(GeometryError::MalformedOrigin { len: v.len() });
        }
        for &c in v {
            if !c.is_finite() {
                return Err(GeometryError::NonFiniteValue {
                    what: "origin coordinate",
                    value: c,
                });
            }
        }
        Ok(Self::new(v[0], v[1], v[2]))
    }
}

/// One planar contour: an ordered run of points, typically on one axial
/// CT/MR plane. A single-point slice is a valid degenerate contour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub points: Vec<Point3D>,
}

impl Slice {
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Decode the DICOM wire shape: a flat `[x, y, z, x, y, z, ...]` run.
    /// A length that is not a multiple of 3 is a hard error, never a
    /// silent truncation.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        if values.len() % 3 != 0 {
            return Err(GeometryError::RaggedContour { len: values.len() });
        }
        let points = values
            .chunks_exact(3)
            .map(|c| Point3D::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { points })
    }

    /// Re-encode to the flat wire shape for the export collaborator.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.points.len() * 3);
        for p in &self.points {
            flat.extend_from_slice(&[p.x, p.y, p.z]);
        }
        flat
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of all points, or `None` for an empty slice.
    pub fn centroid(&self) -> Option<Point3D> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy, sz) = self
            .points
            .iter()
            .fold((0.0, 0.0, 0.0), |(x, y, z), p| (x + p.x, y + p.y, z + p.z));
        Some(Point3D::new(sx / n, sy / n, sz / n))
    }
}

/// A named region of interest: an anatomical or reference structure with
/// its stack of contour slices, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub name: String,
    pub slices: Vec<Slice>,
}

impl Roi {
    pub fn new(name: impl Into<String>, slices: Vec<Slice>) -> Self {
        Self {
            name: name.into(),
            slices,
        }
    }

    /// Build a ROI from flat per-slice coordinate runs.
    pub fn from_flat(name: impl Into<String>, contours: &[Vec<f64>]) -> Result<Self> {
        let slices = contours
            .iter()
            .map(|c| Slice::from_flat(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, slices))
    }

    /// Total number of points across all slices.
    pub fn point_count(&self) -> usize {
        self.slices.iter().map(Slice::len).sum()
    }
}

/// An ordered collection of ROIs as read from one structure-set file.
///
/// Lookup by name is last-wins on duplicate names, matching the behavior
/// of planning systems that overwrite the name index while parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureSet {
    pub rois: Vec<Roi>,
}

impl StructureSet {
    pub fn new(rois: Vec<Roi>) -> Self {
        Self { rois }
    }

    /// Index of the named ROI, last occurrence winning on duplicates.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rois.iter().rposition(|r| r.name == name)
    }

    /// The named ROI, or [`GeometryError::UnknownStructure`].
    pub fn roi(&self, name: &str) -> Result<&Roi> {
        self.index_of(name)
            .map(|i| &self.rois[i])
            .ok_or_else(|| GeometryError::UnknownStructure {
                name: name.to_string(),
            })
    }

    /// Default transform origin: by structure-set convention the last ROI
    /// is a zero-extent reference point ("Coord 1") whose first slice
    /// holds the isocenter.
    pub fn isocenter(&self) -> Result<Point3D> {
        self.rois
            .last()
            .and_then(|r| r.slices.first())
            .and_then(|s| s.points.first())
            .copied()
            .ok_or(GeometryError::MissingIsocenter)
    }
}
