//! Margin expansion and contraction.
//!
//! Offsets every contour point of a named structure by a signed margin,
//! independently per slice, in the X/Y plane with Z passed through. Each
//! point is moved along the line through the point and the slice centroid:
//! intersecting that line with the circle of radius |margin| centered on
//! the point gives two candidates, and the expand/contract sign picks the
//! one farther from or closer to the centroid.
//!
//! This is the 2D per-slice variant of the margin semantics; a 3D
//! point-to-centroid variant exists in the literature but is not
//! numerically equivalent and is deliberately not implemented here.

use rayon::prelude::*;
use tracing::debug;

use crate::error::GeometryError;
use crate::model::{Point3D, Slice, StructureSet};
use crate::Result;

impl StructureSet {
    /// Expand (positive margin) or contract (negative margin) the named
    /// structure by `margin` millimeters, returning a new snapshot.
    ///
    /// A single-point slice expands into a four-point diamond of radius
    /// `margin`; contracting a single point leaves it unchanged. A slice
    /// with no points is an error.
    pub fn add_margin(&self, roi_name: &str, margin: f64) -> Result<StructureSet> {
        if !margin.is_finite() {
            return Err(GeometryError::NonFiniteValue {
                what: "margin",
                value: margin,
            });
        }
        let index = self
            .index_of(roi_name)
            .ok_or_else(|| GeometryError::UnknownStructure {
                name: roi_name.to_string(),
            })?;

        debug!(structure = roi_name, margin, "applying margin");

        let mut snapshot = self.clone();
        snapshot.rois[index].slices = self.rois[index]
            .slices
            .par_iter()
            .map(|slice| offset_slice(slice, margin))
            .collect::<Result<Vec<_>>>()?;
        Ok(snapshot)
    }
}

fn offset_slice(slice: &Slice, margin: f64) -> Result<Slice> {
    match slice.len() {
        0 => Err(GeometryError::EmptyContour),
        1 => {
            let p = slice.points[0];
            if margin > 0.0 {
                // A zero-extent point grows into a losange contour.
                Ok(Slice::new(vec![
                    Point3D::new(p.x, p.y + margin, p.z),
                    Point3D::new(p.x + margin, p.y, p.z),
                    Point3D::new(p.x, p.y - margin, p.z),
                    Point3D::new(p.x - margin, p.y, p.z),
                ]))
            } else {
                // Cannot contract a point.
                Ok(slice.clone())
            }
        }
        _ => {
            let n = slice.len() as f64;
            let xmean = slice.points.iter().map(|p| p.x).sum::<f64>() / n;
            let ymean = slice.points.iter().map(|p| p.y).sum::<f64>() / n;
            let points = slice
                .points
                .iter()
                .map(|&p| offset_point(p, xmean, ymean, margin))
                .collect();
            Ok(Slice::new(points))
        }
    }
}

/// Offset one point along the line through the point and the slice
/// centroid, expanding away from or contracting toward the centroid.
fn offset_point(p: Point3D, xmean: f64, ymean: f64, margin: f64) -> Point3D {
    if p.x != xmean {
        let m = (ymean - p.y) / (xmean - p.x);
        let dx = (margin * margin / (1.0 + m * m)).sqrt();
        let x1 = p.x + dx;
        let x2 = p.x - dx;
        let y1 = m * (x1 - p.x) + p.y;
        let y2 = m * (x2 - p.x) + p.y;
        let dist1 = ((xmean - x1).powi(2) + (ymean - y1).powi(2)).sqrt();
        let dist2 = ((xmean - x2).powi(2) + (ymean - y2).powi(2)).sqrt();
        // Expansion keeps the candidate farther from the centroid,
        // contraction the closer one; ties go to the + root.
        let keep_first = if margin >= 0.0 {
            dist1 >= dist2
        } else {
            dist1 <= dist2
        };
        if keep_first {
            Point3D::new(x1, y1, p.z)
        } else {
            Point3D::new(x2, y2, p.z)
        }
    } else {
        // Vertical line through the centroid: slope undefined, offset
        // purely in Y. The signed margin moves outward for expansion and
        // inward for contraction on either side of the centroid.
        let y = if p.y >= ymean {
            p.y + margin
        } else {
            p.y - margin
        };
        Point3D::new(p.x, y, p.z)
    }
}
