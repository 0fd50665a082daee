//! Comparative statistics between two snapshots of one structure.
//!
//! Typical use: keep the structure set as loaded, derive a rotated,
//! translated or margined snapshot from it, then report how far the
//! structure moved. Points correspond by (slice, position) index, so both
//! snapshots must agree in slice and point counts.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::GeometryError;
use crate::model::{Point3D, Roi, StructureSet};
use crate::Result;

/// One `Parameter` / `Value [mm]` row of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub parameter: String,
    pub value: f64,
}

/// The fixed-order statistics table produced by [`report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Value of the named parameter, if present.
    pub fn value(&self, parameter: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.parameter == parameter)
            .map(|r| r.value)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<30} {:>12}", "Parameter", "Value [mm]")?;
        for row in &self.rows {
            writeln!(f, "{:<30} {:>12}", row.parameter, row.value)?;
        }
        Ok(())
    }
}

/// Compare two snapshots of the named structure with default rounding.
///
/// Reports max/min/mean/population-STD/population-variance of the radius
/// series (each point of `a` against `a`'s center of mass) and of the
/// distance series (each point of `a` against the same-index point of
/// `b`), plus the distance between the two centers of mass.
pub fn report(a: &StructureSet, b: &StructureSet, roi_name: &str) -> Result<Table> {
    report_with(a, b, roi_name, &ReportConfig::default())
}

/// [`report`] with explicit output rounding.
pub fn report_with(
    a: &StructureSet,
    b: &StructureSet,
    roi_name: &str,
    config: &ReportConfig,
) -> Result<Table> {
    let roi_a = a.roi(roi_name)?;
    let roi_b = b.roi(roi_name)?;
    check_correspondence(roi_a, roi_b)?;

    let center_a = center_of_mass(roi_a)?;
    let center_b = center_of_mass(roi_b)?;

    let mut radius = Vec::with_capacity(roi_a.point_count());
    let mut distance = Vec::with_capacity(roi_a.point_count());
    for (slice_a, slice_b) in roi_a.slices.iter().zip(&roi_b.slices) {
        for (pa, pb) in slice_a.points.iter().zip(&slice_b.points) {
            radius.push(pa.distance(&center_a));
            distance.push(pa.distance(pb));
        }
    }

    debug!(
        structure = roi_name,
        points = radius.len(),
        "computed comparison statistics"
    );

    let r = round_to(config.decimals);
    let rows = vec![
        ("Max radius", max(&radius)),
        ("Min radius", min(&radius)),
        ("Mean radius", mean(&radius)),
        ("STD radius", std_dev(&radius)),
        ("Variance radius", variance(&radius)),
        ("Max distance", max(&distance)),
        ("Min distance", min(&distance)),
        ("Mean distance", mean(&distance)),
        ("STD distance", std_dev(&distance)),
        ("Variance distance", variance(&distance)),
        ("Distance between center mass", center_a.distance(&center_b)),
    ]
    .into_iter()
    .map(|(parameter, value)| TableRow {
        parameter: parameter.to_string(),
        value: r(value),
    })
    .collect();
    Ok(Table { rows })
}

fn check_correspondence(a: &Roi, b: &Roi) -> Result<()> {
    if a.slices.len() != b.slices.len() {
        return Err(GeometryError::ContourMismatch {
            what: "slice count",
            left: a.slices.len(),
            right: b.slices.len(),
        });
    }
    for (sa, sb) in a.slices.iter().zip(&b.slices) {
        if sa.len() != sb.len() {
            return Err(GeometryError::ContourMismatch {
                what: "point count",
                left: sa.len(),
                right: sb.len(),
            });
        }
    }
    Ok(())
}

/// Two-level center of mass: mean of per-slice centroids, not a flat mean
/// over all points.
fn center_of_mass(roi: &Roi) -> Result<Point3D> {
    let mut centroids = Vec::with_capacity(roi.slices.len());
    for slice in &roi.slices {
        centroids.push(slice.centroid().ok_or(GeometryError::EmptyContour)?);
    }
    if centroids.is_empty() {
        return Err(GeometryError::EmptyContour);
    }
    let n = centroids.len() as f64;
    let (sx, sy, sz) = centroids
        .iter()
        .fold((0.0, 0.0, 0.0), |(x, y, z), c| (x + c.x, y + c.y, z + c.z));
    Ok(Point3D::new(sx / n, sy / n, sz / n))
}

fn round_to(decimals: u32) -> impl Fn(f64) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    move |v| (v * scale).round() / scale
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}
