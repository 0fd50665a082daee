//! Geometric engine for radiotherapy structure-set contours.
//!
//! Consumes a [`StructureSet`] — named regions of interest (ROIs) as stacks
//! of 2D point slices, produced by an external file-loading collaborator —
//! and derives new snapshots from it: rigid rotation and translation about
//! a pivot point, signed margin expansion/contraction, and comparative
//! radius/distance statistics between two snapshots of the same structure.
//!
//! All operations are pure: the input set is never mutated, so the original
//! and any chain of derived snapshots can be compared with
//! [`report::report`].

pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod margin;
pub mod model;
pub mod report;
pub mod transform;

pub use config::EngineConfig;
pub use error::GeometryError;
pub use model::{Point3D, Roi, Slice, StructureSet};
pub use report::{report, Table, TableRow};
pub use transform::{Operation, RotationAxis, TranslationAxis};

pub type Result<T> = std::result::Result<T, GeometryError>;
