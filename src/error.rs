//! Error types for cornertable.
//!
//! Only construction can fail. Every navigation query on a built table is total.

use thiserror::Error;

use crate::mesh::AttributeType;

/// Result type alias using [`CornerTableError`].
pub type Result<T> = std::result::Result<T, CornerTableError>;

/// Errors that can occur while building or addressing a corner table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CornerTableError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a point outside the mesh's point range.
    #[error("face {face} references point {point}, but the mesh has {num_points} points")]
    InvalidPointIndex {
        /// The face index.
        face: usize,
        /// The out-of-range point index.
        point: usize,
        /// Number of points declared by the mesh.
        num_points: usize,
    },

    /// An attribute maps fewer points than the mesh declares.
    #[error("attribute {attribute} maps {len} points, but the mesh has {num_points} points")]
    AttributeTooSmall {
        /// Position of the attribute in the mesh's attribute list.
        attribute: usize,
        /// Number of mapped entries in the attribute.
        len: usize,
        /// Number of points declared by the mesh.
        num_points: usize,
    },

    /// The requested attribute is not present on the mesh.
    #[error("mesh has no {attribute_type:?} attribute")]
    MissingAttribute {
        /// The attribute type that was requested.
        attribute_type: AttributeType,
    },

    /// A corner id does not address a corner of the table.
    #[error("corner {corner} is out of range (table has {num_corners} corners)")]
    CornerOutOfRange {
        /// The offending corner index.
        corner: usize,
        /// Number of corners in the table.
        num_corners: usize,
    },

    /// The mesh has more elements than the chosen index type can address.
    #[error("{count} elements do not fit in the index type")]
    TooManyElements {
        /// Number of elements that had to be addressed.
        count: usize,
    },
}
