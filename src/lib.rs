//! # Cornertable
//!
//! Compact corner-table connectivity for triangle meshes.
//!
//! A corner table replaces a pointer-based half-edge structure with a few flat
//! integer arrays. Every corner of every face gets an id, and the table answers
//! `next`, `previous` and `opposite` for any corner in constant time. It is the
//! connectivity layer mesh compression, attribute prediction and traversal
//! algorithms are written against.
//!
//! ## Features
//!
//! - **Index-only storage**: corners, faces and vertices are type-safe integer ids
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Two construction modes**: connect faces by position, or cut along every
//!   attribute seam
//! - **Irregular input**: degenerate faces, boundaries and non-manifold edges are
//!   accepted and resolved by fixed policies
//! - **Seam detection**: find the edges where an attribute is discontinuous
//!
//! ## Quick Start
//!
//! ```
//! use cornertable::prelude::*;
//!
//! // Two triangles sharing edge (0, 1)
//! let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
//! let table = create_corner_table(&mesh).unwrap();
//!
//! assert_eq!(table.num_faces(), 2);
//! assert_eq!(table.num_corners(), 6);
//!
//! // The corner on point 2 sees the corner on point 3 across the shared edge.
//! let c = CornerId::new(2);
//! let opp = table.opposite(c);
//! assert_eq!(corner_to_point_id(opp, &table, &mesh), PointId::new(3));
//! assert_eq!(table.opposite(opp), c);
//! ```
//!
//! ## Attribute Seams
//!
//! ```
//! use cornertable::prelude::*;
//!
//! // Points 4 and 5 repeat positions 0 and 1, with their own texture coordinates.
//! let mesh: Mesh = Mesh::from_faces(6, &[[0, 1, 2], [5, 4, 3]])
//!     .with_attribute(PointAttribute::from_mapped(AttributeType::Position, &[0, 1, 2, 3, 0, 1]))
//!     .with_attribute(PointAttribute::from_mapped(AttributeType::TexCoord, &[0, 1, 2, 3, 4, 5]));
//!
//! let geometry = create_corner_table(&mesh).unwrap();
//! let seamed = create_corner_table_from_all_attributes(&mesh).unwrap();
//!
//! let c = CornerId::new(2);
//! assert!(geometry.opposite(c).is_valid());
//! assert!(!seamed.opposite(c).is_valid());
//!
//! let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();
//! assert!(is_corner_opposite_to_attribute_seam(c, uv, &mesh, &geometry));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corner;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use cornertable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::corner::{
        attribute_seam_corners, corner_to_point_id, corner_to_point_id_raw, create_corner_table,
        create_corner_table_from_all_attributes, create_corner_table_from_attribute,
        is_corner_opposite_to_attribute_seam, BuildMode, CornerTable, SeamOptions,
    };
    pub use crate::error::{CornerTableError, Result};
    pub use crate::mesh::{
        AttributeType, AttributeValueId, CornerId, FaceId, Mesh, MeshIndex, PointAttribute,
        PointId, VertexId,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_tetrahedron() {
        let faces = vec![
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let mesh: Mesh = Mesh::from_faces(4, &faces);
        let table = create_corner_table(&mesh).unwrap();

        assert_eq!(table.num_vertices(), 4);
        assert_eq!(table.num_faces(), 4);
        assert_eq!(table.num_corners(), 12);
        // Closed mesh: every corner has an opposite
        assert_eq!(table.num_boundary_corners(), 0);
        assert!(table.is_valid());

        for c in table.corner_ids() {
            assert_eq!(table.opposite(table.opposite(c)), c);
        }
        for v in table.vertex_ids() {
            assert!(!table.is_on_boundary(v), "vertex {:?} should not be on boundary", v);
            assert_eq!(table.valence(v), 3);
        }
    }
}
