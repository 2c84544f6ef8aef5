//! Mesh input types.
//!
//! This module provides the read-only inputs a corner table is built from:
//! an indexed triangle [`Mesh`] and its [`PointAttribute`]s.
//!
//! # Index Types
//!
//! Elements are identified by type-safe index wrappers:
//! - [`PointId`] - Identifies a point of the mesh
//! - [`FaceId`] - Identifies a face
//! - [`CornerId`] - Identifies a corner (`face * 3 + slot`)
//! - [`VertexId`] - Identifies a vertex of a corner table
//! - [`AttributeValueId`] - Identifies a deduplicated attribute value
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Example
//!
//! ```
//! use cornertable::mesh::{AttributeType, Mesh, PointAttribute};
//!
//! let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]])
//!     .with_attribute(PointAttribute::identity(AttributeType::Position, 4));
//! assert_eq!(mesh.num_faces(), 2);
//! ```

mod attribute;
mod index;
mod triangle_mesh;

pub use attribute::{AttributeType, PointAttribute};
pub use index::{AttributeValueId, CornerId, FaceId, MeshIndex, PointId, VertexId};
pub use triangle_mesh::{Face, Mesh};
