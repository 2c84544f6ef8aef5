//! Corner table connectivity.
//!
//! This module provides the [`CornerTable`], the functions that build it from a
//! [`Mesh`](crate::mesh::Mesh), and the queries that need both.
//!
//! # Overview
//!
//! A corner is one (face, slot) pair, numbered `face * 3 + slot`. The table
//! answers `next`, `previous` and `face` by arithmetic and `opposite` by one
//! array lookup, which is all most mesh traversals need.
//!
//! # Construction
//!
//! Tables come in two flavours that share one builder:
//! - [`create_corner_table`] connects faces wherever positions meet
//! - [`create_corner_table_from_all_attributes`] additionally cuts the
//!   connectivity along every attribute seam
//!
//! ```
//! use cornertable::corner::{create_corner_table, corner_to_point_id};
//! use cornertable::mesh::{CornerId, Mesh};
//!
//! let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
//! let table = create_corner_table(&mesh).unwrap();
//!
//! let c = CornerId::new(2);
//! let opp = table.opposite(c);
//! assert_eq!(corner_to_point_id(opp, &table, &mesh).index(), 3);
//! ```

mod builder;
mod iter;
mod misc;
mod table;

pub use builder::{build_corner_table, BuildMode, VertexKeys};
pub use iter::{VertexCornersIter, VertexRingIter};
pub use misc::{
    attribute_seam_corners, corner_to_point_id, corner_to_point_id_raw, create_corner_table,
    create_corner_table_from_all_attributes, create_corner_table_from_attribute,
    is_corner_opposite_to_attribute_seam, SeamOptions,
};
pub use table::{BuildStats, CornerTable};
