//! Functions that take both a [`Mesh`] and a [`CornerTable`].
//!
//! This is the layer downstream encoders and traversals talk to: building a
//! table from a mesh, resolving corners back to mesh points, and finding the
//! edges where an attribute is discontinuous.
//!
//! # Example
//!
//! ```
//! use cornertable::corner::{create_corner_table, corner_to_point_id};
//! use cornertable::mesh::{CornerId, Mesh, PointId};
//!
//! let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
//! let table = create_corner_table(&mesh).unwrap();
//!
//! assert_eq!(corner_to_point_id(CornerId::new(4), &table, &mesh), PointId::new(0));
//! ```

use rayon::prelude::*;

use super::builder::{build_corner_table, BuildMode};
use super::table::CornerTable;
use crate::error::Result;
use crate::mesh::{AttributeType, CornerId, Mesh, MeshIndex, PointAttribute, PointId};

/// Options for scanning a table for attribute seams.
#[derive(Debug, Clone)]
pub struct SeamOptions {
    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for SeamOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SeamOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Build a corner table from the positions of `mesh`.
///
/// Points with equal position values are connected even when their other
/// attributes differ. Without a position attribute, points are connected by id.
pub fn create_corner_table<I: MeshIndex>(mesh: &Mesh<I>) -> Result<CornerTable<I>> {
    build_corner_table(mesh, BuildMode::Positions)
}

/// Build a corner table from all attributes of `mesh`.
///
/// Faces are only connected across an edge when every attribute agrees at
/// both endpoints, so each attribute seam becomes a boundary of the table.
pub fn create_corner_table_from_all_attributes<I: MeshIndex>(
    mesh: &Mesh<I>,
) -> Result<CornerTable<I>> {
    build_corner_table(mesh, BuildMode::AllAttributes)
}

/// Build a corner table from the first attribute of `attribute_type`.
pub fn create_corner_table_from_attribute<I: MeshIndex>(
    mesh: &Mesh<I>,
    attribute_type: AttributeType,
) -> Result<CornerTable<I>> {
    build_corner_table(mesh, BuildMode::Attribute(attribute_type))
}

/// The mesh point stored at corner `c`.
///
/// Returns the invalid point for the sentinel corner.
#[inline]
pub fn corner_to_point_id<I: MeshIndex>(
    c: CornerId<I>,
    table: &CornerTable<I>,
    mesh: &Mesh<I>,
) -> PointId<I> {
    if !c.is_valid() {
        return PointId::invalid();
    }
    mesh.face(table.face(c))[table.local_index(c)]
}

/// The mesh point stored at corner `c`, without a corner table.
///
/// Returns the invalid point for the sentinel corner.
#[inline]
pub fn corner_to_point_id_raw<I: MeshIndex>(c: CornerId<I>, mesh: &Mesh<I>) -> PointId<I> {
    if !c.is_valid() {
        return PointId::invalid();
    }
    mesh.face((c.index() / 3).into())[c.index() % 3]
}

/// Whether the edge facing corner `c` is a seam of `attribute`.
///
/// A corner without an opposite is never opposite to a seam. Otherwise both
/// endpoints of the shared edge are compared as seen from the two faces; the
/// edge is a seam when either endpoint maps to different attribute values.
pub fn is_corner_opposite_to_attribute_seam<I: MeshIndex>(
    c: CornerId<I>,
    attribute: &PointAttribute<I>,
    mesh: &Mesh<I>,
    table: &CornerTable<I>,
) -> bool {
    let opp = table.opposite(c);
    if !opp.is_valid() {
        return false;
    }

    // With consistent orientation next(c) and previous(opp) sit on the same
    // end of the edge. A flipped neighbour pairs next with next instead.
    let (near, far) = (table.next(c), table.previous(c));
    let (opp_near, opp_far) = if table.vertex(near) == table.vertex(table.previous(opp)) {
        (table.previous(opp), table.next(opp))
    } else {
        (table.next(opp), table.previous(opp))
    };

    let value = |corner| attribute.mapped_index(corner_to_point_id(corner, table, mesh));
    value(near) != value(opp_near) || value(far) != value(opp_far)
}

/// All corners opposite to a seam of `attribute`, in ascending order.
pub fn attribute_seam_corners<I: MeshIndex>(
    attribute: &PointAttribute<I>,
    mesh: &Mesh<I>,
    table: &CornerTable<I>,
    options: &SeamOptions,
) -> Vec<CornerId<I>> {
    let num_corners = table.num_corners();
    let is_seam =
        |i: usize| is_corner_opposite_to_attribute_seam(CornerId::new(i), attribute, mesh, table);

    let corners: Vec<CornerId<I>> = if options.parallel {
        (0..num_corners)
            .into_par_iter()
            .filter(|&i| is_seam(i))
            .map(CornerId::new)
            .collect()
    } else {
        (0..num_corners)
            .filter(|&i| is_seam(i))
            .map(CornerId::new)
            .collect()
    };

    log::debug!(
        "{} of {} corners lie opposite to {:?} seams",
        corners.len(),
        num_corners,
        attribute.attribute_type()
    );
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FaceId;

    /// Two triangles sharing positions 0 and 1.
    ///
    /// Face 1 uses points 4 and 5 for the shared positions, so it can carry
    /// its own texture coordinates along the edge.
    fn split_quad(uv: &[usize]) -> Mesh {
        Mesh::from_faces(6, &[[0, 1, 2], [5, 4, 3]])
            .with_attribute(PointAttribute::from_mapped(
                AttributeType::Position,
                &[0, 1, 2, 3, 0, 1],
            ))
            .with_attribute(PointAttribute::from_mapped(AttributeType::TexCoord, uv))
    }

    #[test]
    fn test_corner_to_point_id() {
        let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
        let table = create_corner_table(&mesh).unwrap();

        let points: Vec<usize> = table
            .corner_ids()
            .map(|c| corner_to_point_id(c, &table, &mesh).index())
            .collect();
        assert_eq!(points, vec![0, 1, 2, 1, 0, 3]);

        for c in table.corner_ids() {
            assert_eq!(
                corner_to_point_id(c, &table, &mesh),
                corner_to_point_id_raw(c, &mesh)
            );
        }
        assert!(!corner_to_point_id(CornerId::invalid(), &table, &mesh).is_valid());
        assert!(!corner_to_point_id_raw(CornerId::<u32>::invalid(), &mesh).is_valid());
    }

    #[test]
    fn test_uv_seam_splits_all_attribute_table() {
        // Point 4 shares position 0 but not its texture coordinate.
        let mesh = split_quad(&[0, 1, 2, 3, 4, 1]);
        let geometry = create_corner_table(&mesh).unwrap();
        let seamed = create_corner_table_from_all_attributes(&mesh).unwrap();

        assert_eq!(geometry.opposite(CornerId::new(2)), CornerId::new(5));
        assert!(!seamed.opposite(CornerId::new(2)).is_valid());
        assert!(!seamed.opposite(CornerId::new(5)).is_valid());
        assert_eq!(seamed.num_boundary_corners(), 6);
    }

    #[test]
    fn test_shared_uvs_keep_all_attribute_link() {
        let mesh = split_quad(&[0, 1, 2, 3, 0, 1]);
        let seamed = create_corner_table_from_all_attributes(&mesh).unwrap();

        assert_eq!(seamed.opposite(CornerId::new(2)), CornerId::new(5));
    }

    #[test]
    fn test_seam_predicate() {
        let seam_mesh = split_quad(&[0, 1, 2, 3, 4, 1]);
        let table = create_corner_table(&seam_mesh).unwrap();
        let uv = seam_mesh.named_attribute(AttributeType::TexCoord).unwrap();

        assert!(is_corner_opposite_to_attribute_seam(CornerId::new(2), uv, &seam_mesh, &table));
        assert!(is_corner_opposite_to_attribute_seam(CornerId::new(5), uv, &seam_mesh, &table));
        // Boundary corners are never seams.
        assert!(!is_corner_opposite_to_attribute_seam(CornerId::new(0), uv, &seam_mesh, &table));

        let smooth_mesh = split_quad(&[0, 1, 2, 3, 0, 1]);
        let uv = smooth_mesh.named_attribute(AttributeType::TexCoord).unwrap();
        assert!(!is_corner_opposite_to_attribute_seam(CornerId::new(2), uv, &smooth_mesh, &table));
    }

    #[test]
    fn test_seam_on_second_endpoint() {
        // Only point 5 (position 1) disagrees.
        let mesh = split_quad(&[0, 1, 2, 3, 0, 9]);
        let table = create_corner_table(&mesh).unwrap();
        let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();

        assert!(is_corner_opposite_to_attribute_seam(CornerId::new(2), uv, &mesh, &table));
    }

    #[test]
    fn test_seam_with_flipped_neighbour() {
        // Face 1 repeats the winding of face 0 along the shared edge.
        let mesh: Mesh = Mesh::from_faces(6, &[[0, 1, 2], [4, 5, 3]])
            .with_attribute(PointAttribute::from_mapped(
                AttributeType::Position,
                &[0, 1, 2, 3, 0, 1],
            ))
            .with_attribute(PointAttribute::from_mapped(
                AttributeType::TexCoord,
                &[0, 1, 2, 3, 0, 1],
            ));
        let table = create_corner_table(&mesh).unwrap();
        let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();

        assert_eq!(table.opposite(CornerId::new(2)), CornerId::new(5));
        assert!(!is_corner_opposite_to_attribute_seam(CornerId::new(2), uv, &mesh, &table));
    }

    #[test]
    fn test_uniform_attribute_has_no_seams() {
        let mesh: Mesh = Mesh::from_faces(5, &[[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]])
            .with_attribute(PointAttribute::from_mapped(AttributeType::Normal, &[0; 5]));
        let table = create_corner_table(&mesh).unwrap();
        let normal = mesh.attribute(0);

        let seams = attribute_seam_corners(normal, &mesh, &table, &SeamOptions::default());
        assert!(seams.is_empty());
    }

    #[test]
    fn test_seam_corners_parallel_matches_sequential() {
        let mesh = split_quad(&[0, 1, 2, 3, 4, 1]);
        let table = create_corner_table(&mesh).unwrap();
        let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();

        let parallel = attribute_seam_corners(uv, &mesh, &table, &SeamOptions::default());
        let sequential =
            attribute_seam_corners(uv, &mesh, &table, &SeamOptions::default().sequential());
        assert_eq!(parallel, vec![CornerId::new(2), CornerId::new(5)]);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_table_from_single_attribute() {
        let mesh = split_quad(&[0, 1, 2, 3, 4, 1]);
        let uv_table = create_corner_table_from_attribute(&mesh, AttributeType::TexCoord).unwrap();

        // Texture coordinates 0 and 4 differ, so the faces are not connected.
        assert!(!uv_table.opposite(CornerId::new(2)).is_valid());
        assert_eq!(uv_table.face(CornerId::new(5)), FaceId::new(1));
    }
}
