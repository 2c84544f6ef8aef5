//! Corner table construction.
//!
//! Every table is built by the same edge-matching pass. What differs between
//! build modes is only how mesh points are turned into table vertices before
//! matching: by position value, by one attribute's value, or by the full tuple
//! of attribute values. Two faces are linked across an edge exactly when their
//! endpoint vertices agree, so the vertex key decides where seams cut the
//! connectivity.
//!
//! # Edge Matching
//!
//! Each corner faces one edge, keyed by its two endpoint vertices in sorted
//! order. The first corner presenting a key waits in a map; the second one is
//! linked to it as its opposite and the key is closed. Any further corner on a
//! closed key is a non-manifold occurrence and keeps no opposite. Faces whose
//! vertices coincide are skipped entirely.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use super::table::CornerTable;
use crate::error::{CornerTableError, Result};
use crate::mesh::{
    AttributeType, CornerId, FaceId, Mesh, MeshIndex, PointAttribute, PointId, VertexId,
};

/// How mesh points are keyed into table vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Key points by their position value. Points without a position attribute
    /// are keyed by their own id.
    Positions,

    /// Key points by their position (or point id) plus every other attribute
    /// value, so every attribute seam becomes a boundary.
    AllAttributes,

    /// Key points by the value of the first attribute of the given type.
    Attribute(AttributeType),
}

/// A point -> vertex mapping for one build mode.
#[derive(Debug, Clone)]
pub struct VertexKeys<I: MeshIndex = u32> {
    point_to_vertex: Vec<VertexId<I>>,
    num_vertices: usize,
}

impl<I: MeshIndex> VertexKeys<I> {
    /// Every point is its own vertex.
    pub fn from_points(num_points: usize) -> Self {
        Self {
            point_to_vertex: (0..num_points).map(VertexId::new).collect(),
            num_vertices: num_points,
        }
    }

    /// Points sharing a value of `attribute` share a vertex.
    ///
    /// `index` is the attribute's position in the mesh, used for error reporting.
    /// Vertex ids are assigned densely in order of first appearance, so sparse
    /// value indices do not inflate the vertex count.
    pub fn from_attribute(
        attribute: &PointAttribute<I>,
        index: usize,
        num_points: usize,
    ) -> Result<Self> {
        check_attribute_len(attribute, index, num_points)?;
        Ok(Self::dense(num_points, |p| attribute.mapped_index(p.into()).index()))
    }

    /// Points share a vertex when they share a geometric location and every
    /// other attribute value.
    ///
    /// The location is the position value, or the point itself when the mesh
    /// has no position attribute. Every link of the resulting table is
    /// therefore also a link of the position-keyed table.
    pub fn from_all_attributes(mesh: &Mesh<I>) -> Result<Self> {
        let num_points = mesh.num_points();
        for (index, attribute) in mesh.attributes().iter().enumerate() {
            check_attribute_len(attribute, index, num_points)?;
        }

        let position = find_attribute(mesh, AttributeType::Position);
        let position_index = position.map(|(index, _)| index);
        Ok(Self::dense(num_points, |p| {
            let point = PointId::new(p);
            let mut key = Vec::with_capacity(mesh.num_attributes() + 1);
            key.push(match position {
                Some((_, attribute)) => attribute.mapped_index(point).index(),
                None => p,
            });
            key.extend(
                mesh.attributes()
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| Some(index) != position_index)
                    .map(|(_, attribute)| attribute.mapped_index(point).index()),
            );
            key
        }))
    }

    /// Number points by `key`, giving equal keys the same vertex.
    fn dense<K, F>(num_points: usize, key: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(usize) -> K,
    {
        let mut seen: HashMap<K, usize> = HashMap::with_capacity(num_points);
        let point_to_vertex = (0..num_points)
            .map(|p| {
                let next_id = seen.len();
                VertexId::new(*seen.entry(key(p)).or_insert(next_id))
            })
            .collect();

        Self {
            point_to_vertex,
            num_vertices: seen.len(),
        }
    }

    /// Select the keys for `mode`.
    pub fn for_mode(mesh: &Mesh<I>, mode: BuildMode) -> Result<Self> {
        let num_points = mesh.num_points();
        match mode {
            BuildMode::Positions => match find_attribute(mesh, AttributeType::Position) {
                Some((index, attribute)) => Self::from_attribute(attribute, index, num_points),
                None => Ok(Self::from_points(num_points)),
            },
            BuildMode::AllAttributes => Self::from_all_attributes(mesh),
            BuildMode::Attribute(attribute_type) => {
                let (index, attribute) = find_attribute(mesh, attribute_type)
                    .ok_or(CornerTableError::MissingAttribute { attribute_type })?;
                Self::from_attribute(attribute, index, num_points)
            }
        }
    }

    /// The vertex of `point`.
    #[inline]
    pub fn vertex(&self, point: usize) -> VertexId<I> {
        self.point_to_vertex[point]
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }
}

fn find_attribute<I: MeshIndex>(
    mesh: &Mesh<I>,
    attribute_type: AttributeType,
) -> Option<(usize, &PointAttribute<I>)> {
    mesh.attributes()
        .iter()
        .enumerate()
        .find(|(_, att)| att.attribute_type() == attribute_type)
}

fn check_attribute_len<I: MeshIndex>(
    attribute: &PointAttribute<I>,
    index: usize,
    num_points: usize,
) -> Result<()> {
    if attribute.len() < num_points {
        return Err(CornerTableError::AttributeTooSmall {
            attribute: index,
            len: attribute.len(),
            num_points,
        });
    }
    Ok(())
}

/// Reject meshes a table cannot be built from.
fn validate_mesh<I: MeshIndex>(mesh: &Mesh<I>) -> Result<()> {
    if mesh.num_faces() == 0 {
        return Err(CornerTableError::EmptyMesh);
    }

    let num_points = mesh.num_points();
    for (fi, face) in mesh.faces().iter().enumerate() {
        for &p in face {
            if !p.is_valid() || p.index() >= num_points {
                return Err(CornerTableError::InvalidPointIndex {
                    face: fi,
                    point: p.index(),
                    num_points,
                });
            }
        }
    }

    Ok(())
}

/// Build a corner table for `mesh`, keying points according to `mode`.
pub fn build_corner_table<I: MeshIndex>(mesh: &Mesh<I>, mode: BuildMode) -> Result<CornerTable<I>> {
    validate_mesh(mesh)?;
    let keys = VertexKeys::for_mode(mesh, mode)?;
    build_with_keys(mesh, &keys)
}

/// Build a corner table for `mesh` with an explicit point -> vertex mapping.
///
/// `keys` must have been derived from `mesh`.
pub(crate) fn build_with_keys<I: MeshIndex>(mesh: &Mesh<I>, keys: &VertexKeys<I>) -> Result<CornerTable<I>> {
    let faces: Vec<[VertexId<I>; 3]> = mesh
        .faces()
        .iter()
        .map(|f| {
            [
                keys.vertex(f[0].index()),
                keys.vertex(f[1].index()),
                keys.vertex(f[2].index()),
            ]
        })
        .collect();

    CornerTable::create(&faces, keys.num_vertices())
}

/// State of an edge key during matching.
#[derive(Debug, Clone, Copy)]
enum EdgeState<I: MeshIndex> {
    /// One corner faces this edge so far.
    Open(CornerId<I>),
    /// Two corners were linked across this edge.
    Matched,
    /// More than two faces share this edge.
    NonManifold,
}

impl<I: MeshIndex> CornerTable<I> {
    /// Build a corner table from faces given directly as vertex triples.
    ///
    /// # Arguments
    /// * `faces` - Triangle faces, each as three vertex ids
    /// * `num_vertices` - Number of vertices the faces may reference
    ///
    /// # Returns
    /// The table, or an error if there are no faces, a face references a vertex
    /// outside `0..num_vertices`, or the corners do not fit in the index type.
    ///
    /// # Example
    /// ```
    /// use cornertable::corner::CornerTable;
    /// use cornertable::mesh::{CornerId, VertexId};
    ///
    /// let v = |i: usize| -> VertexId { VertexId::new(i) };
    /// let faces = vec![[v(0), v(1), v(2)], [v(1), v(0), v(3)]];
    ///
    /// let table: CornerTable = CornerTable::create(&faces, 4).unwrap();
    /// assert_eq!(table.opposite(CornerId::new(2)), CornerId::new(5));
    /// ```
    pub fn create(faces: &[[VertexId<I>; 3]], num_vertices: usize) -> Result<Self> {
        if faces.is_empty() {
            return Err(CornerTableError::EmptyMesh);
        }
        let num_corners = faces.len() * 3;
        if !I::can_address(num_corners) {
            return Err(CornerTableError::TooManyElements { count: num_corners });
        }
        if !I::can_address(num_vertices) {
            return Err(CornerTableError::TooManyElements { count: num_vertices });
        }
        for (fi, face) in faces.iter().enumerate() {
            for &v in face {
                if !v.is_valid() || v.index() >= num_vertices {
                    return Err(CornerTableError::InvalidPointIndex {
                        face: fi,
                        point: v.index(),
                        num_points: num_vertices,
                    });
                }
            }
        }

        let mut table = CornerTable::with_faces(faces, num_vertices);
        let mut edges: HashMap<(VertexId<I>, VertexId<I>), EdgeState<I>> =
            HashMap::with_capacity(num_corners);

        for (fi, face) in faces.iter().enumerate() {
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                table.degenerated[fi] = true;
                table.stats.degenerated_faces += 1;
                continue;
            }

            for slot in 0..3 {
                let c = CornerId::from_face_slot(FaceId::new(fi), slot);
                let a = face[(slot + 1) % 3];
                let b = face[(slot + 2) % 3];
                let key = if a < b { (a, b) } else { (b, a) };

                match edges.entry(key) {
                    Entry::Vacant(entry) => {
                        entry.insert(EdgeState::Open(c));
                    }
                    Entry::Occupied(mut entry) => match entry.get().to_owned() {
                        EdgeState::Open(first) => {
                            table.opposite_corners[first.index()] = c;
                            table.opposite_corners[c.index()] = first;
                            entry.insert(EdgeState::Matched);
                        }
                        EdgeState::Matched => {
                            table.stats.non_manifold_edges += 1;
                            entry.insert(EdgeState::NonManifold);
                        }
                        EdgeState::NonManifold => {}
                    },
                }
            }
        }

        let boundary_corners = table
            .corner_ids()
            .filter(|&c| !table.is_degenerated(c.face()) && !table.opposite(c).is_valid())
            .count();
        table.stats.boundary_corners = boundary_corners;
        table.compute_vertex_corners();

        log::debug!(
            "built corner table: {} faces, {} vertices, {} boundary corners",
            table.num_faces(),
            table.num_vertices(),
            table.stats.boundary_corners
        );
        if table.stats.non_manifold_edges > 0 {
            log::warn!(
                "{} non-manifold edges left partially unlinked",
                table.stats.non_manifold_edges
            );
        }
        if table.stats.degenerated_faces > 0 {
            log::debug!("skipped {} degenerate faces", table.stats.degenerated_faces);
        }

        Ok(table)
    }
}
