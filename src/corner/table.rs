//! Corner table data structure.
//!
//! A corner table stores triangle mesh connectivity in flat arrays indexed by
//! corner. Corner `c` belongs to face `c / 3` at slot `c % 3`, so `next`,
//! `previous` and `face` are arithmetic. The only stored adjacency is the
//! opposite corner of every corner, plus the vertex each corner sits on.
//!
//! # Opposite Corners
//!
//! The opposite of corner `c` is the corner of the neighbouring face that does
//! not touch the edge facing `c`. Boundary edges, edges of degenerate faces and
//! the third and later faces on a non-manifold edge have no opposite; for those
//! corners [`CornerTable::opposite`] returns the invalid [`CornerId`].
//!
//! Opposites are always linked in pairs, so `opposite(opposite(c)) == c`
//! whenever `opposite(c)` is valid.

use super::iter::{VertexCornersIter, VertexRingIter};
use crate::error::{CornerTableError, Result};
use crate::mesh::{CornerId, FaceId, MeshIndex, VertexId};

/// Counters recorded while the table was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Faces skipped because two of their vertices coincide.
    pub degenerated_faces: usize,
    /// Corners of non-degenerate faces left without an opposite.
    pub boundary_corners: usize,
    /// Edges presented by more than two faces.
    pub non_manifold_edges: usize,
}

/// Array-based connectivity over the corners of a triangle mesh.
#[derive(Debug, Clone)]
pub struct CornerTable<I: MeshIndex = u32> {
    /// Vertex of every corner.
    pub(crate) corner_to_vertex: Vec<VertexId<I>>,

    /// Opposite corner of every corner, invalid when there is none.
    pub(crate) opposite_corners: Vec<CornerId<I>>,

    /// Left-most corner of every vertex, invalid for unreferenced vertices.
    pub(crate) vertex_corners: Vec<CornerId<I>>,

    /// Per-face degeneracy flags.
    pub(crate) degenerated: Vec<bool>,

    pub(crate) stats: BuildStats,
}

impl<I: MeshIndex> CornerTable<I> {
    /// Create a table with unlinked corners for the given faces.
    pub(crate) fn with_faces(faces: &[[VertexId<I>; 3]], num_vertices: usize) -> Self {
        let num_corners = faces.len() * 3;
        Self {
            corner_to_vertex: faces.iter().flatten().copied().collect(),
            opposite_corners: vec![CornerId::invalid(); num_corners],
            vertex_corners: vec![CornerId::invalid(); num_vertices],
            degenerated: vec![false; faces.len()],
            stats: BuildStats::default(),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of corners.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corner_to_vertex.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.degenerated.len()
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertex_corners.len()
    }

    /// Counters recorded during construction.
    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Number of faces that were skipped as degenerate.
    #[inline]
    pub fn num_degenerated_faces(&self) -> usize {
        self.stats.degenerated_faces
    }

    /// Number of corners of non-degenerate faces without an opposite corner.
    #[inline]
    pub fn num_boundary_corners(&self) -> usize {
        self.stats.boundary_corners
    }

    /// Number of edges shared by more than two faces.
    #[inline]
    pub fn num_non_manifold_edges(&self) -> usize {
        self.stats.non_manifold_edges
    }

    /// Whether `c` addresses a corner of this table.
    #[inline]
    pub fn is_valid_corner(&self, c: CornerId<I>) -> bool {
        c.is_valid() && c.index() < self.num_corners()
    }

    /// Range-check a corner id coming from outside the table.
    ///
    /// Navigation methods assume their input is in range. Callers holding
    /// untrusted corner ids should pass them through here first.
    pub fn check_corner(&self, c: CornerId<I>) -> Result<CornerId<I>> {
        if self.is_valid_corner(c) {
            Ok(c)
        } else {
            Err(CornerTableError::CornerOutOfRange {
                corner: c.index(),
                num_corners: self.num_corners(),
            })
        }
    }

    // ==================== Corner Navigation ====================

    /// The next corner within the same face.
    #[inline]
    pub fn next(&self, c: CornerId<I>) -> CornerId<I> {
        if !c.is_valid() {
            return c;
        }
        if c.slot() == 2 {
            CornerId::new(c.index() - 2)
        } else {
            CornerId::new(c.index() + 1)
        }
    }

    /// The previous corner within the same face.
    #[inline]
    pub fn previous(&self, c: CornerId<I>) -> CornerId<I> {
        if !c.is_valid() {
            return c;
        }
        if c.slot() == 0 {
            CornerId::new(c.index() + 2)
        } else {
            CornerId::new(c.index() - 1)
        }
    }

    /// The opposite corner across the edge facing `c`, or invalid if none.
    #[inline]
    pub fn opposite(&self, c: CornerId<I>) -> CornerId<I> {
        if !c.is_valid() {
            return c;
        }
        self.opposite_corners[c.index()]
    }

    /// The face containing `c`.
    #[inline]
    pub fn face(&self, c: CornerId<I>) -> FaceId<I> {
        c.face()
    }

    /// The slot of `c` within its face (0, 1 or 2).
    #[inline]
    pub fn local_index(&self, c: CornerId<I>) -> usize {
        c.slot()
    }

    /// The first corner of face `f`.
    #[inline]
    pub fn first_corner(&self, f: FaceId<I>) -> CornerId<I> {
        if !f.is_valid() {
            return CornerId::invalid();
        }
        CornerId::from_face_slot(f, 0)
    }

    /// The three corners of face `f`, in slot order.
    #[inline]
    pub fn all_corners(&self, f: FaceId<I>) -> [CornerId<I>; 3] {
        [
            CornerId::from_face_slot(f, 0),
            CornerId::from_face_slot(f, 1),
            CornerId::from_face_slot(f, 2),
        ]
    }

    /// The vertex `c` sits on, or invalid for the sentinel corner.
    #[inline]
    pub fn vertex(&self, c: CornerId<I>) -> VertexId<I> {
        if !c.is_valid() {
            return VertexId::invalid();
        }
        self.corner_to_vertex[c.index()]
    }

    /// The three vertices of face `f`, in slot order.
    pub fn face_vertices(&self, f: FaceId<I>) -> [VertexId<I>; 3] {
        let [c0, c1, c2] = self.all_corners(f);
        [self.vertex(c0), self.vertex(c1), self.vertex(c2)]
    }

    /// Whether face `f` was skipped as degenerate.
    #[inline]
    pub fn is_degenerated(&self, f: FaceId<I>) -> bool {
        self.degenerated[f.index()]
    }

    // ==================== Fan Navigation ====================

    /// The corner of the face on the left of `c`, seen from its vertex.
    #[inline]
    pub fn left_corner(&self, c: CornerId<I>) -> CornerId<I> {
        self.opposite(self.previous(c))
    }

    /// The corner of the face on the right of `c`, seen from its vertex.
    #[inline]
    pub fn right_corner(&self, c: CornerId<I>) -> CornerId<I> {
        self.opposite(self.next(c))
    }

    /// The corner on the same vertex in the face to the right of `c`.
    ///
    /// Returns invalid when the step crosses a boundary, or when the
    /// neighbouring face is oriented against this one.
    pub fn swing_right(&self, c: CornerId<I>) -> CornerId<I> {
        let swung = self.previous(self.opposite(self.previous(c)));
        self.on_same_vertex(c, swung)
    }

    /// The corner on the same vertex in the face to the left of `c`.
    ///
    /// Returns invalid when the step crosses a boundary, or when the
    /// neighbouring face is oriented against this one.
    pub fn swing_left(&self, c: CornerId<I>) -> CornerId<I> {
        let swung = self.next(self.opposite(self.next(c)));
        self.on_same_vertex(c, swung)
    }

    #[inline]
    fn on_same_vertex(&self, c: CornerId<I>, swung: CornerId<I>) -> CornerId<I> {
        if swung.is_valid() && self.vertex(swung) == self.vertex(c) {
            swung
        } else {
            CornerId::invalid()
        }
    }

    /// The corner of `v` from which swinging right visits its fan.
    ///
    /// For a vertex on a boundary this is the corner next to the boundary; for
    /// an interior vertex any corner of the fan. Invalid for vertices that no
    /// non-degenerate face references.
    ///
    /// Vertices are not split: where several fans meet at one vertex, only the
    /// fan of the lowest corner is recorded, and the fan queries below
    /// (`is_on_boundary`, `valence`, `vertex_corners`, `vertex_ring`) see only
    /// that fan.
    #[inline]
    pub fn left_most_corner(&self, v: VertexId<I>) -> CornerId<I> {
        self.vertex_corners[v.index()]
    }

    /// Whether the fan of `v` is open.
    ///
    /// Unreferenced vertices count as boundary vertices.
    pub fn is_on_boundary(&self, v: VertexId<I>) -> bool {
        let c = self.left_most_corner(v);
        !c.is_valid() || !self.swing_left(c).is_valid()
    }

    /// Number of distinct vertices adjacent to `v` through its recorded fan.
    pub fn valence(&self, v: VertexId<I>) -> usize {
        let mut ring: Vec<VertexId<I>> = self.vertex_ring(v).collect();
        ring.sort_unstable();
        ring.dedup();
        ring.len()
    }

    /// Iterate over the corners of `v`, swinging right from its left-most corner.
    ///
    /// Covers a single fan; see [`left_most_corner`](Self::left_most_corner).
    pub fn vertex_corners(&self, v: VertexId<I>) -> VertexCornersIter<'_, I> {
        VertexCornersIter::new(self, v)
    }

    /// Iterate over the vertices adjacent to `v`.
    pub fn vertex_ring(&self, v: VertexId<I>) -> VertexRingIter<'_, I> {
        VertexRingIter::new(self, v)
    }

    /// Iterate over all corner IDs.
    pub fn corner_ids(&self) -> impl Iterator<Item = CornerId<I>> + '_ {
        (0..self.num_corners()).map(CornerId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.num_vertices()).map(VertexId::new)
    }

    // ==================== Construction ====================

    /// Record the left-most corner of every vertex.
    ///
    /// Must run after all opposites are linked.
    pub(crate) fn compute_vertex_corners(&mut self) {
        for i in 0..self.num_corners() {
            let c = CornerId::new(i);
            if self.degenerated[c.face().index()] {
                continue;
            }
            let v = self.corner_to_vertex[i];
            if self.vertex_corners[v.index()].is_valid() {
                continue;
            }

            // Swing left until the fan opens or closes on itself. The step
            // bound only matters for tables with inconsistent links.
            let mut left_most = c;
            let mut steps = 0;
            loop {
                let swung = self.swing_left(left_most);
                if !swung.is_valid() || swung == c || steps > self.num_corners() {
                    break;
                }
                left_most = swung;
                steps += 1;
            }
            // A closed fan keeps the corner it started from.
            if self.swing_left(left_most) == c {
                left_most = c;
            }
            self.vertex_corners[v.index()] = left_most;
        }
    }

    // ==================== Validation ====================

    /// Check that the stored connectivity is consistent.
    ///
    /// Every linked pair must be mutual, and both corners must face the same
    /// edge (the same two vertices, in either order).
    pub fn is_valid(&self) -> bool {
        for c in self.corner_ids() {
            let opp = self.opposite(c);
            if !opp.is_valid() {
                continue;
            }
            if !self.is_valid_corner(opp) || self.opposite(opp) != c {
                return false;
            }
            if self.is_degenerated(c.face()) || self.is_degenerated(opp.face()) {
                return false;
            }

            let mut edge = [self.vertex(self.next(c)), self.vertex(self.previous(c))];
            let mut other = [self.vertex(self.next(opp)), self.vertex(self.previous(opp))];
            edge.sort_unstable();
            other.sort_unstable();
            if edge != other {
                return false;
            }
        }

        for v in self.vertex_ids() {
            let c = self.left_most_corner(v);
            if c.is_valid() && self.vertex(c) != v {
                return false;
            }
        }

        true
    }
}
