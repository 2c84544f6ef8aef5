//! Iterators around the fan of a vertex.

use super::table::CornerTable;
use crate::mesh::{CornerId, MeshIndex, VertexId};

/// Iterator over the corners of a vertex.
///
/// Starts at the left-most corner and swings right until the fan closes or
/// reaches a boundary.
pub struct VertexCornersIter<'a, I: MeshIndex = u32> {
    table: &'a CornerTable<I>,
    start: CornerId<I>,
    current: CornerId<I>,
    steps: usize,
}

impl<'a, I: MeshIndex> VertexCornersIter<'a, I> {
    pub(crate) fn new(table: &'a CornerTable<I>, v: VertexId<I>) -> Self {
        let start = table.left_most_corner(v);
        Self {
            table,
            start,
            current: start,
            steps: 0,
        }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexCornersIter<'a, I> {
    type Item = CornerId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.current.is_valid() || self.steps > self.table.num_corners() {
            return None;
        }

        let result = self.current;
        self.steps += 1;
        self.current = self.table.swing_right(self.current);
        if self.current == self.start {
            self.current = CornerId::invalid();
        }

        Some(result)
    }
}

/// Iterator over the vertices adjacent to a vertex.
///
/// Yields the vertex after each corner of the fan. On an open fan the vertex
/// before the left-most corner is yielded last, so every neighbour appears.
pub struct VertexRingIter<'a, I: MeshIndex = u32> {
    corners: VertexCornersIter<'a, I>,
    done: bool,
}

impl<'a, I: MeshIndex> VertexRingIter<'a, I> {
    pub(crate) fn new(table: &'a CornerTable<I>, v: VertexId<I>) -> Self {
        Self {
            corners: VertexCornersIter::new(table, v),
            done: false,
        }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexRingIter<'a, I> {
    type Item = VertexId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let table = self.corners.table;
        if let Some(c) = self.corners.next() {
            return Some(table.vertex(table.next(c)));
        }

        self.done = true;
        // Closed fans already yielded every neighbour.
        let start = self.corners.start;
        if start.is_valid() && !table.swing_left(start).is_valid() {
            Some(table.vertex(table.previous(start)))
        } else {
            None
        }
    }
}
