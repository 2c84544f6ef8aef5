//! The triangle mesh a corner table is built from.
//!
//! A [`Mesh`] is a list of faces, each an ordered triple of point ids, plus any
//! number of point attributes. It carries no geometry of its own.

use super::attribute::{AttributeType, PointAttribute};
use super::index::{FaceId, MeshIndex, PointId};

/// A face as an ordered triple of point ids.
pub type Face<I = u32> = [PointId<I>; 3];

/// An indexed triangle mesh.
#[derive(Debug, Clone)]
pub struct Mesh<I: MeshIndex = u32> {
    num_points: usize,
    faces: Vec<Face<I>>,
    attributes: Vec<PointAttribute<I>>,
}

impl<I: MeshIndex> Mesh<I> {
    /// Create an empty mesh declaring `num_points` points.
    pub fn new(num_points: usize) -> Self {
        Self {
            num_points,
            faces: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a mesh from raw point-index triples.
    ///
    /// Indices are not checked here; corner table construction rejects faces
    /// that reference points outside `0..num_points`.
    ///
    /// # Example
    /// ```
    /// use cornertable::mesh::Mesh;
    ///
    /// let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
    /// assert_eq!(mesh.num_faces(), 2);
    /// ```
    pub fn from_faces(num_points: usize, faces: &[[usize; 3]]) -> Self {
        let mut mesh = Self::new(num_points);
        mesh.faces.reserve(faces.len());
        for &[a, b, c] in faces {
            mesh.add_face([PointId::new(a), PointId::new(b), PointId::new(c)]);
        }
        mesh
    }

    /// Append a face and return its id.
    pub fn add_face(&mut self, face: Face<I>) -> FaceId<I> {
        let id = FaceId::new(self.faces.len());
        self.faces.push(face);
        id
    }

    /// Append an attribute and return its position in the attribute list.
    pub fn add_attribute(&mut self, attribute: PointAttribute<I>) -> usize {
        self.attributes.push(attribute);
        self.attributes.len() - 1
    }

    /// Builder-style variant of [`Mesh::add_attribute`].
    pub fn with_attribute(mut self, attribute: PointAttribute<I>) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Number of points declared by the mesh.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The point triple of face `f`.
    #[inline]
    pub fn face(&self, f: FaceId<I>) -> &Face<I> {
        &self.faces[f.index()]
    }

    /// All faces in order.
    #[inline]
    pub fn faces(&self) -> &[Face<I>] {
        &self.faces
    }

    /// Number of attributes.
    #[inline]
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// The attribute at position `i`.
    #[inline]
    pub fn attribute(&self, i: usize) -> &PointAttribute<I> {
        &self.attributes[i]
    }

    /// All attributes in order.
    #[inline]
    pub fn attributes(&self) -> &[PointAttribute<I>] {
        &self.attributes
    }

    /// The first attribute of the given type, if any.
    pub fn named_attribute(&self, attribute_type: AttributeType) -> Option<&PointAttribute<I>> {
        self.attributes
            .iter()
            .find(|att| att.attribute_type() == attribute_type)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_faces() {
        let mesh: Mesh = Mesh::from_faces(4, &[[0, 1, 2], [1, 0, 3]]);
        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(
            *mesh.face(FaceId::new(1)),
            [PointId::new(1), PointId::new(0), PointId::new(3)]
        );
        assert_eq!(mesh.face_ids().count(), 2);
    }

    #[test]
    fn test_named_attribute() {
        let mesh: Mesh = Mesh::from_faces(3, &[[0, 1, 2]])
            .with_attribute(PointAttribute::identity(AttributeType::Position, 3))
            .with_attribute(PointAttribute::from_mapped(AttributeType::TexCoord, &[0, 0, 1]));

        assert_eq!(mesh.num_attributes(), 2);
        let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();
        assert_eq!(uv.num_unique_values(), 2);
        assert!(mesh.named_attribute(AttributeType::Normal).is_none());
    }
}
