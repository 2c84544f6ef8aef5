//! Per-point attributes.
//!
//! A [`PointAttribute`] only records which deduplicated value each point uses.
//! The values themselves live elsewhere; two points share a value exactly when
//! their mapped indices are equal.

use super::index::{AttributeValueId, MeshIndex, PointId};

/// The semantic of a point attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// Vertex positions.
    Position,
    /// Vertex normals.
    Normal,
    /// Vertex colors.
    Color,
    /// Texture coordinates.
    TexCoord,
    /// Any other per-point data.
    Generic,
}

/// Mapping from point to deduplicated attribute value.
#[derive(Debug, Clone)]
pub struct PointAttribute<I: MeshIndex = u32> {
    attribute_type: AttributeType,
    mapped: Vec<AttributeValueId<I>>,
}

impl<I: MeshIndex> PointAttribute<I> {
    /// Create an attribute from an explicit point -> value mapping.
    pub fn new(attribute_type: AttributeType, mapped: Vec<AttributeValueId<I>>) -> Self {
        Self {
            attribute_type,
            mapped,
        }
    }

    /// Create an attribute where every point has its own value.
    pub fn identity(attribute_type: AttributeType, num_points: usize) -> Self {
        Self::new(
            attribute_type,
            (0..num_points).map(AttributeValueId::new).collect(),
        )
    }

    /// Create an attribute from raw value indices.
    pub fn from_mapped(attribute_type: AttributeType, mapped: &[usize]) -> Self {
        Self::new(
            attribute_type,
            mapped.iter().map(|&v| AttributeValueId::new(v)).collect(),
        )
    }

    /// The semantic of this attribute.
    #[inline]
    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    /// The value index used by `point`.
    #[inline]
    pub fn mapped_index(&self, point: PointId<I>) -> AttributeValueId<I> {
        self.mapped[point.index()]
    }

    /// Number of points this attribute maps.
    #[inline]
    pub fn len(&self) -> usize {
        self.mapped.len()
    }

    /// Whether the attribute maps no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty()
    }

    /// Number of distinct values referenced by the mapping.
    pub fn num_unique_values(&self) -> usize {
        let mut values: Vec<AttributeValueId<I>> = self.mapped.clone();
        values.sort_unstable();
        values.dedup();
        values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let att: PointAttribute = PointAttribute::identity(AttributeType::Normal, 4);
        assert_eq!(att.len(), 4);
        assert_eq!(att.mapped_index(PointId::new(3)), AttributeValueId::new(3));
        assert_eq!(att.num_unique_values(), 4);
    }

    #[test]
    fn test_shared_values() {
        let att: PointAttribute = PointAttribute::from_mapped(AttributeType::TexCoord, &[0, 1, 0, 1, 2]);
        assert_eq!(att.attribute_type(), AttributeType::TexCoord);
        assert_eq!(
            att.mapped_index(PointId::new(0)),
            att.mapped_index(PointId::new(2))
        );
        assert_eq!(att.num_unique_values(), 3);
    }
}
