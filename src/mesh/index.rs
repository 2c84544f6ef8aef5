//! Index types for mesh and corner table elements.
//!
//! Points, faces, corners, vertices and attribute values are all plain integers.
//! The wrappers here keep them from being mixed up, and are generic over the
//! underlying integer type (u16 for small meshes, u32 for typical meshes, u64
//! for massive meshes).

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can be used as mesh indices.
///
/// This trait is implemented for `u16`, `u32`, and `u64`. The largest value of
/// each type is reserved as the invalid sentinel.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The maximum valid index value.
    const MAX: Self;

    /// A sentinel value representing an invalid/null index.
    const INVALID: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics in debug builds if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;

    /// Whether `count` elements can be addressed with this index type.
    fn can_address(count: usize) -> bool {
        count == 0 || count - 1 <= Self::MAX.to_usize()
    }

    /// Check if this is a valid (non-sentinel) index.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl MeshIndex for u16 {
    const MAX: Self = u16::MAX - 1;
    const INVALID: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: Self = u32::MAX - 1;
    const INVALID: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    const MAX: Self = u64::MAX - 1;
    const INVALID: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A point of the mesh: one unique combination of position and attribute values.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PointId<I: MeshIndex = u32>(I);

/// A face of the mesh, by its position in the face list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId<I: MeshIndex = u32>(I);

/// A corner: `face * 3 + slot`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CornerId<I: MeshIndex = u32>(I);

/// A vertex of a corner table: the key the table was connected on.
///
/// Depending on how the table was built, a vertex stands for a position value,
/// a single attribute value, or a full point.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

/// A deduplicated attribute value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct AttributeValueId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// Create an invalid/null index.
            #[inline]
            pub fn invalid() -> Self {
                Self(I::INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// Get the raw value of the underlying type.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl<I: MeshIndex> Default for $name<I> {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(PointId, "P");
impl_index_type!(FaceId, "F");
impl_index_type!(CornerId, "C");
impl_index_type!(VertexId, "V");
impl_index_type!(AttributeValueId, "A");

impl<I: MeshIndex> CornerId<I> {
    /// The corner at `slot` (0, 1 or 2) of `face`.
    #[inline]
    pub fn from_face_slot(face: FaceId<I>, slot: usize) -> Self {
        debug_assert!(slot < 3, "corner slot {} out of range", slot);
        Self::new(face.index() * 3 + slot)
    }

    /// The face this corner belongs to, or invalid for the sentinel.
    #[inline]
    pub fn face(self) -> FaceId<I> {
        if self.is_valid() {
            FaceId::new(self.index() / 3)
        } else {
            FaceId::invalid()
        }
    }

    /// The slot of this corner within its face (0, 1 or 2).
    #[inline]
    pub fn slot(self) -> usize {
        self.index() % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id() {
        let p: PointId = PointId::new(42);
        assert_eq!(p.index(), 42);
        assert!(p.is_valid());

        let invalid: PointId = PointId::invalid();
        assert!(!invalid.is_valid());
        assert_eq!(PointId::<u32>::default(), invalid);
    }

    #[test]
    fn test_corner_decomposition() {
        let c: CornerId = CornerId::from_face_slot(FaceId::new(4), 2);
        assert_eq!(c.index(), 14);
        assert_eq!(c.face(), FaceId::new(4));
        assert_eq!(c.slot(), 2);

        assert!(!CornerId::<u32>::invalid().face().is_valid());
    }

    #[test]
    fn test_small_indices() {
        let c: CornerId<u16> = CornerId::new(1000);
        assert_eq!(c.index(), 1000);
        assert!(u16::can_address(65_535));
        assert!(!u16::can_address(65_536));
        assert!(u32::can_address(0));
    }

    #[test]
    fn test_debug_format() {
        let c: CornerId = CornerId::new(7);
        assert_eq!(format!("{:?}", c), "C(7)");

        let invalid: CornerId = CornerId::invalid();
        assert_eq!(format!("{:?}", invalid), "C(INVALID)");
    }
}
