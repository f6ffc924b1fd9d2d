//! Primitive mesh collaborator
//!
//! Geometry generation lives outside this crate. The scene only needs to
//! name a primitive, ask for it to be loaded once, and later ask for it (or
//! some of its faces) to be drawn with whatever uniform state is current.

use bitflags::bitflags;

/// Primitive shapes a mesh library provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// Unit cube centred on the origin
    Box,
    /// Unit square in the XZ plane
    Plane,
    /// Unit cylinder standing on the XZ plane
    Cylinder,
    /// Cone
    Cone,
    /// Triangular prism
    Prism,
    /// Four-sided pyramid
    Pyramid4,
    /// Unit sphere
    Sphere,
    /// Upper half of the unit sphere
    HalfSphere,
    /// Cylinder with a narrower top
    TaperedCylinder,
    /// Torus
    Torus,
}

impl PrimitiveKind {
    /// Kinds that own their own geometry and must be loaded before drawing
    pub const LOADABLE: [PrimitiveKind; 9] = [
        PrimitiveKind::Box,
        PrimitiveKind::Plane,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Cone,
        PrimitiveKind::Prism,
        PrimitiveKind::Pyramid4,
        PrimitiveKind::Sphere,
        PrimitiveKind::TaperedCylinder,
        PrimitiveKind::Torus,
    ];

    /// The loadable kind whose geometry this kind is drawn from
    pub const fn geometry(self) -> PrimitiveKind {
        match self {
            PrimitiveKind::HalfSphere => PrimitiveKind::Sphere,
            other => other,
        }
    }
}

/// A single face of the box primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxSide {
    /// +Z face
    Front,
    /// -Z face
    Back,
    /// -X face
    Left,
    /// +X face
    Right,
    /// +Y face
    Top,
    /// -Y face
    Bottom,
}

bitflags! {
    /// Parts of the cylinder primitive to draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CylinderFaces: u8 {
        /// Top cap
        const TOP = 0b001;
        /// Bottom cap
        const BOTTOM = 0b010;
        /// Curved side
        const SIDES = 0b100;
    }
}

/// Which part of a primitive a draw covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceVariant {
    /// The complete primitive
    #[default]
    Whole,
    /// One face of a box
    BoxSide(BoxSide),
    /// A subset of a cylinder's parts
    CylinderFaces(CylinderFaces),
}

impl FaceVariant {
    /// Whether this variant can be applied to the given primitive
    pub const fn applies_to(self, kind: PrimitiveKind) -> bool {
        match self {
            FaceVariant::Whole => true,
            FaceVariant::BoxSide(_) => matches!(kind, PrimitiveKind::Box),
            FaceVariant::CylinderFaces(_) => matches!(kind, PrimitiveKind::Cylinder),
        }
    }
}

/// Mesh library collaborator
pub trait MeshLibrary {
    /// Build and upload the geometry for a primitive; repeated calls are no-ops
    fn load(&mut self, kind: PrimitiveKind);

    /// Issue the draw commands for a primitive using the current uniform state
    fn draw(&mut self, kind: PrimitiveKind, face: FaceVariant);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_sphere_draws_from_sphere_geometry() {
        assert_eq!(PrimitiveKind::HalfSphere.geometry(), PrimitiveKind::Sphere);
        assert_eq!(PrimitiveKind::Torus.geometry(), PrimitiveKind::Torus);
        assert!(!PrimitiveKind::LOADABLE.contains(&PrimitiveKind::HalfSphere));
        assert!(PrimitiveKind::LOADABLE
            .iter()
            .all(|kind| kind.geometry() == *kind));
    }

    #[test]
    fn test_face_variants_apply_to_matching_shapes() {
        assert!(FaceVariant::Whole.applies_to(PrimitiveKind::Torus));
        assert!(FaceVariant::BoxSide(BoxSide::Top).applies_to(PrimitiveKind::Box));
        assert!(!FaceVariant::BoxSide(BoxSide::Top).applies_to(PrimitiveKind::Cylinder));

        let caps = FaceVariant::CylinderFaces(CylinderFaces::TOP | CylinderFaces::BOTTOM);
        assert!(caps.applies_to(PrimitiveKind::Cylinder));
        assert!(!caps.applies_to(PrimitiveKind::Plane));
    }
}
