//! Tabletop scene content
//!
//! A marble table with a cologne bottle, a perfume bottle and a wedding
//! itinerary on it. The jewelry boxes and vow books have no geometry yet.

use crate::foundation::math::Vec3;
use crate::render::{BoxSide, CylinderFaces, FaceVariant, PrimitiveKind};
use crate::scene::{RenderEntry, SceneObject, Shading};

const DARK_GREEN: (f32, f32, f32, f32) = (0.12, 0.21, 0.18, 1.0);

/// Every object of the tabletop scene, in render order
pub fn tabletop_scene() -> Vec<SceneObject> {
    vec![
        table(),
        cologne_bottle(),
        perfume_bottle(),
        itinerary(),
        SceneObject::placeholder("necklace box"),
        SceneObject::placeholder("ring box"),
        SceneObject::placeholder("white vow book"),
        SceneObject::placeholder("brown vow book"),
    ]
}

/// Texture tags sampled by `objects`, in first-use order
pub fn texture_tags(objects: &[SceneObject]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for entry in objects.iter().flat_map(|object| object.entries.iter()) {
        if let Shading::Texture(tag) = &entry.shading {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

fn table() -> SceneObject {
    SceneObject::new(
        "table",
        vec![RenderEntry::placed(
            "table top",
            PrimitiveKind::Plane,
            Vec3::new(30.0, 1.0, 30.0),
            Vec3::zeros(),
            Shading::texture("marble"),
        )],
    )
}

fn cologne_bottle() -> SceneObject {
    let cap_scale = Vec3::new(1.0, 1.0, 1.0);
    let cap_position = Vec3::new(-15.0, 5.8, -15.0);

    SceneObject::new(
        "cologne bottle",
        vec![
            RenderEntry::placed(
                "cologne body",
                PrimitiveKind::Box,
                Vec3::new(3.5, 5.0, 1.5),
                Vec3::new(-15.0, 2.5, -15.0),
                Shading::texture("blue_glass"),
            ),
            RenderEntry::placed(
                "cologne emblem",
                PrimitiveKind::Sphere,
                Vec3::new(0.5, 0.5, 0.2),
                Vec3::new(-15.0, 2.5, -14.25),
                Shading::texture("versace"),
            ),
            RenderEntry::placed(
                "cologne cap base",
                PrimitiveKind::Cylinder,
                Vec3::new(0.7, 0.8, 0.7),
                Vec3::new(-15.0, 5.0, -15.0),
                Shading::texture("gold"),
            ),
            RenderEntry::placed(
                "cologne cap",
                PrimitiveKind::Cylinder,
                cap_scale,
                cap_position,
                Shading::texture("gold"),
            )
            .rotated(0.0, 90.0, 0.0)
            .with_face(FaceVariant::CylinderFaces(CylinderFaces::BOTTOM | CylinderFaces::SIDES)),
            RenderEntry::placed(
                "cologne cap top",
                PrimitiveKind::Cylinder,
                cap_scale,
                cap_position,
                Shading::texture("versace"),
            )
            .rotated(0.0, 90.0, 0.0)
            .with_face(FaceVariant::CylinderFaces(CylinderFaces::TOP)),
        ],
    )
}

fn perfume_bottle() -> SceneObject {
    let cap_scale = Vec3::new(1.5, 0.75, 1.5);
    let cap_position = Vec3::new(-19.0, 4.37, 5.0);
    let gold_sides = [
        BoxSide::Bottom,
        BoxSide::Right,
        BoxSide::Left,
        BoxSide::Back,
        BoxSide::Front,
    ];

    let mut entries = vec![
        RenderEntry::placed(
            "perfume body",
            PrimitiveKind::Box,
            Vec3::new(1.75, 3.5, 1.75),
            Vec3::new(-19.0, 1.75, 5.0),
            Shading::texture("perfume"),
        ),
        RenderEntry::placed(
            "perfume label",
            PrimitiveKind::Plane,
            Vec3::new(0.65, 1.0, 1.25),
            Vec3::new(-19.0, 1.75, 5.9),
            Shading::color(1.0, 0.0, 0.0, 1.0),
        )
        .rotated(90.0, 0.0, 0.0),
        RenderEntry::placed(
            "perfume cap base",
            PrimitiveKind::Cylinder,
            Vec3::new(0.65, 0.5, 0.65),
            Vec3::new(-19.0, 3.5, 5.0),
            Shading::texture("gold"),
        ),
    ];

    entries.extend(gold_sides.into_iter().map(|side| {
        RenderEntry::placed(
            format!("perfume cap {:?}", side).to_lowercase(),
            PrimitiveKind::Box,
            cap_scale,
            cap_position,
            Shading::texture("gold"),
        )
        .with_face(FaceVariant::BoxSide(side))
    }));

    entries.push(
        RenderEntry::placed(
            "perfume cap top",
            PrimitiveKind::Box,
            cap_scale,
            cap_position,
            Shading::texture("versace"),
        )
        .with_face(FaceVariant::BoxSide(BoxSide::Top)),
    );

    SceneObject::new("perfume bottle", entries)
}

fn itinerary() -> SceneObject {
    let (r, g, b, a) = DARK_GREEN;

    SceneObject::new(
        "itinerary",
        vec![
            RenderEntry::placed(
                "itinerary card",
                PrimitiveKind::Box,
                Vec3::new(22.0, 0.1, 11.0),
                Vec3::new(-18.0, 0.1, -5.0),
                Shading::color(1.0, 1.0, 1.0, 1.0),
            )
            .rotated(0.0, -60.0, 0.0),
            RenderEntry::placed(
                "itinerary ring",
                PrimitiveKind::Torus,
                Vec3::new(1.5, 1.5, 0.75),
                Vec3::new(-22.25, 0.3, -12.75),
                Shading::color(r, g, b, a),
            )
            .rotated(90.0, 0.0, 0.0),
            RenderEntry::placed(
                "itinerary leaf motif",
                PrimitiveKind::HalfSphere,
                Vec3::new(1.6, 0.3, 1.6),
                Vec3::new(-22.25, 0.0, -12.75),
                Shading::color(r, g, b, a),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_order() {
        let names: Vec<String> = tabletop_scene().into_iter().map(|object| object.name).collect();
        assert_eq!(
            names,
            [
                "table",
                "cologne bottle",
                "perfume bottle",
                "itinerary",
                "necklace box",
                "ring box",
                "white vow book",
                "brown vow book",
            ]
        );
    }

    #[test]
    fn test_placeholders_are_empty() {
        let scene = tabletop_scene();
        let empty: Vec<&str> = scene
            .iter()
            .filter(|object| object.is_empty())
            .map(|object| object.name.as_str())
            .collect();
        assert_eq!(empty, ["necklace box", "ring box", "white vow book", "brown vow book"]);
    }

    #[test]
    fn test_entry_counts() {
        let counts: Vec<usize> = tabletop_scene().iter().map(|object| object.entries.len()).collect();
        assert_eq!(counts, [1, 5, 9, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn test_faces_match_primitives() {
        for object in tabletop_scene() {
            for entry in &object.entries {
                assert!(entry.face.applies_to(entry.primitive), "{}", entry.label);
            }
        }
    }

    #[test]
    fn test_perfume_cap_top_drawn_last_with_versace() {
        let perfume = perfume_bottle();
        let last = perfume.entries.last().unwrap();
        assert_eq!(last.face, FaceVariant::BoxSide(BoxSide::Top));
        assert_eq!(last.shading, Shading::texture("versace"));

        let gold_sides = perfume.entries[3..8]
            .iter()
            .filter(|entry| entry.shading == Shading::texture("gold"))
            .count();
        assert_eq!(gold_sides, 5);
    }

    #[test]
    fn test_scene_uses_configured_textures() {
        assert_eq!(
            texture_tags(&tabletop_scene()),
            ["marble", "blue_glass", "versace", "gold", "perfume"]
        );
    }
}
