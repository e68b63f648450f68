use crate::{
    foundation::math::Fnv1a64,
    scene::model::Scene,
    serialize::writer::{DATA_SECTION_MARKER, render_drawable},
};

/// Stable 64-bit hash of a scene's serialized bytes.
///
/// Two scenes with the same fingerprint produce the same file (up to hash collisions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SceneFingerprint(pub u64);

/// Hash exactly the bytes [`crate::render_scene`] would produce, without building the
/// whole document in memory.
pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(DATA_SECTION_MARKER.as_bytes());
    h.write_bytes(b"\n");
    for obj in scene.objects() {
        h.write_bytes(render_drawable(obj).as_bytes());
    }
    SceneFingerprint(h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/fingerprint.rs"]
mod tests;
