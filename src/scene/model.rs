use std::{path::Path, sync::Arc};

use crate::{drawable::model::Drawable, foundation::error::PhanimResult};

/// Reserved slot for animation records.
///
/// No animation kinds exist in format v0, so this type has no values and
/// [`Scene::anims`] is always empty. The serializer never writes an animation section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimRecord {}

/// Ordered collection of drawables making up one document.
///
/// Insertion order is emission order. The scene holds shared handles to objects that
/// already carry their ids; it never allocates ids itself.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Arc<dyn Drawable>>,
    anims: Vec<AnimRecord>,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable. No deduplication is performed.
    pub fn add_drawable<D: Drawable + 'static>(&mut self, obj: D) {
        self.add_shared(Arc::new(obj));
    }

    /// Append a shared handle. Adding the same handle twice writes it twice.
    pub fn add_shared(&mut self, obj: Arc<dyn Drawable>) {
        tracing::trace!(
            id = obj.id().get(),
            kind = obj.kind_name(),
            index = self.objects.len(),
            "added drawable"
        );
        self.objects.push(obj);
    }

    /// Drawables in insertion order.
    pub fn objects(&self) -> impl ExactSizeIterator<Item = &dyn Drawable> + '_ {
        self.objects.iter().map(|o| &**o)
    }

    /// Reserved animation records; always empty in this format version.
    pub fn anims(&self) -> &[AnimRecord] {
        &self.anims
    }

    /// Number of drawables, counting repeated insertions.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` when no drawable has been added.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Write this scene to `path` with default [`crate::SaveOptions`].
    pub fn save(&self, path: impl AsRef<Path>) -> PhanimResult<()> {
        crate::serialize::save::save(self, path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
