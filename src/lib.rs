//! phanim is a small authoring library for 2D animated scenes.
//!
//! A scene is an ordered list of typed drawable objects. Each object receives a unique id
//! from an [`IdAllocator`] when it is constructed; the [`Scene`] is then written out as a
//! deterministic, human-readable `.phanim` text file for a separate playback tool.
//!
//! # Pipeline overview
//!
//! 1. **Construct**: `IdAllocator + attributes -> Line | Circle | Rect` (ids assigned here)
//! 2. **Collect**: `Scene::add_drawable` in the order objects should be written
//! 3. **Serialize**: [`save`] / [`write_scene`] / [`render_scene`]
//!
//! # File format (v0)
//!
//! ```text
//! %DATA_SECTION%
//! Line {
//!     id: 0,
//!     start: (100.0, 100.0),
//!     end: (500.0, 500.0),
//!     stroke_width: 1.0,
//!     stroke_color: (0.0, 0.0, 0.0, 0.0)
//! }
//! ```
//!
//! The format has no version marker, checksum or animation section. [`Scene::anims`] is
//! reserved and always empty.
//!
//! # Example
//!
//! ```
//! use phanim::{IdAllocator, Line, Scene, Vec2, render_scene};
//!
//! let ids = IdAllocator::new();
//! let mut scene = Scene::new();
//! scene.add_drawable(Line::new(&ids, Vec2::new(100.0, 100.0), Vec2::new(500.0, 500.0)));
//!
//! let text = render_scene(&scene);
//! assert!(text.starts_with("%DATA_SECTION%\nLine {\n    id: 0,\n"));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod drawable;
mod foundation;
mod identity;
mod scene;
mod serialize;

pub use drawable::circle::Circle;
pub use drawable::line::Line;
pub use drawable::model::{DEFAULT_STROKE_WIDTH, Drawable, Field, FieldValue};
pub use drawable::rect::Rect;
pub use foundation::core::{COLOR_BLANK, Color, Vec2};
pub use foundation::error::{PhanimError, PhanimResult};
pub use identity::allocator::{IdAllocator, ObjectId};
pub use scene::model::{AnimRecord, Scene};
pub use serialize::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use serialize::save::{
    DEFAULT_OUTPUT_PATH, FILE_EXTENSION, SaveOptions, ensure_parent_dir, save, save_with,
};
pub use serialize::writer::{DATA_SECTION_MARKER, render_drawable, render_scene, write_scene};
