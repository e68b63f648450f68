use std::io::{self, Write};

use crate::{drawable::model::Drawable, scene::model::Scene};

/// First line of every scene file.
pub const DATA_SECTION_MARKER: &str = "%DATA_SECTION%";

const INDENT: &str = "    ";

/// Render one drawable as its canonical block.
///
/// ```text
/// Line {
///     id: 0,
///     start: (100.0, 100.0),
///     ...
/// }
/// ```
///
/// The id always comes first, then [`Drawable::fields`] in order. Fields are separated
/// by `,\n` (no trailing comma) and the closing brace is followed by a single newline.
pub fn render_drawable(obj: &dyn Drawable) -> String {
    let mut out = String::new();
    out.push_str(obj.kind_name());
    out.push_str(" {\n");
    out.push_str(&format!("{INDENT}id: {}", obj.id()));
    for field in obj.fields() {
        out.push_str(&format!(",\n{INDENT}{}: {}", field.name, field.value));
    }
    out.push_str("\n}\n");
    out
}

/// Render a whole scene in memory. Byte-identical to what [`write_scene`] streams.
pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str(DATA_SECTION_MARKER);
    out.push('\n');
    for obj in scene.objects() {
        out.push_str(&render_drawable(obj));
    }
    out
}

/// Stream a scene to `out`: the section marker line, then every drawable in insertion
/// order. Animation records are not written in this format version.
pub fn write_scene<W: Write + ?Sized>(scene: &Scene, out: &mut W) -> io::Result<()> {
    out.write_all(DATA_SECTION_MARKER.as_bytes())?;
    out.write_all(b"\n")?;
    for obj in scene.objects() {
        out.write_all(render_drawable(obj).as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/writer.rs"]
mod tests;
