use super::*;

#[test]
fn defaults_and_field_order() {
    let ids = IdAllocator::new();
    let r = Rect::new(
        &ids,
        Vec2::new(10.0, 20.0),
        Vec2::new(30.0, 40.0),
        Color::rgb(0.0, 1.0, 0.0),
    );
    assert_eq!(r.stroke_width, 1.0);
    assert_eq!(r.stroke_color, COLOR_BLANK);
    assert_eq!(r.kind_name(), "Rect");

    let names: Vec<&str> = r.fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        ["position", "size", "color", "stroke_width", "stroke_color"]
    );
}

#[test]
fn shares_id_sequence_with_other_kinds() {
    use crate::drawable::line::Line;

    let ids = IdAllocator::new();
    let l = Line::new(&ids, Vec2::ZERO, Vec2::ZERO);
    let r = Rect::new(&ids, Vec2::ZERO, Vec2::new(-1.0, -1.0), COLOR_BLANK);
    assert_eq!(l.id().get(), 0);
    assert_eq!(r.id().get(), 1);
    assert_eq!(r.size, Vec2::new(-1.0, -1.0));
}
