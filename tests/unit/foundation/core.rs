use super::*;

#[test]
fn blank_is_all_zero() {
    assert_eq!(COLOR_BLANK, Color::rgba(0.0, 0.0, 0.0, 0.0));
    assert_eq!(Color::default(), COLOR_BLANK);
}

#[test]
fn rgb_is_opaque() {
    assert_eq!(Color::rgb(0.2, 0.4, 0.6).a, 1.0);
}

#[test]
fn from_rgba8_maps_channel_extremes() {
    let c = Color::from_rgba8(0, 255, 0, 255);
    assert_eq!(c, Color::rgba(0.0, 1.0, 0.0, 1.0));

    let red = Color::from_rgba8(230, 41, 55, 0);
    assert!((red.r - 230.0 / 255.0).abs() < 1e-12);
    assert_eq!(red.a, 0.0);
}

#[test]
fn components_are_not_clamped() {
    let c: Color = [2.0, -1.0, 0.5, 7.0].into();
    assert_eq!(c.r, 2.0);
    assert_eq!(c.g, -1.0);
    assert_eq!(c.a, 7.0);
}
