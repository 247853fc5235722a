use backdrop::color::Hsl;
use backdrop::surface::{DrawCommand, RecordingSurface, Surface};
use glam::{UVec2, Vec2};
use pretty_assertions::assert_eq;

#[test]
fn recording_surface_tracks_size() {
    let mut surface = RecordingSurface::new(UVec2::new(10, 10));

    surface.resize(UVec2::new(640, 480)).unwrap();

    assert_eq!(surface.size(), UVec2::new(640, 480));
    assert_eq!(surface.commands(), &[DrawCommand::Resize(UVec2::new(640, 480))]);
}

#[test]
fn restore_without_save_keeps_depth_at_zero() {
    let mut surface = RecordingSurface::default();

    surface.save();
    surface.restore();
    surface.restore();

    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn take_commands_drains_but_keeps_state() {
    let mut surface = RecordingSurface::new(UVec2::new(100, 100));
    surface.save();
    surface.set_fill_color(Hsl::new(1.0, 2.0, 3.0));
    surface.fill_rect(Vec2::ZERO, Vec2::ONE).unwrap();

    let taken = surface.take_commands();

    assert_eq!(taken.len(), 3);
    assert_eq!(surface.commands().len(), 0);
    assert_eq!(surface.save_depth(), 1);
    assert_eq!(surface.fill_count(), 0);
}
