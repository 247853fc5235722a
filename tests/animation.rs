use std::f32::consts::TAU;

use backdrop::animation::AnimationLoop;
use backdrop::config::{AnimationConfig, Band};
use backdrop::entity::Square;
use backdrop::error::{BackdropError, SurfaceError};
use backdrop::scheduler::{FixedTicks, RefreshScheduler, Scheduler};
use backdrop::surface::{DrawCommand, RecordingSurface, Surface};
use glam::{UVec2, Vec2};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{initialized, params, rng, viewport, FailingSurface};

fn assert_wrapped(animation: &AnimationLoop) {
    let viewport = animation.viewport();
    for square in animation.squares() {
        let extent = viewport.wrap_extent(square.size());
        let position = square.position();
        assert_that(&position.x).is_greater_than_or_equal_to(0.0);
        assert_that(&position.x).is_less_than(extent.x);
        assert_that(&position.y).is_greater_than_or_equal_to(0.0);
        assert_that(&position.y).is_less_than(extent.y);
        assert_that(&square.angle()).is_greater_than_or_equal_to(0.0);
        assert_that(&square.angle()).is_less_than(TAU);
    }
}

#[test]
fn initialize_sizes_surface_and_builds_default_collection() {
    let mut surface = RecordingSurface::new(UVec2::ZERO);
    let animation = AnimationLoop::initialize(&mut surface, viewport(), &AnimationConfig::default(), &mut rng()).unwrap();

    assert_eq!(surface.size(), UVec2::new(800, 600));
    assert_eq!(surface.commands(), &[DrawCommand::Resize(UVec2::new(800, 600))]);
    assert_eq!(animation.squares().len(), 22);
    assert_eq!(animation.ticks(), 0);
    assert_wrapped(&animation);
}

#[test]
fn initialize_draws_traits_from_configured_bands() {
    let config = AnimationConfig::default();
    let (animation, _) = initialized(&config);

    for square in animation.squares() {
        assert_that(&config.size.contains(square.size())).is_true();
        assert_that(&config.speed.contains(square.speed())).is_true();
        assert_that(&config.angular_momentum.contains(square.angular_momentum())).is_true();
        assert_that(&config.lightness.contains(square.color().lightness)).is_true();
        assert_eq!(square.color().hue, config.hue);
        assert_eq!(square.color().saturation, config.saturation);
    }
}

#[test]
fn initialize_is_deterministic_for_a_seed() {
    let config = AnimationConfig::default();
    let (first, _) = initialized(&config);
    let (second, _) = initialized(&config);

    assert_eq!(first.squares(), second.squares());
}

#[test]
fn initialize_rejects_invalid_config() {
    let config = AnimationConfig {
        size: Band::new(0.0, 10.0),
        ..AnimationConfig::default()
    };
    let mut surface = RecordingSurface::new(UVec2::ZERO);

    let result = AnimationLoop::initialize(&mut surface, viewport(), &config, &mut rng());

    assert!(matches!(result, Err(BackdropError::Config(_))));
    assert_that(&surface.commands().is_empty()).is_true();
}

#[test]
fn tick_clears_then_draws_each_square_before_updating_it() {
    let squares = vec![
        Square::new(Vec2::new(10.0, 20.0), 0.5, params(20.0, 1.0, 0.1), viewport()),
        Square::new(Vec2::new(300.0, 40.0), 1.0, params(30.0, 2.0, -0.2), viewport()),
    ];
    let mut animation = AnimationLoop::from_squares(viewport(), squares.clone());
    let mut surface = RecordingSurface::new(UVec2::new(800, 600));
    let mut scheduler = RefreshScheduler::new();

    animation.tick(&mut surface, &mut scheduler).unwrap();

    let mut expected = vec![DrawCommand::Clear {
        origin: Vec2::ZERO,
        extent: Vec2::new(800.0, 600.0),
    }];
    for square in &squares {
        let size = square.size();
        expected.extend([
            DrawCommand::Save,
            DrawCommand::Translate(square.position()),
            DrawCommand::Rotate(square.angle()),
            DrawCommand::SetFillColor(square.color()),
            DrawCommand::FillRect {
                origin: Vec2::splat(-size / 2.0),
                extent: Vec2::splat(size),
            },
            DrawCommand::Restore,
        ]);
    }
    assert_eq!(surface.commands(), expected.as_slice());
    assert_eq!(surface.save_depth(), 0);

    assert_eq!(animation.squares()[0].position(), Vec2::new(11.0, 21.0));
    assert_eq!(animation.squares()[1].position(), Vec2::new(302.0, 42.0));
    assert_that(&scheduler.is_pending()).is_true();
    assert_eq!(animation.ticks(), 1);
}

#[test]
fn wrap_invariants_hold_after_every_tick() {
    let (mut animation, mut surface) = initialized(&AnimationConfig::default());
    let mut scheduler = RefreshScheduler::new();

    for _ in 0..2000 {
        animation.tick(&mut surface, &mut scheduler).unwrap();
        assert_wrapped(&animation);
        surface.take_commands();
    }
}

#[test]
fn only_position_and_angle_change_across_ticks() {
    let (mut animation, mut surface) = initialized(&AnimationConfig::default());
    let before = animation.squares().to_vec();

    let mut scheduler = FixedTicks::new(750);
    animation.start(&mut scheduler);
    let ran = animation.drive(&mut surface, &mut scheduler).unwrap();

    assert_eq!(ran, 750);
    assert_eq!(animation.squares().len(), 22);
    for (old, new) in before.iter().zip(animation.squares()) {
        assert_eq!(old.params(), new.params());
    }
    assert_that(&before.iter().zip(animation.squares()).any(|(old, new)| old.position() != new.position())).is_true();
}

#[test]
fn square_starting_near_the_edge_wraps_past_zero() {
    let config = AnimationConfig::default();
    let (animation, mut surface) = initialized(&config);

    let mut squares = animation.squares().to_vec();
    squares[0] = Square::new(Vec2::new(799.0, 0.0), 0.0, params(20.0, 1.0, 0.0), viewport());
    let mut animation = AnimationLoop::from_squares(viewport(), squares);

    let mut scheduler = FixedTicks::new(1000);
    animation.start(&mut scheduler);
    let ran = animation.drive(&mut surface, &mut scheduler).unwrap();

    assert_eq!(ran, 1000);
    // (799 + 1000) mod (800 + 2 * 20) and (0 + 1000) mod (600 + 2 * 20)
    assert_eq!(animation.squares()[0].position(), Vec2::new(119.0, 360.0));
    assert_eq!(animation.squares().len(), 22);
}

#[test]
fn resize_changes_surface_only_until_next_update() {
    let (mut animation, mut surface) = initialized(&AnimationConfig::default());
    let positions = animation.squares().iter().map(Square::position).collect::<Vec<_>>();

    animation.resize(&mut surface, UVec2::new(200, 150)).unwrap();

    assert_eq!(surface.size(), UVec2::new(200, 150));
    assert_eq!(animation.viewport().size(), UVec2::new(200, 150));
    assert_eq!(animation.squares().iter().map(Square::position).collect::<Vec<_>>(), positions);

    animation.tick(&mut surface, &mut RefreshScheduler::new()).unwrap();
    assert_wrapped(&animation);
}

#[test]
fn resize_to_the_same_size_is_ignored() {
    let (mut animation, mut surface) = initialized(&AnimationConfig::default());

    animation.resize(&mut surface, UVec2::new(800, 600)).unwrap();

    assert_that(&surface.commands().is_empty()).is_true();
}

#[test]
fn tick_with_no_squares_clears_and_reschedules() {
    let config = AnimationConfig {
        entity_count: 0,
        ..AnimationConfig::default()
    };
    let (mut animation, mut surface) = initialized(&config);
    let mut scheduler = RefreshScheduler::new();

    animation.tick(&mut surface, &mut scheduler).unwrap();

    assert_eq!(
        surface.commands(),
        &[DrawCommand::Clear {
            origin: Vec2::ZERO,
            extent: Vec2::new(800.0, 600.0),
        }]
    );
    assert_eq!(scheduler.requests(), 1);
    assert_that(&scheduler.tick_due()).is_true();
}

#[test]
fn pump_waits_for_a_request() {
    let (mut animation, mut surface) = initialized(&AnimationConfig::default());
    let mut scheduler = RefreshScheduler::new();

    assert_that(&animation.pump(&mut surface, &mut scheduler).unwrap()).is_false();
    assert_eq!(animation.ticks(), 0);

    animation.start(&mut scheduler);
    assert_that(&animation.pump(&mut surface, &mut scheduler).unwrap()).is_true();
    assert_that(&animation.pump(&mut surface, &mut scheduler).unwrap()).is_true();
    assert_eq!(animation.ticks(), 2);
    assert_eq!(surface.fill_count(), 44);
}

fn three_squares() -> Vec<Square> {
    vec![
        Square::new(Vec2::new(10.0, 10.0), 0.0, params(20.0, 1.0, 0.1), viewport()),
        Square::new(Vec2::new(200.0, 100.0), 0.0, params(20.0, 1.0, 0.1), viewport()),
        Square::new(Vec2::new(400.0, 300.0), 0.0, params(20.0, 1.0, 0.1), viewport()),
    ]
}

#[test]
fn draw_failure_stops_the_tick_but_still_reschedules() {
    let before = three_squares();
    let mut animation = AnimationLoop::from_squares(viewport(), before.clone());
    let mut surface = FailingSurface::new(UVec2::new(800, 600), 2);
    let mut scheduler = RefreshScheduler::new();

    let result = animation.tick(&mut surface, &mut scheduler);

    assert!(matches!(result, Err(SurfaceError::Draw(_))));
    assert_that(&scheduler.is_pending()).is_true();
    assert_eq!(animation.ticks(), 1);
    assert_eq!(surface.inner.save_depth(), 0);

    let after = animation.squares();
    assert_eq!(after[0].position(), before[0].position() + Vec2::ONE);
    assert_eq!(after[1].position(), before[1].position());
    assert_eq!(after[1].angle(), before[1].angle());
    assert_eq!(after[2].position(), before[2].position());
}

#[test]
fn pump_returns_draw_failure_and_next_refresh_recovers() {
    let mut animation = AnimationLoop::from_squares(viewport(), three_squares());
    let mut surface = FailingSurface::new(UVec2::new(800, 600), 1);
    let mut scheduler = RefreshScheduler::new();
    animation.start(&mut scheduler);

    let result = animation.pump(&mut surface, &mut scheduler);
    assert!(matches!(result, Err(SurfaceError::Draw(_))));
    assert_that(&scheduler.is_pending()).is_true();

    assert_that(&animation.pump(&mut surface, &mut scheduler).unwrap()).is_true();
    assert_eq!(animation.ticks(), 2);
    assert_eq!(surface.inner.fill_count(), 3);
}
