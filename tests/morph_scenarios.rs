//! End-to-end morphing scenarios.
//!
//! These tests drive the public API the way the frame loop does: generate
//! layouts, run the driver at a fixed 60 fps step through mode switches,
//! and feed scripted landmarks through the gesture pipeline.

use arbor::gesture::{landmark, LANDMARK_COUNT};
use arbor::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

/// A synthetic hand: four fingers laid out upward from the wrist. `reach`
/// scales how far each tip sits beyond its PIP joint (negative = curled),
/// `pinch_gap` is the thumb-to-index-tip distance.
fn hand(reach: f32, pinch_gap: f32) -> HandFrame {
    let wrist = Vec2::new(0.5, 0.8);
    let mut points = [wrist; LANDMARK_COUNT];
    for (f, (&tip, &pip)) in landmark::FINGER_TIPS
        .iter()
        .zip(&landmark::FINGER_PIPS)
        .enumerate()
    {
        let x = 0.4 + f as f32 * 0.06;
        points[pip] = Vec2::new(x, 0.5);
        points[tip] = Vec2::new(x, 0.5 - reach);
    }
    points[landmark::THUMB_TIP] = points[landmark::INDEX_TIP] + Vec2::new(pinch_gap, 0.0);
    points[landmark::MIDDLE_MCP] = Vec2::new(0.5, 0.6);
    HandFrame::new(points)
}

#[test]
fn tree_dispersed_tree_converges_within_tolerance() {
    let config = LayoutConfig::default();
    let layouts = generate(&config, 3, 21);
    let tree_targets: Vec<Vec3> = layouts.tree.iter().map(|p| p.position).collect();

    let mut out = FrameOutput::for_layouts(&layouts, 3);
    let mut driver = AnimationDriver::new(layouts, DriverConfig::default());

    let mut elapsed = 0.0;
    let mut run = |driver: &mut AnimationDriver, out: &mut FrameOutput, mode, seconds: f32| {
        for _ in 0..(seconds * 60.0) as usize {
            driver.tick(elapsed, DT, mode, out);
            elapsed += DT;
        }
    };

    run(&mut driver, &mut out, Mode::Tree, 3.0);
    run(&mut driver, &mut out, Mode::Dispersed, 3.0);
    // Five simulated seconds back in tree mode at 3/s damping.
    run(&mut driver, &mut out, Mode::Tree, 5.0);

    for (live, target) in driver.live().iter().zip(&tree_targets) {
        assert!(
            (live.position - *target).length() < 1e-3,
            "particle did not reconverge: {} vs {}",
            live.position,
            target
        );
    }
}

#[test]
fn layout_properties_hold_for_various_populations() {
    for (n, p) in [(400u32, 3usize), (50, 50), (10, 1), (128, 0)] {
        let config = LayoutConfig {
            particle_count: n,
            ..LayoutConfig::default()
        };
        let layouts = generate(&config, p, 5);
        assert_eq!(layouts.tree.len(), n as usize);
        assert_eq!(layouts.dispersed.len(), n as usize);

        let slots = p.max(1).min(n as usize);
        for (i, particle) in layouts.tree.iter().enumerate() {
            if i < slots {
                assert_eq!(particle.archetype, Archetype::Photo(i));
            } else {
                assert!(!matches!(particle.archetype, Archetype::Photo(_)));
            }
        }
    }
}

#[test]
fn empty_population_is_a_noop() {
    let config = LayoutConfig {
        particle_count: 0,
        ..LayoutConfig::default()
    };
    let layouts = generate(&config, 0, 1);
    let mut out = FrameOutput::for_layouts(&layouts, 0);
    let mut driver = AnimationDriver::new(layouts, DriverConfig::default());
    driver.tick(0.0, DT, Mode::Tree, &mut out);
    assert!(out.orbs.is_empty());
    assert!(out.photos.is_empty());
}

#[test]
fn shrunken_photo_population_skips_writes() {
    let layouts = generate(&LayoutConfig::default(), 6, 9);
    // Only 3 planes loaded; requests for indices 3..6 must be dropped.
    let mut out = FrameOutput::for_layouts(&layouts, 3);
    let mut driver = AnimationDriver::new(layouts, DriverConfig::default());
    driver.tick(0.0, DT, Mode::Dispersed, &mut out);
    assert_eq!(out.photos.len(), 3);
}

#[test]
fn scripted_landmarks_drive_the_full_gesture_pipeline() {
    let mut source = ScriptedSource::new(vec![
        (0.5, Some(hand(-0.1, 0.3))), // fist
        (2.0, Some(hand(0.2, 0.3))),  // open
        (3.5, Some(hand(0.2, 0.01))), // pinch
        (5.0, None),                  // hand leaves the frame
    ]);
    let mut state = AppState::new();
    state.images = vec!["a.png".into(), "b.png".into()];
    let mut rng = SmallRng::seed_from_u64(3);

    let mut elapsed = 0.0;
    let mut modes = Vec::new();
    for _ in 0..(6.0 / DT) as usize {
        let frame = source.poll(elapsed);
        state.observe(frame.as_ref(), &mut rng);
        elapsed += DT;
        if modes.last() != Some(&state.mode) {
            modes.push(state.mode);
        }
    }

    assert_eq!(modes, vec![Mode::Tree, Mode::Dispersed, Mode::Zoomed]);
    // The pinch focused one of the two photos, and losing the hand
    // afterwards changed nothing.
    assert!(state.focused_image.unwrap() < 2);
    assert_eq!(state.mode, Mode::Zoomed);
    assert_eq!(state.gesture, Gesture::None);
}

#[test]
fn damping_is_stable_at_the_target() {
    let layouts = generate(&LayoutConfig::default(), 1, 2);
    let dispersed: Vec<Vec3> = layouts.dispersed.iter().map(|p| p.position).collect();
    let mut out = FrameOutput::for_layouts(&layouts, 1);
    let mut driver = AnimationDriver::new(layouts, DriverConfig::default());

    // Live state is seeded from the dispersed layout, so a dispersed tick
    // at the fixed point must not move anything.
    driver.tick(0.0, DT, Mode::Zoomed, &mut out);
    for (live, target) in driver.live().iter().zip(&dispersed) {
        assert!((live.position - *target).length() < 1e-6);
    }
}
