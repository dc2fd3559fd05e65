//! Keyframe Animation Tests
//!
//! Tests for:
//! - Pose sampling at segment boundaries (implicit rest pose, clamping)
//! - Linear translation/rotation interpolation
//! - Geometric (constant-relative-rate) scale interpolation
//! - Loop restart behavior of AnimationPlayer
//! - Keyframe sequence validation errors
//! - Pose matrix composition order (translate, rotate XYZ, scale)

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::Vec3;

use glade::animation::{AnimationPlayer, KeyframeAnimation, Pose};
use glade::document::KeyframeDecl;
use glade::errors::SceneError;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn keyframe(instant_ms: f64, translate: Vec3, rotation: Vec3, scale: Vec3) -> KeyframeDecl {
    KeyframeDecl {
        instant_ms,
        translate,
        rotation,
        scale,
    }
}

fn still(instant_ms: f64) -> KeyframeDecl {
    keyframe(instant_ms, Vec3::ZERO, Vec3::ZERO, Vec3::ONE)
}

// ============================================================================
// Segment Boundaries
// ============================================================================

#[test]
fn pose_at_zero_is_identity() {
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(
            1000.0,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(PI, 0.0, 0.0),
            Vec3::splat(3.0),
        )],
        false,
    )
    .unwrap();

    assert_eq!(clip.sample(0.0), Pose::IDENTITY);
}

#[test]
fn pose_at_last_instant_is_final_keyframe() {
    let target = keyframe(
        2000.0,
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(0.0, FRAC_PI_2, 0.0),
        Vec3::new(2.0, 1.0, 0.5),
    );
    for is_loop in [false, true] {
        let clip = KeyframeAnimation::new("a", &[still(1000.0), target], is_loop).unwrap();
        let pose = clip.sample(2000.0);
        assert!(approx_vec(pose.translate, target.translate));
        assert!(approx_vec(pose.rotation, target.rotation));
        assert!(approx_vec(pose.scale, target.scale));
    }
}

#[test]
fn pose_clamps_beyond_last_instant() {
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(
            1000.0,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::ONE,
        )],
        false,
    )
    .unwrap();

    let pose = clip.sample(10_000.0);
    assert!(approx_vec(pose.translate, Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn negative_elapsed_clamps_to_rest_pose() {
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(1000.0, Vec3::X, Vec3::ZERO, Vec3::ONE)],
        false,
    )
    .unwrap();

    assert_eq!(clip.sample(-50.0), Pose::IDENTITY);
}

// ============================================================================
// Linear Interpolation: Translation & Rotation
// ============================================================================

#[test]
fn translation_lerps_from_rest_pose_before_first_keyframe() {
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(1000.0, Vec3::new(4.0, -2.0, 0.0), Vec3::ZERO, Vec3::ONE)],
        false,
    )
    .unwrap();

    let pose = clip.sample(500.0);
    assert!(approx_vec(pose.translate, Vec3::new(2.0, -1.0, 0.0)));
}

#[test]
fn translation_lerps_between_interior_keyframes() {
    let clip = KeyframeAnimation::new(
        "a",
        &[
            still(1000.0),
            keyframe(2000.0, Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
        ],
        false,
    )
    .unwrap();

    let pose = clip.sample(1500.0);
    assert!(approx_vec(pose.translate, Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn rotation_lerps_per_axis() {
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(1000.0, Vec3::ZERO, Vec3::new(PI, FRAC_PI_2, 0.0), Vec3::ONE)],
        false,
    )
    .unwrap();

    let pose = clip.sample(500.0);
    assert!(approx(pose.rotation.x, FRAC_PI_2));
    assert!(approx(pose.rotation.y, FRAC_PI_2 / 2.0));
    assert!(approx(pose.rotation.z, 0.0));
}

#[test]
fn pose_at_interior_keyframe_is_exact() {
    let mid = keyframe(1000.0, Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, Vec3::splat(2.0));
    let clip = KeyframeAnimation::new(
        "a",
        &[
            mid,
            keyframe(3000.0, Vec3::new(9.0, 9.0, 9.0), Vec3::ZERO, Vec3::splat(8.0)),
        ],
        false,
    )
    .unwrap();

    let pose = clip.sample(1000.0);
    assert!(approx_vec(pose.translate, mid.translate));
    assert!(approx_vec(pose.scale, mid.scale));
}

// ============================================================================
// Geometric Scale Interpolation
// ============================================================================

#[test]
fn scale_is_geometric_not_linear() {
    // 1 -> 4 over one segment: the temporal midpoint must be the geometric
    // mean 2, not the linear midpoint 2.5.
    let clip = KeyframeAnimation::new(
        "a",
        &[
            still(1000.0),
            keyframe(2000.0, Vec3::ZERO, Vec3::ZERO, Vec3::splat(4.0)),
        ],
        false,
    )
    .unwrap();

    let pose = clip.sample(1500.0);
    assert!(
        approx_vec(pose.scale, Vec3::splat(2.0)),
        "expected geometric midpoint 2, got {:?}",
        pose.scale
    );
}

#[test]
fn scale_is_geometric_before_first_keyframe() {
    // Implicit rest scale 1 -> 9: midpoint is 3.
    let clip = KeyframeAnimation::new(
        "a",
        &[keyframe(1000.0, Vec3::ZERO, Vec3::ZERO, Vec3::splat(9.0))],
        false,
    )
    .unwrap();

    let pose = clip.sample(500.0);
    assert!(approx_vec(pose.scale, Vec3::splat(3.0)));
}

#[test]
fn scale_interpolates_independently_per_axis() {
    let clip = KeyframeAnimation::new(
        "a",
        &[
            still(1000.0),
            keyframe(2000.0, Vec3::ZERO, Vec3::ZERO, Vec3::new(4.0, 1.0, 0.25)),
        ],
        false,
    )
    .unwrap();

    let pose = clip.sample(1500.0);
    assert!(approx(pose.scale.x, 2.0));
    assert!(approx(pose.scale.y, 1.0));
    assert!(approx(pose.scale.z, 0.5));
}

#[test]
fn shrinking_scale_is_geometric_too() {
    // 1 -> 1/16: midpoint 1/4.
    let clip = KeyframeAnimation::new(
        "a",
        &[
            still(1000.0),
            keyframe(2000.0, Vec3::ZERO, Vec3::ZERO, Vec3::splat(0.0625)),
        ],
        false,
    )
    .unwrap();

    let pose = clip.sample(1500.0);
    assert!(approx_vec(pose.scale, Vec3::splat(0.25)));
}

// ============================================================================
// Player: Loop Restart & Clamping
// ============================================================================

fn looping_clip() -> Arc<KeyframeAnimation> {
    Arc::new(
        KeyframeAnimation::new(
            "loop",
            &[
                keyframe(1000.0, Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
                keyframe(2000.0, Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
            ],
            true,
        )
        .unwrap(),
    )
}

#[test]
fn player_latches_start_on_first_sample() {
    let mut player = AnimationPlayer::new(looping_clip());
    // First sample at an arbitrary wall-clock instant is elapsed = 0.
    assert_eq!(player.sample_at(12_345.0), Pose::IDENTITY);
}

#[test]
fn player_holds_final_pose_at_exact_duration() {
    let mut player = AnimationPlayer::new(looping_clip());
    player.sample_at(0.0);
    let pose = player.sample_at(2000.0);
    assert!(approx_vec(pose.translate, Vec3::new(6.0, 0.0, 0.0)));
}

#[test]
fn looping_player_restarts_cycle() {
    // Pose just past the end equals the pose just after a fresh start.
    let mut wrapped = AnimationPlayer::new(looping_clip());
    wrapped.sample_at(0.0);
    let after_wrap = wrapped.sample_at(2000.0 + 250.0);

    let mut fresh = AnimationPlayer::new(looping_clip());
    fresh.sample_at(0.0);
    let early = fresh.sample_at(250.0);

    assert!(approx_vec(after_wrap.translate, early.translate));
    assert!(approx_vec(after_wrap.scale, early.scale));
}

#[test]
fn looping_player_handles_multiple_skipped_cycles() {
    let mut player = AnimationPlayer::new(looping_clip());
    player.sample_at(0.0);
    // 5 full cycles plus 500ms.
    let pose = player.sample_at(5.0 * 2000.0 + 500.0);

    let mut reference = AnimationPlayer::new(looping_clip());
    reference.sample_at(0.0);
    let expected = reference.sample_at(500.0);

    assert!(approx_vec(pose.translate, expected.translate));
}

#[test]
fn non_looping_player_clamps_forever() {
    let clip = Arc::new(
        KeyframeAnimation::new(
            "once",
            &[keyframe(1000.0, Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE)],
            false,
        )
        .unwrap(),
    );
    let mut player = AnimationPlayer::new(clip);
    player.sample_at(0.0);
    for instant in [1000.0, 1500.0, 60_000.0] {
        let pose = player.sample_at(instant);
        assert!(approx_vec(pose.translate, Vec3::new(3.0, 0.0, 0.0)));
    }
}

#[test]
fn player_reset_restarts_from_instant() {
    let mut player = AnimationPlayer::new(looping_clip());
    player.sample_at(0.0);
    player.sample_at(1500.0);

    player.reset(2000.0);
    assert_eq!(player.sample_at(2000.0), Pose::IDENTITY);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn empty_sequence_is_malformed() {
    let err = KeyframeAnimation::new("bad", &[], false).unwrap_err();
    assert!(matches!(err, SceneError::MalformedKeyframeSequence { .. }));
}

#[test]
fn non_increasing_instants_are_malformed() {
    let err = KeyframeAnimation::new("bad", &[still(1000.0), still(1000.0)], false).unwrap_err();
    assert!(matches!(err, SceneError::MalformedKeyframeSequence { .. }));
}

#[test]
fn first_instant_at_zero_is_malformed() {
    let err = KeyframeAnimation::new("bad", &[still(0.0)], false).unwrap_err();
    assert!(matches!(err, SceneError::MalformedKeyframeSequence { .. }));
}

#[test]
fn non_positive_scale_is_malformed() {
    let err = KeyframeAnimation::new(
        "bad",
        &[keyframe(1000.0, Vec3::ZERO, Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0))],
        false,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::MalformedKeyframeSequence { .. }));
}

// ============================================================================
// Pose Matrix Composition
// ============================================================================

#[test]
fn pose_matrix_applies_scale_rotate_translate_to_geometry() {
    // T(1,0,0) * Rz(90deg) * S(2,1,1): a point at +X scales to (2,0,0),
    // rotates to (0,2,0), then translates to (1,2,0).
    let pose = Pose {
        translate: Vec3::new(1.0, 0.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
        scale: Vec3::new(2.0, 1.0, 1.0),
    };
    let p = pose.matrix().transform_point3(Vec3::X);
    assert!(approx_vec(p, Vec3::new(1.0, 2.0, 0.0)));
}

#[test]
fn identity_pose_matrix_is_identity() {
    assert_eq!(Pose::IDENTITY.matrix(), glam::Mat4::IDENTITY);
}

#[test]
fn rotation_order_is_x_then_y_then_z() {
    // Ry(90deg) then Rx(90deg) applied to +Z: with M = Rx * Ry, the point
    // first rotates about Y (+Z -> +X), then about X (+X stays +X).
    let pose = Pose {
        translate: Vec3::ZERO,
        rotation: Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0),
        scale: Vec3::ONE,
    };
    let p = pose.matrix().transform_point3(Vec3::Z);
    assert!(approx_vec(p, Vec3::X));
}
