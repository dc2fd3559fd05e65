//! Keyframe sequences and pose sampling.
//!
//! A [`KeyframeAnimation`] owns a validated, strictly time-ordered sequence
//! of pose samples and exposes pure sampling: given an elapsed time it
//! returns the interpolated [`Pose`]. Translation and rotation interpolate
//! linearly per axis; scale interpolates geometrically, so that doubling in
//! size proceeds at the same perceptual rate regardless of absolute scale.
//!
//! The geometric law works in frame ticks: for a segment of duration `d`
//! seconds, `ticks = d * 30` and each axis has a per-tick ratio
//! `r = (scale_next / scale_prev)^(1 / ticks)`; at fractional progress `t`
//! the instantaneous scale is `scale_prev * r^(t * ticks)`. Both quantities
//! are precomputed at construction.

use glam::Vec3;

use crate::animation::pose::Pose;
use crate::document::KeyframeDecl;
use crate::errors::{Result, SceneError};

/// Frame ticks per second used by the geometric scale law.
const TICKS_PER_SECOND: f64 = 30.0;

/// One validated keyframe plus the precomputed data of the segment that
/// ends at it.
#[derive(Debug, Clone, Copy)]
pub struct Keyframe {
    /// Milliseconds from animation start. Strictly increasing.
    pub instant: f64,
    pub translate: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Duration of the segment ending here, in frame ticks.
    ticks: f32,
    /// Per-axis, per-tick geometric scale ratio of that segment.
    ratio: Vec3,
}

/// An immutable keyframe sequence with a loop flag.
///
/// Owned by the animation resource table and shared read-only by every
/// component that references it; per-component playback state lives in
/// [`crate::animation::AnimationPlayer`].
#[derive(Debug, Clone)]
pub struct KeyframeAnimation {
    id: String,
    keyframes: Vec<Keyframe>,
    is_loop: bool,
}

impl KeyframeAnimation {
    /// Validates and precomputes a keyframe sequence.
    ///
    /// Fails with [`SceneError::MalformedKeyframeSequence`] on an empty
    /// sequence, a first instant at or before zero, non-increasing
    /// instants, or a non-positive scale component (the geometric law is
    /// undefined for those).
    pub fn new(id: &str, decls: &[KeyframeDecl], is_loop: bool) -> Result<Self> {
        let malformed = |reason: String| SceneError::MalformedKeyframeSequence {
            id: id.to_owned(),
            reason,
        };

        if decls.is_empty() {
            return Err(malformed("no keyframes declared".into()));
        }

        let mut keyframes = Vec::with_capacity(decls.len());
        let mut prev_instant = 0.0_f64;
        let mut prev_scale = Vec3::ONE;

        for decl in decls {
            if decl.instant_ms <= prev_instant {
                return Err(malformed(format!(
                    "instant {}ms not after {}ms",
                    decl.instant_ms, prev_instant
                )));
            }
            if decl.scale.min_element() <= 0.0 {
                return Err(malformed(format!(
                    "non-positive scale {:?} at {}ms",
                    decl.scale, decl.instant_ms
                )));
            }

            let ticks = ((decl.instant_ms - prev_instant) / 1000.0 * TICKS_PER_SECOND) as f32;
            let ratio = Vec3::new(
                (decl.scale.x / prev_scale.x).powf(1.0 / ticks),
                (decl.scale.y / prev_scale.y).powf(1.0 / ticks),
                (decl.scale.z / prev_scale.z).powf(1.0 / ticks),
            );

            keyframes.push(Keyframe {
                instant: decl.instant_ms,
                translate: decl.translate,
                rotation: decl.rotation,
                scale: decl.scale,
                ticks,
                ratio,
            });
            prev_instant = decl.instant_ms;
            prev_scale = decl.scale;
        }

        Ok(Self {
            id: id.to_owned(),
            keyframes,
            is_loop,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// The instant of the last keyframe, in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.keyframes.last().map_or(0.0, |k| k.instant)
    }

    /// Samples the pose at `elapsed` milliseconds from animation start.
    ///
    /// Pure: the same `elapsed` always yields the same pose. Loop handling
    /// belongs to the player, which maps wall-clock instants into `[0,
    /// duration]` before calling this.
    ///
    /// - Before the first keyframe, interpolates from the implicit rest
    ///   pose ([`Pose::IDENTITY`]) toward keyframe 0.
    /// - At or beyond the last keyframe, returns the final pose exactly.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> Pose {
        let last = self.keyframes.last().expect("validated non-empty");
        if elapsed >= last.instant {
            return Pose {
                translate: last.translate,
                rotation: last.rotation,
                scale: last.scale,
            };
        }
        let elapsed = elapsed.max(0.0);

        // First index with instant > elapsed; the segment ends there.
        let next = self
            .keyframes
            .partition_point(|k| k.instant <= elapsed);
        let target = &self.keyframes[next];

        let (from_pose, seg_start) = if next == 0 {
            (Pose::IDENTITY, 0.0)
        } else {
            let k = &self.keyframes[next - 1];
            (
                Pose {
                    translate: k.translate,
                    rotation: k.rotation,
                    scale: k.scale,
                },
                k.instant,
            )
        };

        let t = ((elapsed - seg_start) / (target.instant - seg_start)) as f32;

        Pose {
            translate: from_pose.translate.lerp(target.translate, t),
            rotation: from_pose.rotation.lerp(target.rotation, t),
            scale: geometric_scale(from_pose.scale, target, t),
        }
    }
}

/// `base * r^(t * n)`, per axis, using the target keyframe's precomputed
/// segment data.
fn geometric_scale(base: Vec3, target: &Keyframe, t: f32) -> Vec3 {
    let k = t * target.ticks;
    Vec3::new(
        base.x * target.ratio.x.powf(k),
        base.y * target.ratio.y.powf(k),
        base.z * target.ratio.z.powf(k),
    )
}
