//! Animation playback state.

use std::sync::Arc;

use glam::Mat4;

use crate::animation::keyframe::KeyframeAnimation;
use crate::animation::pose::Pose;

/// Playback state for one animation: the shared clip plus the wall-clock
/// instant the current cycle started at.
///
/// The clip itself stays read-only; the only mutation a player ever
/// performs is on its own `start_instant` when a looping clip wraps.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    clip: Arc<KeyframeAnimation>,
    /// Latched on the first pose request so animations begin relative to
    /// the first rendered frame rather than process start.
    start_instant: Option<f64>,
}

impl AnimationPlayer {
    #[must_use]
    pub fn new(clip: Arc<KeyframeAnimation>) -> Self {
        Self {
            clip,
            start_instant: None,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<KeyframeAnimation> {
        &self.clip
    }

    /// Restarts the cycle at `instant`, e.g. when the animation clock is
    /// rewound externally.
    pub fn reset(&mut self, instant: f64) {
        self.start_instant = Some(instant);
    }

    /// Computes the pose matrix for the given wall-clock instant (ms).
    ///
    /// Non-looping clips clamp at the final keyframe pose. Looping clips
    /// advance `start_instant` by whole cycle lengths once `elapsed`
    /// exceeds the duration, so `elapsed` lands in `(0, duration]`: the
    /// pose just past the end equals the pose just after a fresh start,
    /// and the pose exactly at the end is the final keyframe's.
    pub fn pose_matrix(&mut self, current_instant: f64) -> Mat4 {
        self.sample_at(current_instant).matrix()
    }

    /// Same as [`Self::pose_matrix`] but returns the raw pose.
    pub fn sample_at(&mut self, current_instant: f64) -> Pose {
        let start = *self.start_instant.get_or_insert(current_instant);
        let mut elapsed = (current_instant - start).max(0.0);

        let duration = self.clip.duration();
        if self.clip.is_loop() && elapsed > duration && duration > 0.0 {
            let cycles = (elapsed / duration).ceil() - 1.0;
            self.start_instant = Some(start + cycles * duration);
            elapsed -= cycles * duration;
        }

        self.clip.sample(elapsed)
    }
}
