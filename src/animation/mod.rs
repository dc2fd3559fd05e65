//! Keyframe animation engine.
//!
//! - [`KeyframeAnimation`]: validated, shared keyframe sequence
//! - [`Pose`]: interpolated translate/rotate/scale + matrix form
//! - [`AnimationPlayer`]: per-clip playback state (loop restart tracking)

pub mod keyframe;
pub mod player;
pub mod pose;

pub use keyframe::KeyframeAnimation;
pub use player::AnimationPlayer;
pub use pose::Pose;
