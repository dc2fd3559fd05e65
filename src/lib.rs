#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! A declarative scene-graph rendering core.
//!
//! Takes an already-parsed scene document (cameras, lights and the format
//! grammar are external concerns), resolves its symbolic references into an
//! acyclic component graph, and walks that graph once per frame while
//! propagating inherited material, texture and transform state. Animated
//! nodes sample the keyframe engine; primitive leaves become draws issued
//! to a pluggable [`RenderBackend`].

pub mod animation;
pub mod document;
pub mod engine;
pub mod errors;
pub mod render;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{AnimationPlayer, KeyframeAnimation, Pose};
pub use document::{SceneDocument, SceneGlobals};
pub use engine::Engine;
pub use errors::{ResourceKind, Result, SceneError};
pub use render::{FrameContext, MatrixStack, Primitive, RenderBackend};
pub use resources::{Material, ResourceTable, Texture};
pub use scene::{Component, ComponentKey, SceneGraph};
pub use utils::Timer;
