//! Component graph: resolved scene structure.
//!
//! - [`Component`]: transform + material list + texture binding + children
//! - [`SceneGraph`]: slotmap arena of components plus animation players,
//!   built with two-pass reference resolution from a [`crate::document::SceneDocument`]

pub mod component;
pub mod graph;

pub use component::{
    AnimationKey, Child, Component, ComponentKey, MaterialBinding, TextureBinding,
};
pub use graph::SceneGraph;
