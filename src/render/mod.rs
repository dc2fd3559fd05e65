//! Render driver and its collaborator contracts.
//!
//! - [`Primitive`] / [`RenderBackend`]: external collaborator traits
//! - [`MatrixStack`]: scoped cumulative-transform save/restore
//! - [`driver::render_frame`]: the once-per-frame inherited-state walk

pub mod backend;
pub mod driver;
pub mod matrix_stack;

pub use backend::{Primitive, RenderBackend};
pub use driver::{render_frame, FrameContext};
pub use matrix_stack::MatrixStack;
