//! External collaborator traits: primitives and the rendering backend.
//!
//! The core never touches GPU state. It walks the component graph and
//! narrates the frame to a [`RenderBackend`]; concrete shapes implement
//! [`Primitive`] and own their tessellated buffers.

use glam::Mat4;

use crate::document::SceneGlobals;
use crate::resources::Material;

/// A renderable leaf shape produced by the external primitive factory.
pub trait Primitive {
    /// Declared identifier, used for error reporting and draw recording.
    fn id(&self) -> &str;

    /// Issues the backend-specific draw for this shape. Called after the
    /// driver has applied the effective material and model matrix.
    fn render(&self);

    /// Recomputes UV coordinates for the effective tiling lengths.
    ///
    /// Default no-op; shapes whose UV span depends on inherited tiling
    /// (e.g. rectangles and triangles) override this. Implementations use
    /// interior mutability for their buffers, since the call is made from the
    /// read-only traversal.
    fn recompute_uv(&self, _length_s: f32, _length_t: f32) {}
}

/// The low-level rendering sink the traversal drives.
///
/// Camera projection, buffer clearing and the draw calls themselves live
/// behind this trait; the core only sequences them.
pub trait RenderBackend {
    /// Frame setup: clear buffers, apply ambient/background colors.
    fn begin_frame(&mut self, globals: &SceneGlobals);

    /// Sets the cumulative model transform for subsequent draws.
    fn set_model_matrix(&mut self, model: &Mat4);

    /// Applies a material (already carrying its effective texture, if any).
    fn apply_material(&mut self, material: &Material);

    /// Draws a primitive under the current material and model matrix.
    fn draw(&mut self, primitive: &dyn Primitive);

    /// Frame teardown.
    fn end_frame(&mut self);
}
