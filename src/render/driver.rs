//! Per-frame depth-first traversal of the component graph.
//!
//! The driver threads inherited state down the call stack: the effective
//! material, the effective texture and its tiling lengths, and the
//! cumulative model transform. At every component it selects the active
//! material (global switch index, modulo list length), resolves the
//! texture binding, composes the animated local transform, and recurses;
//! at every primitive leaf it applies an independent copy of the effective
//! material and asks the backend to draw.
//!
//! Everything the driver reads is a pure function of the graph and the
//! [`FrameContext`]; the only state it mutates is each looping animation's
//! cycle start, via that animation's own player.

use std::sync::Arc;

use glam::Mat4;
use slotmap::SlotMap;

use crate::animation::AnimationPlayer;
use crate::render::backend::{Primitive, RenderBackend};
use crate::render::matrix_stack::MatrixStack;
use crate::resources::{Material, Texture};
use crate::scene::{
    AnimationKey, Child, Component, ComponentKey, MaterialBinding, SceneGraph, TextureBinding,
};

/// Explicit per-frame inputs: the global material-switch index (cycled by
/// an external input handler) and the current animation clock in
/// milliseconds (supplied by the external frame clock).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    pub material_switch: usize,
    pub current_instant_ms: f64,
}

/// State inherited from the ancestor chain during traversal.
#[derive(Clone, Copy, Default)]
struct Inherited<'a> {
    /// The nearest ancestor's effective material. `None` only until the
    /// first concrete material on the path (the root has no parent).
    material: Option<&'a Arc<Material>>,
    /// The nearest ancestor's effective texture with its tiling lengths.
    texture: Option<(&'a Arc<Texture>, f32, f32)>,
}

/// Renders one frame: a single depth-first walk from the declared root.
///
/// The root is visited with no inherited material and no bound texture.
pub fn render_frame(graph: &mut SceneGraph, frame: &FrameContext, backend: &mut dyn RenderBackend) {
    let root = graph.root();
    let mut stack = MatrixStack::new();

    render_component(
        &graph.components,
        &mut graph.players,
        root,
        &mut stack,
        Inherited::default(),
        frame,
        backend,
    );

    debug_assert_eq!(stack.depth(), 1, "matrix stack unbalanced after frame");
}

fn render_component<'a>(
    components: &'a SlotMap<ComponentKey, Component>,
    players: &mut SlotMap<AnimationKey, AnimationPlayer>,
    key: ComponentKey,
    stack: &mut MatrixStack,
    inherited: Inherited<'a>,
    frame: &FrameContext,
    backend: &mut dyn RenderBackend,
) {
    let Some(component) = components.get(key) else {
        return;
    };

    // 1. Active material: global switch cycles multi-material components
    //    in lockstep; `inherit` substitutes the ancestor's.
    let own_material = match &component.materials[frame.material_switch % component.materials.len()]
    {
        MaterialBinding::Concrete(material) => Some(material),
        MaterialBinding::Inherit => inherited.material,
    };

    // 2. Effective texture and tiling.
    let own_texture = match &component.texture {
        TextureBinding::Absent => None,
        TextureBinding::Inherit => inherited.texture,
        TextureBinding::Concrete {
            texture,
            length_s,
            length_t,
        } => Some((texture, *length_s, *length_t)),
    };

    // 3. Animated local transform: the pose is applied with the static
    //    transform, nearest the geometry.
    let local = match component.animation {
        Some(anim_key) => {
            let pose = players
                .get_mut(anim_key)
                .map_or(Mat4::IDENTITY, |p| p.pose_matrix(frame.current_instant_ms));
            component.transform * pose
        }
        None => component.transform,
    };

    // 4. Save, multiply, recurse, restore.
    stack.scoped(&local, |stack| {
        let next = Inherited {
            material: own_material,
            texture: own_texture,
        };
        for child in &component.children {
            match child {
                Child::Component(child_key) => {
                    render_component(components, players, *child_key, stack, next, frame, backend);
                }
                Child::Primitive(primitive) => {
                    draw_leaf(primitive.as_ref(), next, stack, backend);
                }
            }
        }
    });
}

/// Step 5 of the traversal: applies the inherited appearance to a leaf and
/// draws it.
fn draw_leaf(
    primitive: &dyn Primitive,
    inherited: Inherited<'_>,
    stack: &MatrixStack,
    backend: &mut dyn RenderBackend,
) {
    let (length_s, length_t) = inherited
        .texture
        .map_or((1.0, 1.0), |(_, s, t)| (s, t));

    if let Some(material) = inherited.material {
        // Shallow, independent copy: sibling subtrees may bind different
        // textures to the same shared material within one frame.
        let mut effective = Material::clone(material);
        if let Some((texture, _, _)) = inherited.texture {
            effective.set_texture(Arc::clone(texture));
        }
        primitive.recompute_uv(length_s, length_t);
        backend.set_model_matrix(&stack.current());
        backend.apply_material(&effective);
    } else {
        primitive.recompute_uv(length_s, length_t);
        backend.set_model_matrix(&stack.current());
    }

    backend.draw(primitive);
}
