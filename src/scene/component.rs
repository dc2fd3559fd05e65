//! Resolved component nodes.

use std::sync::Arc;

use glam::Mat4;
use smallvec::SmallVec;

use crate::render::Primitive;
use crate::resources::{Material, Texture};
use slotmap::new_key_type;

new_key_type! {
    /// Arena handle of a resolved component.
    pub struct ComponentKey;
    /// Arena handle of an animation player.
    pub struct AnimationKey;
}

/// One entry of a component's ordered material list.
///
/// `Inherit` substitutes the parent's effective material at traversal time;
/// it is only representable here and on texture bindings, never on
/// transforms or animations.
#[derive(Debug, Clone)]
pub enum MaterialBinding {
    Concrete(Arc<Material>),
    Inherit,
}

/// A component's texture binding with its tiling lengths.
#[derive(Debug, Clone)]
pub enum TextureBinding {
    Concrete {
        texture: Arc<Texture>,
        length_s: f32,
        length_t: f32,
    },
    /// Explicitly untextured: descendants see no texture (tiling 1x1)
    /// regardless of what ancestors bound.
    Absent,
    /// Use the parent's effective texture and tiling.
    Inherit,
}

/// A resolved child: a renderable leaf or another component in the arena.
#[derive(Clone)]
pub enum Child {
    Primitive(Arc<dyn Primitive>),
    Component(ComponentKey),
}

impl std::fmt::Debug for Child {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Child::Primitive(p) => f.debug_tuple("Primitive").field(&p.id()).finish(),
            Child::Component(key) => f.debug_tuple("Component").field(key).finish(),
        }
    }
}

/// A fully resolved node of the component graph.
///
/// After resolution no string placeholders remain: the transform is a
/// composed matrix, materials and textures are shared table entries, and
/// children are primitive handles or arena keys. Everything is read-only
/// during rendering.
#[derive(Debug)]
pub struct Component {
    pub id: String,
    pub transform: Mat4,
    /// Ordered, non-empty. Indexed by the global material switch, modulo
    /// length, so a single toggle cycles every multi-material component in
    /// lockstep while single-material components are unaffected.
    pub materials: SmallVec<[MaterialBinding; 2]>,
    pub texture: TextureBinding,
    pub animation: Option<AnimationKey>,
    /// Ordered, non-empty.
    pub children: Vec<Child>,
}
