//! Parsed scene document.
//!
//! The document loader (an external collaborator) parses whatever concrete
//! format the scene ships in and hands the core these plain declaration
//! lists. Everything here is still symbolic: components refer to resources
//! and to each other by ID string, and nothing has been validated yet.
//! [`crate::scene::SceneGraph::build`] turns a `SceneDocument` into a
//! resolved, renderable graph.
//!
//! Binding modes that the source format spells as sentinel strings
//! (`"inherit"` / `"none"`) are tagged enum variants here, so an illegal
//! combination (e.g. an inherited transformation) is unrepresentable.

use glam::{Vec3, Vec4};

/// Global scene settings applied at the start of every frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneGlobals {
    /// Ambient light color (RGBA, channels in `[0, 1]`).
    pub ambient: Vec4,
    /// Clear/background color (RGBA).
    pub background: Vec4,
}

impl Default for SceneGlobals {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// A global rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One geometric operation of a transformation block, in document order.
#[derive(Debug, Clone, Copy)]
pub enum TransformOp {
    Translate(Vec3),
    /// Rotation about a global axis, angle in radians.
    Rotate { axis: Axis, angle: f32 },
    Scale(Vec3),
}

/// A named, reusable transformation.
#[derive(Debug, Clone)]
pub struct TransformationDecl {
    pub id: String,
    pub ops: Vec<TransformOp>,
}

/// A declared material: Phong-style color terms, channels in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct MaterialDecl {
    pub id: String,
    pub emissive: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

/// A declared texture: an opaque image handle plus default tiling lengths.
#[derive(Debug, Clone)]
pub struct TextureDecl {
    pub id: String,
    /// Backend-interpreted image reference (typically a file path).
    pub image: String,
    pub length_s: f32,
    pub length_t: f32,
}

/// One timestamped pose sample of an animation.
///
/// Rotation angles are Euler angles in radians, applied about the global
/// X, Y, Z axes in that order. Degree conversion is the loader's concern.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeDecl {
    /// Instant in milliseconds from animation start. Strictly increasing
    /// across the sequence, and positive for the first keyframe.
    pub instant_ms: f64,
    pub translate: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// A declared keyframe animation.
#[derive(Debug, Clone)]
pub struct AnimationDecl {
    pub id: String,
    pub is_loop: bool,
    pub keyframes: Vec<KeyframeDecl>,
}

/// A component's transformation: inline operations or a table reference.
#[derive(Debug, Clone)]
pub enum ComponentTransform {
    Ops(Vec<TransformOp>),
    Ref(String),
}

/// One entry of a component's ordered material list.
#[derive(Debug, Clone)]
pub enum MaterialRef {
    Id(String),
    /// Use the nearest ancestor's effective material.
    Inherit,
}

/// A component's texture binding.
#[derive(Debug, Clone)]
pub enum TextureRef {
    Texture {
        id: String,
        /// Tiling overrides; `None` falls back to the texture's defaults.
        length_s: Option<f32>,
        length_t: Option<f32>,
    },
    /// Explicitly untextured, independent of ancestors.
    Absent,
    /// Use the nearest ancestor's effective texture and tiling.
    Inherit,
}

/// A child reference of a component.
#[derive(Debug, Clone)]
pub enum ChildDecl {
    Primitive(String),
    Component(String),
}

/// A declared component, before resolution.
#[derive(Debug, Clone)]
pub struct ComponentDecl {
    pub id: String,
    pub transform: ComponentTransform,
    pub materials: Vec<MaterialRef>,
    pub texture: TextureRef,
    pub animation: Option<String>,
    pub children: Vec<ChildDecl>,
}

/// The complete parsed document handed over by the loader.
///
/// Declaration order is irrelevant for components; forward references are
/// resolved during graph linking.
#[derive(Debug, Clone, Default)]
pub struct SceneDocument {
    pub globals: SceneGlobals,
    /// ID of the component the per-frame traversal starts from.
    pub root_id: String,
    /// ID of the view the external camera layer should start with.
    pub default_camera_id: String,
    pub materials: Vec<MaterialDecl>,
    pub textures: Vec<TextureDecl>,
    pub transformations: Vec<TransformationDecl>,
    pub animations: Vec<AnimationDecl>,
    pub components: Vec<ComponentDecl>,
}
