//! Phong-style material data.

use std::sync::Arc;

use glam::Vec4;

use crate::document::MaterialDecl;
use crate::resources::texture::Texture;

/// An immutable surface appearance: emissive/ambient/diffuse/specular color
/// terms (channels in `[0, 1]`) plus shininess, with an optional texture
/// binding.
///
/// Materials in the resource table are shared untextured between every
/// component that references them. The render driver never applies a shared
/// material directly: at each primitive leaf it takes a [`Clone`] and
/// attaches the effective texture to the copy, so two sibling subtrees can
/// texture the same material differently within one frame. `Clone` is the
/// shallow-copy contract: color fields are duplicated and the texture slot
/// of the copy is independent of the original.
#[derive(Debug, Clone)]
pub struct Material {
    pub emissive: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
    pub texture: Option<Arc<Texture>>,
}

impl Material {
    /// Builds an untextured material from its document declaration.
    #[must_use]
    pub fn from_decl(decl: &MaterialDecl) -> Self {
        Self {
            emissive: decl.emissive,
            ambient: decl.ambient,
            diffuse: decl.diffuse,
            specular: decl.specular,
            shininess: decl.shininess,
            texture: None,
        }
    }

    /// Binds `texture` to this material instance.
    pub fn set_texture(&mut self, texture: Arc<Texture>) {
        self.texture = Some(texture);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emissive: Vec4::new(0.0, 0.0, 0.0, 1.0),
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vec4::new(0.8, 0.8, 0.8, 1.0),
            specular: Vec4::new(0.0, 0.0, 0.0, 1.0),
            shininess: 10.0,
            texture: None,
        }
    }
}
