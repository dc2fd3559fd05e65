//! Texture data.

use crate::document::TextureDecl;

/// An image reference plus the default tiling period.
///
/// The image itself is opaque to the core: the render backend interprets
/// the handle (typically a file path) and owns the GPU-side object. Tiling
/// lengths are the texture-repeat periods used by primitives whose UV span
/// depends on them; a component's texture binding may override the defaults.
#[derive(Debug, Clone)]
pub struct Texture {
    pub id: String,
    pub image: String,
    pub length_s: f32,
    pub length_t: f32,
}

impl Texture {
    #[must_use]
    pub fn from_decl(decl: &TextureDecl) -> Self {
        Self {
            id: decl.id.clone(),
            image: decl.image.clone(),
            length_s: decl.length_s,
            length_t: decl.length_t,
        }
    }
}
