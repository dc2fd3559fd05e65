//! Shared scene resources and the tables that own them.
//!
//! - [`Material`]: Phong color terms + optional texture binding
//! - [`Texture`]: opaque image handle + default tiling
//! - [`transform`]: composition of declared operations into matrices
//! - [`ResourceTable`]: flat id-to-resource mappings, built once at load

pub mod material;
pub mod table;
pub mod texture;
pub mod transform;

pub use material::Material;
pub use table::ResourceTable;
pub use texture::Texture;
