//! Skin and cape textures.

use crate::config::TEXTURE_URL_PREFIX_LEN;

/// Arm model a skin is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinModel {
    /// Four-pixel arms ("Steve").
    Classic,
    /// Three-pixel arms ("Alex").
    Slim,
}

/// What a texture is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// A player skin.
    Skin {
        /// Arm model of the skin
        model: SkinModel,
    },
    /// A cape.
    Cape,
}

/// A texture referenced by a profile.
///
/// Only the reference is kept; use `MojangApi::fetch_texture` to download the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Full texture URL
    pub url: String,
    /// Texture hash (the part of the URL after `/texture/`)
    pub id: String,
    /// Skin or cape
    pub kind: TextureKind,
}

impl Texture {
    /// A skin texture. The model is `Slim` when the profile carried skin metadata.
    pub fn skin(url: impl Into<String>, has_metadata: bool) -> Self {
        let model = if has_metadata {
            SkinModel::Slim
        } else {
            SkinModel::Classic
        };
        Self::new(url.into(), TextureKind::Skin { model })
    }

    /// A cape texture.
    pub fn cape(url: impl Into<String>) -> Self {
        Self::new(url.into(), TextureKind::Cape)
    }

    fn new(url: String, kind: TextureKind) -> Self {
        let id = url.get(TEXTURE_URL_PREFIX_LEN..).unwrap_or_default().to_string();
        Self { url, id, kind }
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
