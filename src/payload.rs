//! Texture payloads as exchanged with the session server: a base64 string
//! wrapping a JSON document such as
//!
//! ```json
//! {"textures":{"SKIN":{"url":"http://textures.minecraft.net/texture/..."}}}
//! ```
//!
//! Payloads are forwarded opaquely by the rest of the crate. Decoding is
//! only needed to inspect them.

use std::fmt;

use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Base64-encoded texture document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TexturePayload(String);

impl TexturePayload {
    /// Wraps an already encoded payload without validating it.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    pub fn encode(document: &TextureDocument) -> Result<Self> {
        let json = serde_json::to_string(document)?;
        Ok(Self(general_purpose::STANDARD.encode(json.as_bytes())))
    }

    pub fn decode(&self) -> Result<TextureDocument> {
        let json = self.decode_json()?;
        Ok(serde_json::from_str(&json)?)
    }

    /// The JSON text carried by the payload.
    pub fn decode_json(&self) -> Result<String> {
        let bytes = general_purpose::STANDARD.decode(self.0.as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TexturePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TexturePayload {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Decoded texture document.
///
/// Documents minted from a URL only carry `textures`, documents issued by
/// the session server also carry the owning profile and a timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    pub textures: Textures,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textures {
    #[serde(rename = "SKIN", skip_serializing_if = "Option::is_none")]
    pub skin: Option<Texture>,
    #[serde(rename = "CAPE", skip_serializing_if = "Option::is_none")]
    pub cape: Option<Texture>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TextureMetadata>,
}

/// Present on skins using the slim ("Alex") arm model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureMetadata {
    pub model: String,
}

impl TextureDocument {
    /// A document with nothing but a skin URL.
    pub fn with_skin<S: Into<String>>(url: S) -> Self {
        Self {
            textures: Textures {
                skin: Some(Texture {
                    url: url.into(),
                    metadata: None,
                }),
                cape: None,
            },
            ..Default::default()
        }
    }

    pub fn skin_url(&self) -> Option<&str> {
        self.textures.skin.as_ref().map(|t| t.url.as_str())
    }

    pub fn cape_url(&self) -> Option<&str> {
        self.textures.cape.as_ref().map(|t| t.url.as_str())
    }

    pub fn is_slim(&self) -> bool {
        self.textures
            .skin
            .as_ref()
            .and_then(|t| t.metadata.as_ref())
            .map(|m| m.model == "slim")
            .unwrap_or(false)
    }
}
