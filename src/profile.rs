use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::synthetic_id;
use crate::payload::TexturePayload;

pub const TEXTURES_PROPERTY: &str = "textures";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ProfileProperty {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            signature: None,
        }
    }
}

/// Identity plus properties, as carried by a player head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

impl Profile {
    /// Profile of a skull showing the texture of `payload`, with an id
    /// derived from the payload itself.
    pub fn from_payload(payload: &TexturePayload) -> Self {
        Self {
            id: synthetic_id(payload),
            name: None,
            properties: vec![ProfileProperty::new(
                TEXTURES_PROPERTY,
                payload.as_str(),
            )],
        }
    }

    pub fn property(&self, name: &str) -> Option<&ProfileProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn textures(&self) -> Option<TexturePayload> {
        self.property(TEXTURES_PROPERTY)
            .map(|p| TexturePayload::new(p.value.clone()))
    }
}
