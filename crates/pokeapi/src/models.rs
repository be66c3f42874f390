use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const OFFICIAL_ARTWORK: &str = "official-artwork";

/// Subset of GET /api/v2/pokemon/{name}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    /// Keyed by artwork style ("official-artwork", "home", ...)
    #[serde(default)]
    pub other: HashMap<String, ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

impl Pokemon {
    /// Official artwork when present, otherwise the default sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .get(OFFICIAL_ARTWORK)
            .and_then(|art| art.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }
}

/// Result of a species lookup; `pokemon` is `None` when the name is unknown.
#[derive(Debug, Clone, Default)]
pub struct SpeciesLookup {
    pub pokemon: Option<Pokemon>,
    pub body: String,
}
