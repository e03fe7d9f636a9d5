// Upstream record shapes. Only the fields the game reads are modelled; serde
// skips the rest of the (large) PokeAPI payloads.
use serde::Deserialize;
use url::Url;

/// `{ "name": ..., "url": ... }` pair used all over the API.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceLink {
    #[serde(default)]
    pub name: String,
    pub url: Url,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: ResourceLink,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Image links in preference order: high resolution artwork, then the
    /// default sprite. Empty strings count as missing.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        let artwork = self
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref());
        artwork
            .into_iter()
            .chain(self.front_default.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn best(&self) -> Option<&str> {
        self.candidates().next()
    }
}

/// `GET /pokemon/{id}`
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    pub species: ResourceLink,
}

/// `GET /pokemon-species/{id}`, reached through `PokemonRecord::species`.
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesRecord {
    pub habitat: Option<ResourceLink>,
    pub generation: ResourceLink,
}
