//! The creature hidden behind the silhouette.

use url::Url;

use crate::api::{PokemonRecord, SpeciesRecord};
use crate::error::AcquisitionError;

#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    pub id: u32,
    /// Lower-case API name; compared case-insensitively.
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Decimetres, as served upstream.
    pub height: u32,
    /// Hectograms, as served upstream.
    pub weight: u32,
    pub image: Option<Url>,
    pub habitat: Option<String>,
    pub generation: u32,
}

impl Subject {
    /// Combines the creature record with its species record.
    pub fn from_records(
        pokemon: PokemonRecord,
        species: SpeciesRecord,
    ) -> Result<Self, AcquisitionError> {
        let mut slots = pokemon.types;
        slots.sort_by_key(|s| s.slot);
        let generation = generation_number(&species.generation.url)?;
        // A broken sprite link only costs the picture, not the round.
        let image = pokemon
            .sprites
            .candidates()
            .find_map(|s| Url::parse(s).ok());

        Ok(Self {
            id: pokemon.id,
            name: pokemon.name,
            types: slots.into_iter().map(|s| s.kind.name).collect(),
            height: pokemon.height,
            weight: pokemon.weight,
            image,
            habitat: species
                .habitat
                .map(|h| h.name)
                .filter(|name| !name.is_empty()),
            generation,
        })
    }

    /// Name with its first letter upper-cased, as shown on reveal.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn matches(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.name.to_lowercase()
    }
}

/// Reads the generation number out of `.../generation/{n}/`.
pub fn generation_number(url: &Url) -> Result<u32, AcquisitionError> {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .and_then(|last| last.parse().ok())
        .ok_or_else(|| AcquisitionError::Generation(url.to_string()))
}
