//! Upstream data source: record shapes, the source seam and the two-step
//! acquisition of a round's subject.

mod fetch;
mod records;

pub use fetch::FetchSource;
pub use records::{Artwork, OtherSprites, PokemonRecord, ResourceLink, SpeciesRecord, Sprites, TypeSlot};

use url::Url;

use crate::error::AcquisitionError;
use crate::subject::Subject;

/// Where subjects come from. The browser build talks to PokeAPI through
/// [`FetchSource`]; tests plug in canned records.
#[allow(async_fn_in_trait)]
pub trait SubjectSource {
    async fn pokemon(&self, id: u32) -> Result<PokemonRecord, AcquisitionError>;
    async fn species(&self, url: &Url) -> Result<SpeciesRecord, AcquisitionError>;
}

/// Looks up the creature, then its species through the link the first
/// record carries. Nothing is returned unless both lookups succeed.
pub async fn acquire<S: SubjectSource>(source: &S, id: u32) -> Result<Subject, AcquisitionError> {
    let pokemon = source.pokemon(id).await?;
    let species = source.species(&pokemon.species.url).await?;
    Subject::from_records(pokemon, species)
}

/// Uniform id in `1..=max`.
pub fn random_subject_id(max: u32) -> Result<u32, AcquisitionError> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)?;
    Ok(id_from_entropy(u64::from_le_bytes(buf), max))
}

// Modulo bias over a u64 draw is negligible for a range this small.
fn id_from_entropy(raw: u64, max: u32) -> u32 {
    let max = max.max(1);
    (raw % u64::from(max)) as u32 + 1
}
