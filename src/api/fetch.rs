use serde::de::DeserializeOwned;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use super::{PokemonRecord, SpeciesRecord, SubjectSource};
use crate::error::AcquisitionError;

/// PokeAPI over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct FetchSource {
    base: Url,
}

impl FetchSource {
    /// `base` must end with a '/' (see `GameConfig::from_json`).
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn pokemon_url(&self, id: u32) -> Result<Url, AcquisitionError> {
        Ok(self.base.join(&format!("pokemon/{id}"))?)
    }
}

impl SubjectSource for FetchSource {
    async fn pokemon(&self, id: u32) -> Result<PokemonRecord, AcquisitionError> {
        get_json(&self.pokemon_url(id)?).await
    }

    async fn species(&self, url: &Url) -> Result<SpeciesRecord, AcquisitionError> {
        get_json(url).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &Url) -> Result<T, AcquisitionError> {
    let win = window().ok_or(AcquisitionError::NoWindow)?;
    let resp = JsFuture::from(win.fetch_with_str(url.as_str()))
        .await
        .map_err(AcquisitionError::network)?;
    let resp: Response = resp.dyn_into().map_err(AcquisitionError::network)?;
    if !resp.ok() {
        return Err(AcquisitionError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let text = JsFuture::from(resp.text().map_err(AcquisitionError::network)?)
        .await
        .map_err(AcquisitionError::network)?;
    let body = text
        .as_string()
        .ok_or_else(|| AcquisitionError::Network(format!("non-text body from {url}")))?;
    log::trace!("GET {url}: {} bytes", body.len());
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_url_joins_onto_base() {
        let src = FetchSource::new(Url::parse("https://pokeapi.co/api/v2/").unwrap());
        assert_eq!(
            src.pokemon_url(25).unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }
}
