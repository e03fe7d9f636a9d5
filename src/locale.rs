//! Player-facing text. English by default; Brazilian Portuguese matches the
//! wording of the first version of the game.

use serde::Deserialize;

use crate::round::HintCategory;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    English,
    #[serde(rename = "pt-BR", alias = "pt")]
    Portuguese,
}

impl Locale {
    pub fn correct(self, display_name: &str) -> String {
        match self {
            Locale::English => format!("Correct! It's {display_name}!"),
            Locale::Portuguese => format!("Correto! É {display_name}!"),
        }
    }

    pub fn incorrect(self) -> &'static str {
        match self {
            Locale::English => "Wrong! Try again.",
            Locale::Portuguese => "Incorreto! Tente novamente.",
        }
    }

    pub fn load_failed(self) -> &'static str {
        match self {
            Locale::English => "Could not load a Pokémon. Try again!",
            Locale::Portuguese => "Erro ao carregar Pokémon. Tente novamente!",
        }
    }

    /// Shown in place of a habitat the API does not know.
    pub fn unknown_habitat(self) -> &'static str {
        match self {
            Locale::English => "unknown",
            Locale::Portuguese => "desconhecido",
        }
    }

    pub fn generation(self, number: u32) -> String {
        match self {
            Locale::English => format!("Generation {number}"),
            Locale::Portuguese => format!("Geração {number}"),
        }
    }

    pub fn attempts(self, count: u32) -> String {
        match self {
            Locale::English => format!("Attempts: {count}"),
            Locale::Portuguese => format!("Tentativas: {count}"),
        }
    }

    pub fn hints(self, used: usize, budget: usize) -> String {
        match self {
            Locale::English => format!("Hints: {used}/{budget}"),
            Locale::Portuguese => format!("Dicas: {used}/{budget}"),
        }
    }

    /// Label for a hint button before it is used.
    pub fn hint_button(self, category: HintCategory) -> &'static str {
        use HintCategory::*;
        match (self, category) {
            (Locale::English, Type) => "Type",
            (Locale::English, Habitat) => "Habitat",
            (Locale::English, Height) => "Height",
            (Locale::English, Weight) => "Weight",
            (Locale::English, Generation) => "Generation",
            (Locale::Portuguese, Type) => "Tipo",
            (Locale::Portuguese, Habitat) => "Habitat",
            (Locale::Portuguese, Height) => "Altura",
            (Locale::Portuguese, Weight) => "Peso",
            (Locale::Portuguese, Generation) => "Geração",
        }
    }

    pub fn guess_button(self) -> &'static str {
        match self {
            Locale::English => "Guess",
            Locale::Portuguese => "Adivinhar",
        }
    }

    pub fn new_round_button(self) -> &'static str {
        match self {
            Locale::English => "New Pokémon",
            Locale::Portuguese => "Novo Pokémon",
        }
    }
}
