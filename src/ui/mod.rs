//! DOM side of the game. Looks up the page's elements (creating bare ones
//! when the host page lacks them) and paints round outcomes onto them.
//! No game rules live here.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::locale::Locale;
use crate::round::{HINT_BUDGET, HintCategory, RoundController};
use crate::subject::Subject;

/// CSS filter turning the artwork into a flat silhouette.
pub const SILHOUETTE_FILTER: &str = "brightness(0) contrast(0)";
/// Placeholder shown in a hint slot until it is bought.
pub const HINT_PLACEHOLDER: &str = "????";

pub const IMAGE_ID: &str = "pokemon-image";
pub const GUESS_INPUT_ID: &str = "guess-input";
pub const SUBMIT_ID: &str = "submit-guess";
pub const NEW_ROUND_ID: &str = "new-game";
pub const RESULT_ID: &str = "result-message";
pub const REVEAL_NAME_ID: &str = "reveal-name";
pub const ATTEMPTS_ID: &str = "attempts";
pub const HINTS_USED_ID: &str = "hints-used";

pub fn hint_button_id(category: HintCategory) -> &'static str {
    match category {
        HintCategory::Type => "hint-type",
        HintCategory::Habitat => "hint-habitat",
        HintCategory::Height => "hint-height",
        HintCategory::Weight => "hint-weight",
        HintCategory::Generation => "hint-gen",
    }
}

pub fn hint_value_id(category: HintCategory) -> &'static str {
    match category {
        HintCategory::Type => "hint-types-value",
        HintCategory::Habitat => "hint-habitat-value",
        HintCategory::Height => "hint-height-value",
        HintCategory::Weight => "hint-weight-value",
        HintCategory::Generation => "hint-generation-value",
    }
}

/// Handles to every element the game writes to.
pub struct Ui {
    pub image: HtmlImageElement,
    pub input: HtmlInputElement,
    pub submit: HtmlButtonElement,
    pub new_round: HtmlButtonElement,
    pub hint_buttons: Vec<(HintCategory, HtmlButtonElement)>,
    hint_values: Vec<(HintCategory, HtmlElement)>,
    result: HtmlElement,
    reveal_name: HtmlElement,
    attempts: HtmlElement,
    hints_used: HtmlElement,
}

impl Ui {
    /// Binds to the page, reusing elements with the expected ids.
    pub fn bind(doc: &Document, locale: Locale) -> Result<Self, JsValue> {
        let image: HtmlImageElement = ensure(doc, "img", IMAGE_ID, None)?;
        image.set_alt("?");
        let reveal_name = ensure(doc, "div", REVEAL_NAME_ID, None)?;
        let input: HtmlInputElement = ensure(doc, "input", GUESS_INPUT_ID, None)?;
        input.set_attribute("autocomplete", "off").ok();
        let submit = ensure(doc, "button", SUBMIT_ID, Some(locale.guess_button()))?;
        let result = ensure(doc, "div", RESULT_ID, None)?;

        let mut hint_buttons = Vec::with_capacity(HintCategory::ALL.len());
        let mut hint_values = Vec::with_capacity(HintCategory::ALL.len());
        for category in HintCategory::ALL {
            let label = locale.hint_button(category);
            hint_buttons.push((category, ensure(doc, "button", hint_button_id(category), Some(label))?));
            hint_values.push((category, ensure(doc, "span", hint_value_id(category), None)?));
        }

        let attempts = ensure(doc, "div", ATTEMPTS_ID, None)?;
        let hints_used = ensure(doc, "div", HINTS_USED_ID, None)?;
        let new_round = ensure(doc, "button", NEW_ROUND_ID, Some(locale.new_round_button()))?;

        Ok(Self {
            image,
            input,
            submit,
            new_round,
            hint_buttons,
            hint_values,
            result,
            reveal_name,
            attempts,
            hints_used,
        })
    }

    /// Fresh-round look: silhouette, empty outcome, everything clickable.
    pub fn reset(&self, ctl: &RoundController) {
        self.clear_result();
        self.reveal_name.set_text_content(Some(""));
        set_style(&self.reveal_name, "opacity", "0");
        self.input.set_value("");
        self.input.set_disabled(false);
        self.submit.set_disabled(false);
        for (_, button) in &self.hint_buttons {
            button.set_disabled(false);
        }
        for (_, slot) in &self.hint_values {
            slot.set_text_content(Some(HINT_PLACEHOLDER));
        }
        self.image.remove_attribute("src").ok();
        set_style(&self.image, "filter", SILHOUETTE_FILTER);
        self.render_stats(ctl);
    }

    pub fn render_stats(&self, ctl: &RoundController) {
        let locale = ctl.locale();
        self.attempts
            .set_text_content(Some(&locale.attempts(ctl.guesses())));
        self.hints_used
            .set_text_content(Some(&locale.hints(ctl.hints_used(), HINT_BUDGET)));
    }

    pub fn show_subject(&self, subject: &Subject) {
        match &subject.image {
            Some(url) => self.image.set_src(url.as_str()),
            None => log::warn!("subject #{} has no image", subject.id),
        }
        set_style(&self.image, "filter", SILHOUETTE_FILTER);
        self.input.focus().ok();
    }

    pub fn show_failure(&self, locale: Locale) {
        self.show_result(locale.load_failed(), false);
    }

    pub fn show_incorrect(&self, locale: Locale) {
        self.show_result(locale.incorrect(), false);
        self.input.set_value("");
        self.input.focus().ok();
    }

    /// Solved: lift the silhouette, print the name, lock every control but
    /// the new-round button.
    pub fn show_correct(&self, locale: Locale, display_name: &str) {
        self.show_result(&locale.correct(display_name), true);
        set_style(&self.image, "filter", "none");
        self.reveal_name.set_text_content(Some(display_name));
        set_style(&self.reveal_name, "opacity", "1");
        self.input.set_disabled(true);
        self.submit.set_disabled(true);
        for (_, button) in &self.hint_buttons {
            button.set_disabled(true);
        }
    }

    pub fn show_hint(&self, category: HintCategory, value: &str) {
        if let Some((_, slot)) = self.hint_values.iter().find(|(c, _)| *c == category) {
            slot.set_text_content(Some(value));
        }
    }

    /// Disables used hints, or all of them once the budget is spent.
    pub fn sync_hint_buttons(&self, ctl: &RoundController) {
        for (category, button) in &self.hint_buttons {
            button.set_disabled(!ctl.hint_available(*category));
        }
    }

    fn show_result(&self, message: &str, correct: bool) {
        self.result.set_text_content(Some(message));
        self.result.set_class_name(if correct {
            "result-message correct-message"
        } else {
            "result-message incorrect-message"
        });
    }

    fn clear_result(&self) {
        self.result.set_text_content(Some(""));
        self.result.set_class_name("result-message");
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).ok();
}

/// Returns the element with `id`, creating `<tag id=...>` under `<body>`
/// when the page does not have one.
fn ensure<T: JsCast>(
    doc: &Document,
    tag: &str,
    id: &str,
    label: Option<&str>,
) -> Result<T, JsValue> {
    let el = match doc.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = doc.create_element(tag)?;
            el.set_id(id);
            if let Some(label) = label {
                el.set_text_content(Some(label));
            }
            let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
            body.append_child(&el)?;
            el
        }
    };
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not a <{tag}>")))
}
