//! The running game: controller, page bindings and data source behind one
//! thread-local, plus the DOM event wiring that drives them.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, window};

use crate::api::{FetchSource, acquire, random_subject_id};
use crate::config::GameConfig;
use crate::error::AcquisitionError;
use crate::round::{Acquisition, GuessOutcome, HintCategory, HintOutcome, RoundController, RoundToken};
use crate::subject::Subject;
use crate::ui::Ui;

struct Game {
    controller: RoundController,
    ui: Ui,
    source: FetchSource,
    max_subject_id: u32,
}

impl Game {
    fn begin_round(&mut self) -> RoundToken {
        let token = self.controller.start_round();
        self.ui.reset(&self.controller);
        token
    }

    /// Takes over settings from a repeated `start_game_with_config`.
    fn reconfigure(&mut self, config: GameConfig) {
        self.controller.set_locale(config.locale);
        self.source = FetchSource::new(config.api_base_url);
        self.max_subject_id = config.max_subject_id;
    }

    fn finish_round(&mut self, token: RoundToken, result: Result<Subject, AcquisitionError>) {
        let locale = self.controller.locale();
        match self.controller.complete_acquisition(token, result) {
            Acquisition::Loaded(subject) => self.ui.show_subject(subject),
            Acquisition::Failed => self.ui.show_failure(locale),
            Acquisition::Stale => {}
        }
    }

    fn guess(&mut self, text: &str) {
        let locale = self.controller.locale();
        match self.controller.submit_guess(text) {
            GuessOutcome::Ignored => return,
            GuessOutcome::Incorrect => self.ui.show_incorrect(locale),
            GuessOutcome::Correct { display_name } => self.ui.show_correct(locale, &display_name),
        }
        self.ui.render_stats(&self.controller);
    }

    fn hint(&mut self, category: HintCategory) -> bool {
        match self.controller.reveal_hint(category) {
            HintOutcome::Ignored => false,
            HintOutcome::Revealed { category, value } => {
                self.ui.show_hint(category, &value);
                self.ui.sync_hint_buttons(&self.controller);
                self.ui.render_stats(&self.controller);
                true
            }
        }
    }
}

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

/// Binds the page, wires listeners and starts the first round. Later calls
/// apply the new settings to the running game and start a fresh round; the
/// page is not bound a second time.
pub fn start(config: GameConfig) -> Result<(), JsValue> {
    if GAME.with(|g| g.borrow().is_some()) {
        GAME.with(|g| {
            if let Some(game) = g.borrow_mut().as_mut() {
                game.reconfigure(config);
            }
        });
        log::info!("game already running; settings updated");
        new_round();
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let ui = Ui::bind(&doc, config.locale)?;
    wire_events(&ui)?;

    GAME.with(|g| {
        g.replace(Some(Game {
            controller: RoundController::new(config.locale),
            ui,
            source: FetchSource::new(config.api_base_url),
            max_subject_id: config.max_subject_id,
        }))
    });
    new_round();
    Ok(())
}

/// Starts a round and spawns its acquisition. The RefCell borrow is released
/// before the fetches run; the result is matched back by round token.
pub fn new_round() {
    let pending = GAME.with(|g| {
        g.borrow_mut()
            .as_mut()
            .map(|game| (game.begin_round(), game.source.clone(), game.max_subject_id))
    });
    let Some((token, source, max_id)) = pending else {
        log::warn!("new round requested before start_game");
        return;
    };

    spawn_local(async move {
        let result = match random_subject_id(max_id) {
            Ok(id) => acquire(&source, id).await,
            Err(err) => Err(err),
        };
        GAME.with(|g| {
            if let Some(game) = g.borrow_mut().as_mut() {
                game.finish_round(token, result);
            }
        });
    });
}

pub fn submit_guess(text: &str) {
    GAME.with(|g| {
        if let Some(game) = g.borrow_mut().as_mut() {
            game.guess(text);
        }
    });
}

fn submit_from_input() {
    GAME.with(|g| {
        if let Some(game) = g.borrow_mut().as_mut() {
            let text = game.ui.input.value();
            game.guess(&text);
        }
    });
}

pub fn reveal_hint(category: HintCategory) -> bool {
    GAME.with(|g| {
        g.borrow_mut()
            .as_mut()
            .map(|game| game.hint(category))
            .unwrap_or(false)
    })
}

fn wire_events(ui: &Ui) -> Result<(), JsValue> {
    on_click(&ui.submit, submit_from_input)?;
    on_click(&ui.new_round, new_round)?;
    for (category, button) in &ui.hint_buttons {
        let category = *category;
        on_click(button, move || {
            reveal_hint(category);
        })?;
    }

    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if evt.key() == "Enter" {
            submit_from_input();
        }
    }) as Box<dyn FnMut(_)>);
    ui.input
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_click(target: &EventTarget, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| handler()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
