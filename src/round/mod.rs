//! Round lifecycle: one subject, a guess counter and the revealed-hint flags.
//!
//! Nothing in here touches the DOM or the network. The controller hands back
//! outcome values and the `ui` layer decides how to show them, so the rules
//! can be exercised directly from tests.
//!
//! ```text
//! start_round -> Loading --subject--> Guessing --correct guess--> Revealed
//!                   \--error--> Failed
//! ```
//! Only `start_round` leaves `Revealed` or `Failed`.

mod hint;

pub use crate::error::UnknownCategory;
pub use hint::{HINT_BUDGET, HintCategory, RevealedHints};

use crate::error::AcquisitionError;
use crate::locale::Locale;
use crate::subject::Subject;

/// Identifies the round an in-flight acquisition belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Guessing,
    Revealed,
    Failed,
}

#[derive(Debug, PartialEq)]
pub enum GuessOutcome {
    /// Out-of-contract call: nothing changed.
    Ignored,
    Incorrect,
    Correct { display_name: String },
}

#[derive(Debug, PartialEq)]
pub enum HintOutcome {
    Ignored,
    Revealed { category: HintCategory, value: String },
}

/// Result of handing a finished acquisition to the controller.
#[derive(Debug, PartialEq)]
pub enum Acquisition<'a> {
    Loaded(&'a Subject),
    Failed,
    /// A newer round started meanwhile; the result was dropped.
    Stale,
}

#[derive(Debug)]
struct Round {
    token: RoundToken,
    phase: Phase,
    subject: Option<Subject>,
    guesses: u32,
    hints: RevealedHints,
}

impl Round {
    fn new(token: RoundToken) -> Self {
        Self {
            token,
            phase: Phase::Loading,
            subject: None,
            guesses: 0,
            hints: RevealedHints::default(),
        }
    }
}

/// Owns the active round. Starting a round replaces it wholesale.
#[derive(Debug)]
pub struct RoundController {
    round: Round,
    locale: Locale,
}

impl RoundController {
    /// Created in `Loading` with no acquisition running; call
    /// [`start_round`](Self::start_round) to play.
    pub fn new(locale: Locale) -> Self {
        Self {
            round: Round::new(RoundToken(0)),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Applies to text produced from now on; the round is left alone.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Throws away the current round, whatever its phase, and returns the
    /// token the next acquisition must present.
    pub fn start_round(&mut self) -> RoundToken {
        let token = RoundToken(self.round.token.0 + 1);
        self.round = Round::new(token);
        log::info!("round {} started", token.0);
        token
    }

    pub fn token(&self) -> RoundToken {
        self.round.token
    }

    /// Commits the subject (or the failure) if `token` is still current.
    pub fn complete_acquisition(
        &mut self,
        token: RoundToken,
        result: Result<Subject, AcquisitionError>,
    ) -> Acquisition<'_> {
        if token != self.round.token || self.round.phase != Phase::Loading {
            log::debug!(
                "dropping acquisition for round {} (active round {})",
                token.0,
                self.round.token.0
            );
            return Acquisition::Stale;
        }
        match result {
            Ok(subject) => {
                log::debug!("round {} subject #{} loaded", token.0, subject.id);
                self.round.phase = Phase::Guessing;
                Acquisition::Loaded(self.round.subject.insert(subject))
            }
            Err(err) => {
                log::error!("error fetching subject for round {}: {err}", token.0);
                self.round.phase = Phase::Failed;
                Acquisition::Failed
            }
        }
    }

    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        if self.round.phase != Phase::Guessing {
            return GuessOutcome::Ignored;
        }
        let Some(subject) = &self.round.subject else {
            return GuessOutcome::Ignored;
        };
        let guess = text.trim();
        if guess.is_empty() {
            return GuessOutcome::Ignored;
        }

        self.round.guesses += 1;
        log::debug!("guess #{}: {guess}", self.round.guesses);
        if subject.matches(guess) {
            let display_name = subject.display_name();
            self.round.phase = Phase::Revealed;
            GuessOutcome::Correct { display_name }
        } else {
            GuessOutcome::Incorrect
        }
    }

    pub fn reveal_hint(&mut self, category: HintCategory) -> HintOutcome {
        if self.round.phase != Phase::Guessing {
            return HintOutcome::Ignored;
        }
        let Some(subject) = &self.round.subject else {
            return HintOutcome::Ignored;
        };
        if !self.round.hints.mark(category) {
            return HintOutcome::Ignored;
        }
        log::debug!("hint {category} revealed ({}/{HINT_BUDGET})", self.round.hints.used());
        HintOutcome::Revealed {
            category,
            value: category.format(subject, self.locale),
        }
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.round.subject.as_ref()
    }

    pub fn guesses(&self) -> u32 {
        self.round.guesses
    }

    pub fn hints_used(&self) -> usize {
        self.round.hints.used()
    }

    pub fn revealed_hints(&self) -> RevealedHints {
        self.round.hints
    }

    /// Whether the button for `category` should still be clickable.
    pub fn hint_available(&self, category: HintCategory) -> bool {
        self.round.phase != Phase::Revealed
            && !self.round.hints.exhausted()
            && !self.round.hints.is_revealed(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Subject {
        Subject {
            id: 25,
            name: "pikachu".into(),
            types: vec!["electric".into()],
            height: 4,
            weight: 60,
            image: None,
            habitat: Some("forest".into()),
            generation: 1,
        }
    }

    fn loaded() -> RoundController {
        let mut ctl = RoundController::new(Locale::English);
        let token = ctl.start_round();
        assert!(matches!(
            ctl.complete_acquisition(token, Ok(pikachu())),
            Acquisition::Loaded(_)
        ));
        ctl
    }

    #[test]
    fn correct_guess_any_case_reveals_once() {
        let mut ctl = loaded();
        assert_eq!(
            ctl.submit_guess("PIKACHU "),
            GuessOutcome::Correct { display_name: "Pikachu".into() }
        );
        assert_eq!(ctl.phase(), Phase::Revealed);
        assert_eq!(ctl.guesses(), 1);

        assert_eq!(ctl.submit_guess("pikachu"), GuessOutcome::Ignored);
        assert_eq!(ctl.reveal_hint(HintCategory::Type), HintOutcome::Ignored);
        assert_eq!(ctl.guesses(), 1);
        assert_eq!(ctl.hints_used(), 0);
    }

    #[test]
    fn wrong_and_repeated_guesses_all_count() {
        let mut ctl = loaded();
        assert_eq!(ctl.submit_guess("raichu"), GuessOutcome::Incorrect);
        assert_eq!(ctl.submit_guess("raichu"), GuessOutcome::Incorrect);
        assert_eq!(ctl.submit_guess("   "), GuessOutcome::Ignored);
        assert_eq!(ctl.submit_guess(""), GuessOutcome::Ignored);
        assert_eq!(ctl.guesses(), 2);
        assert_eq!(ctl.phase(), Phase::Guessing);
    }

    #[test]
    fn height_hint_once() {
        let mut ctl = loaded();
        assert_eq!(
            ctl.reveal_hint(HintCategory::Height),
            HintOutcome::Revealed { category: HintCategory::Height, value: "0.4m".into() }
        );
        assert_eq!(ctl.hints_used(), 1);
        assert_eq!(ctl.reveal_hint(HintCategory::Height), HintOutcome::Ignored);
        assert_eq!(ctl.hints_used(), 1);
        assert!(!ctl.hint_available(HintCategory::Height));
        assert!(ctl.hint_available(HintCategory::Weight));
    }

    #[test]
    fn budget_caps_at_five() {
        let mut ctl = loaded();
        for c in HintCategory::ALL {
            assert!(matches!(ctl.reveal_hint(c), HintOutcome::Revealed { .. }));
        }
        assert_eq!(ctl.hints_used(), HINT_BUDGET);
        for c in HintCategory::ALL {
            assert_eq!(ctl.reveal_hint(c), HintOutcome::Ignored);
            assert!(!ctl.hint_available(c));
        }
        assert_eq!(ctl.hints_used(), HINT_BUDGET);
    }

    #[test]
    fn nothing_happens_before_subject_arrives() {
        let mut ctl = RoundController::new(Locale::English);
        ctl.start_round();
        assert_eq!(ctl.phase(), Phase::Loading);
        assert_eq!(ctl.submit_guess("pikachu"), GuessOutcome::Ignored);
        assert_eq!(ctl.reveal_hint(HintCategory::Type), HintOutcome::Ignored);
        assert_eq!(ctl.guesses(), 0);
    }

    #[test]
    fn failed_acquisition_leaves_no_subject() {
        let mut ctl = RoundController::new(Locale::English);
        let token = ctl.start_round();
        let res = ctl.complete_acquisition(token, Err(AcquisitionError::Network("offline".into())));
        assert_eq!(res, Acquisition::Failed);
        assert_eq!(ctl.phase(), Phase::Failed);
        assert!(ctl.subject().is_none());
        assert_eq!(ctl.submit_guess("pikachu"), GuessOutcome::Ignored);
        assert_eq!(ctl.reveal_hint(HintCategory::Generation), HintOutcome::Ignored);

        let retry = ctl.start_round();
        assert!(matches!(ctl.complete_acquisition(retry, Ok(pikachu())), Acquisition::Loaded(_)));
        assert_eq!(ctl.phase(), Phase::Guessing);
    }

    #[test]
    fn locale_switch_keeps_round() {
        let mut ctl = loaded();
        ctl.reveal_hint(HintCategory::Weight);
        let token = ctl.token();
        ctl.set_locale(Locale::Portuguese);
        assert_eq!(ctl.token(), token);
        assert_eq!(ctl.hints_used(), 1);
        assert_eq!(
            ctl.reveal_hint(HintCategory::Generation),
            HintOutcome::Revealed { category: HintCategory::Generation, value: "Geração 1".into() }
        );
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut ctl = RoundController::new(Locale::English);
        let old = ctl.start_round();
        let new = ctl.start_round();
        assert!(new > old);
        assert_eq!(ctl.complete_acquisition(old, Ok(pikachu())), Acquisition::Stale);
        assert_eq!(ctl.phase(), Phase::Loading);
        assert!(ctl.subject().is_none());

        assert!(matches!(ctl.complete_acquisition(new, Ok(pikachu())), Acquisition::Loaded(_)));
        // A duplicate delivery for the same round does not reset it.
        ctl.submit_guess("eevee");
        assert_eq!(ctl.complete_acquisition(new, Ok(pikachu())), Acquisition::Stale);
        assert_eq!(ctl.guesses(), 1);
    }

    #[test]
    fn start_round_discards_revealed_state() {
        let mut ctl = loaded();
        ctl.reveal_hint(HintCategory::Type);
        ctl.submit_guess("pikachu");
        ctl.start_round();
        assert_eq!(ctl.phase(), Phase::Loading);
        assert_eq!(ctl.guesses(), 0);
        assert_eq!(ctl.hints_used(), 0);
        assert_eq!(ctl.revealed_hints(), RevealedHints::default());
        assert!(ctl.subject().is_none());
    }
}
