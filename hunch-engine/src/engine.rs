use hunch_core::{Bracket, Candidate, Direction, Step};
use hunch_expr::parse_bound;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    history::{History, Snapshot},
    sampler::{sample, tweak},
};

/// Engine configuration: the quantization step and the seed bound texts.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub step: Step,
    pub initial_lower: String,
    pub initial_upper: String,
}

impl Default for Config {
    /// Bounds 0 to 9999 at two decimal places.
    fn default() -> Self {
        Self {
            step: Step::default(),
            initial_lower: "0".to_string(),
            initial_upper: "9999".to_string(),
        }
    }
}

/// Observable engine state, packaged for a presentation layer to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Lower bound as decimal text.
    pub lower: String,
    /// Upper bound as decimal text.
    pub upper: String,
    /// Candidate as decimal text, `"collision"`, or `"NaN"`.
    pub candidate: String,
    /// Description of the last feedback action, empty after a re-seed.
    pub message: String,
    /// How many feedback steps can still be undone.
    pub undo_depth: usize,
    /// Whether asking for a lower candidate could change the bracket.
    pub can_go_lower: bool,
    /// Whether asking for a higher candidate could change the bracket.
    pub can_go_higher: bool,
}

/// The interval-narrowing decision engine.
///
/// Owns the bracket, the current candidate, the last feedback message, and
/// the undo history. Every operation runs to completion synchronously, and
/// invalid or collapsed states are values surfaced through [`Candidate`],
/// never errors.
#[derive(Debug)]
pub struct Engine {
    step: Step,
    bracket: Bracket,
    candidate: Candidate,
    message: String,
    history: History,
}

impl Engine {
    /// Creates an engine seeded from the configured bound texts.
    ///
    /// The message starts as a hint naming the seed bounds; the first
    /// re-seed clears it.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut engine = Self {
            step: config.step,
            bracket: Bracket::new(f64::NAN, f64::NAN),
            candidate: Candidate::Invalid,
            message: String::new(),
            history: History::default(),
        };
        engine.reseed(&config.initial_lower, &config.initial_upper);
        if engine.bracket.is_finite() {
            engine.message = format!(
                "{} is too low / {} is too high",
                engine.step.format(engine.bracket.lower()),
                engine.step.format(engine.bracket.upper()),
            );
        }
        engine
    }

    /// Re-seeds the bracket from raw bound texts.
    ///
    /// Called on every bound edit: parses both texts (NaN on failure),
    /// draws a fresh candidate with no directional bias, and drops the
    /// history and the last message. Edited bounds start a new session.
    pub fn reseed(&mut self, lower_text: &str, upper_text: &str) {
        let lower = parse_bound(lower_text);
        let upper = parse_bound(upper_text);
        self.bracket = Bracket::new(lower, upper);
        debug!(lower, upper, "reseeded bracket");
        self.recompute(None);
        self.history.clear();
        self.message.clear();
    }

    /// Applies one step of directional feedback about the current candidate.
    ///
    /// `Direction::Lower` means the candidate was too high, so the candidate
    /// becomes the new upper bound; `Direction::Higher` the reverse. The
    /// prior state is recorded first. With no candidate value on offer (a
    /// collapsed or invalid bracket) this is a no-op.
    pub fn apply_feedback(&mut self, dir: Direction) {
        let Some(value) = self.candidate.value() else {
            return;
        };
        debug!(
            ?dir,
            lower = self.bracket.lower(),
            upper = self.bracket.upper(),
            "narrowing"
        );
        self.history.record(Snapshot {
            bracket: self.bracket,
            candidate: self.candidate,
            message: self.message.clone(),
        });
        let moved = tweak(
            value,
            self.bracket.lower(),
            self.bracket.upper(),
            self.step,
            Some(dir),
        );
        match dir {
            Direction::Lower => {
                self.bracket.set_upper(moved);
                self.message = format!("{} is too high", self.step.format(value));
            }
            Direction::Higher => {
                self.bracket.set_lower(moved);
                self.message = format!("{} is too low", self.step.format(value));
            }
        }
        self.recompute(Some(dir));
    }

    /// Reverts the most recent feedback step.
    ///
    /// Returns false, leaving all state untouched, when there is nothing to
    /// undo. Undo itself is never recorded: repeated calls walk the history
    /// back one entry at a time.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        debug!("undo");
        self.bracket = snapshot.bracket;
        self.candidate = snapshot.candidate;
        self.message = snapshot.message;
        true
    }

    /// Whether another narrowing step in `dir` could change the bracket.
    ///
    /// Derived on demand for the presentation layer to enable or disable
    /// its controls.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn can_narrow(&self, dir: Direction) -> bool {
        let Some(value) = self.candidate.value() else {
            return false;
        };
        if self.bracket.is_inverted() {
            return false;
        }
        match dir {
            Direction::Lower => self.bracket.lower() != value,
            Direction::Higher => self.bracket.upper() != value,
        }
    }

    /// Returns the displayable state in one package.
    #[must_use]
    pub fn view(&self) -> View {
        View {
            lower: self.step.format(self.bracket.lower()),
            upper: self.step.format(self.bracket.upper()),
            candidate: self.candidate.render(self.step),
            message: self.message.clone(),
            undo_depth: self.history.len(),
            can_go_lower: self.can_narrow(Direction::Lower),
            can_go_higher: self.can_narrow(Direction::Higher),
        }
    }

    /// Returns the configured quantization step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Returns the current bracket.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    /// Returns the current candidate.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        self.candidate
    }

    /// Returns the last feedback message, empty after a re-seed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how many feedback steps can still be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Redraws the candidate for the current bracket.
    fn recompute(&mut self, dir: Option<Direction>) {
        self.candidate = if !self.bracket.is_finite() {
            Candidate::Invalid
        } else if self.bracket.is_collapsed(self.step) {
            Candidate::Collision
        } else {
            let drawn = sample(self.bracket.lower(), self.bracket.upper());
            Candidate::Value(tweak(
                drawn,
                self.bracket.lower(),
                self.bracket.upper(),
                self.step,
                dir,
            ))
        };
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
