//! Application state for the terminal UI.

use super::input::{Command, Focus, command_for};
use crate::games::numfact::{Fact, RoundEngine};
use crossterm::event::KeyEvent;
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Fetch a fact and start a new round.
    NewRound,
    /// Fetch a new trivia item for the side panel.
    RefreshTrivia,
    /// Exit the UI.
    Quit,
}

/// Engine plus the UI-only state around it.
#[derive(Debug, Default)]
pub struct App {
    engine: RoundEngine,
    focus: Focus,
    status: Option<String>,
    trivia: Option<Fact>,
}

impl App {
    /// Creates an app on the welcome screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game engine.
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Focused part of the playing screen.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Transient status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Sets a transient status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Current item of the trivia panel, if one has been fetched.
    pub fn trivia(&self) -> Option<&Fact> {
        self.trivia.as_ref()
    }

    /// Replaces the trivia panel item and clears the status line.
    #[instrument(skip(self, trivia), fields(number = trivia.number()))]
    pub fn set_trivia(&mut self, trivia: Fact) {
        self.trivia = Some(trivia);
        self.status = None;
    }

    /// Starts a round on a freshly fetched fact.
    #[instrument(skip(self, fact))]
    pub fn start_round(&mut self, fact: Fact) {
        self.engine.start_round(fact);
        self.focus = Focus::Letters;
        self.status = None;
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let command = command_for(self.engine.phase(), self.focus, key);
        debug!(?command, "Key mapped");
        self.apply(command)
    }

    fn apply(&mut self, command: Command) -> AppAction {
        match command {
            Command::Guess(letter) => self.engine.guess_letter(letter),
            Command::Reveal => self.engine.reveal_all(),
            Command::Submit => {
                if self.engine.can_submit() {
                    self.engine.submit();
                    self.status = None;
                } else {
                    self.set_status("Enter both a fact and a number before submitting");
                }
            }
            Command::NextFocus => self.focus = self.focus.next(),
            Command::Type(c) => self.edit_field(|field| field.push(c)),
            Command::Backspace => self.edit_field(|field| {
                field.pop();
            }),
            Command::ToggleSort(key) => self.engine.history_mut().toggle_sort(key),
            Command::NewRound => return AppAction::NewRound,
            Command::RefreshTrivia => return AppAction::RefreshTrivia,
            Command::Quit => return AppAction::Quit,
            Command::Ignore => {}
        }
        AppAction::Continue
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(round) = self.engine.round() else {
            return;
        };
        match self.focus {
            Focus::FactField => {
                let mut text = round.user_fact().to_string();
                edit(&mut text);
                self.engine.set_user_fact(text);
            }
            Focus::NumberField => {
                let mut text = round.user_number().unwrap_or_default().to_string();
                edit(&mut text);
                self.engine.set_user_number(text);
            }
            Focus::Letters => {}
        }
    }
}
