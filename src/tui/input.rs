//! Key bindings for the game screens.

use crate::games::numfact::{Letter, Phase, SortKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which part of the playing screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Letter keys guess letters.
    #[default]
    Letters,
    /// Typing edits the fact guess.
    FactField,
    /// Typing edits the number guess.
    NumberField,
}

impl Focus {
    /// Next focus in Tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::Letters => Focus::FactField,
            Focus::FactField => Focus::NumberField,
            Focus::NumberField => Focus::Letters,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess a letter.
    Guess(Letter),
    /// Reveal the whole fact.
    Reveal,
    /// Submit both guesses.
    Submit,
    /// Move focus to the next field.
    NextFocus,
    /// Append a character to the focused field.
    Type(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Sort the scoreboard by a column.
    ToggleSort(SortKey),
    /// Fetch a fact and start a round.
    NewRound,
    /// Fetch a new item for the trivia panel.
    RefreshTrivia,
    /// Leave the game.
    Quit,
    /// Key has no binding here.
    Ignore,
}

/// Maps a key press to a command for the current phase and focus.
pub fn command_for(phase: Phase, focus: Focus, key: KeyEvent) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match phase {
        Phase::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Command::NewRound,
            KeyCode::Char('t') => Command::RefreshTrivia,
            KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
            _ => Command::Ignore,
        },
        Phase::Playing => match (key.code, focus) {
            (KeyCode::Esc, _) => Command::Quit,
            (KeyCode::Tab, _) => Command::NextFocus,
            (KeyCode::Enter, _) => Command::Submit,
            (KeyCode::Char('r'), _) if ctrl => Command::Reveal,
            (KeyCode::Char(c), Focus::Letters) => {
                Letter::new(c).map_or(Command::Ignore, Command::Guess)
            }
            (KeyCode::Char(c), Focus::FactField) => Command::Type(c),
            (KeyCode::Char(c), Focus::NumberField) if is_number_char(c) => Command::Type(c),
            (KeyCode::Backspace, Focus::FactField | Focus::NumberField) => Command::Backspace,
            _ => Command::Ignore,
        },
        Phase::Scored => match key.code {
            KeyCode::Char('s') => Command::ToggleSort(SortKey::Score),
            KeyCode::Char('n') => Command::ToggleSort(SortKey::Number),
            KeyCode::Char('f') => Command::ToggleSort(SortKey::Fact),
            KeyCode::Enter | KeyCode::Char('p') => Command::NewRound,
            KeyCode::Char('t') => Command::RefreshTrivia,
            KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
            _ => Command::Ignore,
        },
    }
}

/// Characters a number field accepts.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_focus_guesses() {
        let cmd = command_for(Phase::Playing, Focus::Letters, key(KeyCode::Char('E')));
        assert_eq!(cmd, Command::Guess(Letter::new('e').expect("letter")));
        let cmd = command_for(Phase::Playing, Focus::Letters, key(KeyCode::Char('3')));
        assert_eq!(cmd, Command::Ignore);
    }

    #[test]
    fn test_number_field_filters_input() {
        let digit = command_for(Phase::Playing, Focus::NumberField, key(KeyCode::Char('7')));
        assert_eq!(digit, Command::Type('7'));
        let letter = command_for(Phase::Playing, Focus::NumberField, key(KeyCode::Char('x')));
        assert_eq!(letter, Command::Ignore);
    }

    #[test]
    fn test_ctrl_r_reveals_from_any_focus() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        for focus in [Focus::Letters, Focus::FactField, Focus::NumberField] {
            assert_eq!(command_for(Phase::Playing, focus, ctrl_r), Command::Reveal);
        }
    }

    #[test]
    fn test_scoreboard_sort_keys() {
        let cmd = command_for(Phase::Scored, Focus::Letters, key(KeyCode::Char('f')));
        assert_eq!(cmd, Command::ToggleSort(SortKey::Fact));
    }

    #[test]
    fn test_t_refreshes_trivia_outside_play() {
        let t = key(KeyCode::Char('t'));
        assert_eq!(command_for(Phase::Welcome, Focus::Letters, t), Command::RefreshTrivia);
        assert_eq!(command_for(Phase::Scored, Focus::Letters, t), Command::RefreshTrivia);
        let guess = Command::Guess(Letter::new('t').expect("letter"));
        assert_eq!(command_for(Phase::Playing, Focus::Letters, t), guess);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Letters.next().next().next(), Focus::Letters);
    }
}
