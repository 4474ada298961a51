//! Actions that can be triggered by keybindings
//!
//! Keys are first resolved to an [`Action`] for the current [`KeyContext`],
//! then the app applies the action. This keeps key handling testable without
//! a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::CHANNELS;

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Expand or collapse the system log panel
    ToggleLog,
    /// Jump to nav entry by number (1-4)
    NavigateTo(usize),
    /// Move keyboard focus to the next nav label or field
    FocusNext,
    /// Move keyboard focus to the previous nav label or field
    FocusPrev,
    /// Activate the focused nav label
    Activate,
    /// Leave the nav bar and return focus to the page
    Unfocus,

    // ========== Pages ==========
    SelectNext,
    SelectPrev,
    OpenSelected,
    NextFilter,
    PrevFilter,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToTop,
    /// Return from a project to the archive
    Back,
    GoHome,
    /// Return to the page visited before this one
    GoBack,
    OpenGithub,
    /// Open a direct contact channel by index
    OpenChannel(usize),
    DownloadCv,

    // ========== Form Editing ==========
    Insert(char),
    InsertNewline,
    Backspace,
    Delete,
    DeleteWordBack,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
    Submit,
}

/// Where keyboard input is going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Nav,
    Home,
    Archive,
    Detail,
    /// Editing a contact form text field
    ContactField { multiline: bool },
    /// Contact form with the submit button focused
    ContactButton,
    NotFound,
}

impl Action {
    /// Resolve a key press in `context`
    pub fn from_key(context: KeyContext, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global shortcuts (work in any context)
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(Action::Quit),
            KeyCode::Char('l') if ctrl => return Some(Action::ToggleLog),
            KeyCode::Tab => return Some(Action::FocusNext),
            KeyCode::BackTab => return Some(Action::FocusPrev),
            _ => {}
        }

        if let KeyContext::ContactField { multiline } = context {
            return Self::from_edit_key(key, multiline);
        }

        if let KeyCode::Char(c @ '1'..='4') = key.code {
            return Some(Action::NavigateTo(c as usize - '1' as usize));
        }

        match (context, key.code) {
            (_, KeyCode::Char('q')) => Some(Action::Quit),
            (_, KeyCode::Char('l')) => Some(Action::ToggleLog),

            (KeyContext::Nav, KeyCode::Right) => Some(Action::FocusNext),
            (KeyContext::Nav, KeyCode::Left) => Some(Action::FocusPrev),
            (KeyContext::Nav, KeyCode::Enter) => Some(Action::Activate),
            (KeyContext::Nav, KeyCode::Esc | KeyCode::Down) => Some(Action::Unfocus),

            (KeyContext::Home, KeyCode::Char('d')) => Some(Action::DownloadCv),
            (KeyContext::Home | KeyContext::Detail, KeyCode::Up | KeyCode::Char('k')) => {
                Some(Action::ScrollUp(1))
            }
            (KeyContext::Home | KeyContext::Detail, KeyCode::Down | KeyCode::Char('j')) => {
                Some(Action::ScrollDown(1))
            }
            (KeyContext::Home | KeyContext::Detail, KeyCode::PageUp) => Some(Action::ScrollUp(10)),
            (KeyContext::Home | KeyContext::Detail, KeyCode::PageDown | KeyCode::Char(' ')) => {
                Some(Action::ScrollDown(10))
            }
            (KeyContext::Home | KeyContext::Detail, KeyCode::Home | KeyCode::Char('g')) => {
                Some(Action::ScrollToTop)
            }

            (KeyContext::Archive, KeyCode::Down | KeyCode::Char('j')) => Some(Action::SelectNext),
            (KeyContext::Archive, KeyCode::Up | KeyCode::Char('k')) => Some(Action::SelectPrev),
            (KeyContext::Archive, KeyCode::Enter) => Some(Action::OpenSelected),
            (KeyContext::Archive, KeyCode::Char('f')) => Some(Action::NextFilter),
            (KeyContext::Archive, KeyCode::Char('F')) => Some(Action::PrevFilter),

            (KeyContext::Detail, KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace) => {
                Some(Action::Back)
            }
            (KeyContext::Detail, KeyCode::Char('o')) => Some(Action::OpenGithub),

            (KeyContext::ContactButton, KeyCode::Enter) => Some(Action::Submit),
            (KeyContext::ContactButton, KeyCode::Char('s')) if ctrl => Some(Action::Submit),
            (KeyContext::ContactButton, KeyCode::Up) => Some(Action::FocusPrev),
            (KeyContext::ContactButton, KeyCode::Char(c)) if !ctrl => CHANNELS
                .iter()
                .position(|channel| channel.key == c)
                .map(Action::OpenChannel),

            (KeyContext::NotFound, KeyCode::Char('h') | KeyCode::Enter) => Some(Action::GoHome),
            (KeyContext::NotFound, KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc) => {
                Some(Action::GoBack)
            }

            _ => None,
        }
    }

    fn from_edit_key(key: KeyEvent, multiline: bool) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Submit),
            KeyCode::Char('w') if ctrl => Some(Action::DeleteWordBack),
            KeyCode::Char('a') if ctrl => Some(Action::MoveCursorStart),
            KeyCode::Char('e') if ctrl => Some(Action::MoveCursorEnd),
            KeyCode::Backspace if alt => Some(Action::DeleteWordBack),
            KeyCode::Enter if multiline && !alt => Some(Action::InsertNewline),
            KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::Esc => Some(Action::Unfocus),
            KeyCode::Up if !multiline => Some(Action::FocusPrev),
            KeyCode::Down if !multiline => Some(Action::FocusNext),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Delete => Some(Action::Delete),
            KeyCode::Left => Some(Action::MoveCursorLeft),
            KeyCode::Right => Some(Action::MoveCursorRight),
            KeyCode::Home => Some(Action::MoveCursorStart),
            KeyCode::End => Some(Action::MoveCursorEnd),
            KeyCode::Char(c) if !ctrl && !alt => Some(Action::Insert(c)),
            _ => None,
        }
    }

    /// Get a human-readable description of the action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::ToggleLog => "Toggle log",
            Action::NavigateTo(_) => "Go to page",
            Action::FocusNext => "Next",
            Action::FocusPrev => "Previous",
            Action::Activate => "Open",
            Action::Unfocus => "Back to page",
            Action::SelectNext => "Select next",
            Action::SelectPrev => "Select previous",
            Action::OpenSelected => "Open file",
            Action::NextFilter | Action::PrevFilter => "Filter",
            Action::ScrollUp(_) => "Scroll up",
            Action::ScrollDown(_) => "Scroll down",
            Action::ScrollToTop => "Top",
            Action::Back => "Back",
            Action::GoHome => "Return home",
            Action::GoBack => "Go back",
            Action::OpenGithub => "Open source",
            Action::OpenChannel(_) => "Open channel",
            Action::DownloadCv => "Download CV",
            Action::Insert(_) => "Type",
            Action::InsertNewline => "New line",
            Action::Backspace => "Backspace",
            Action::Delete => "Delete",
            Action::DeleteWordBack => "Delete word",
            Action::MoveCursorLeft => "Move left",
            Action::MoveCursorRight => "Move right",
            Action::MoveCursorStart => "Move to start",
            Action::MoveCursorEnd => "Move to end",
            Action::Submit => "Send",
        }
    }
}

/// Key hints shown in the footer for `context`
pub fn key_hints(context: KeyContext) -> Vec<(&'static str, &'static str)> {
    let hint = |key, action: Action| (key, action.description());
    match context {
        KeyContext::Nav => vec![
            ("←/→", "Hover"),
            hint("Enter", Action::Activate),
            hint("Esc", Action::Unfocus),
            hint("l", Action::ToggleLog),
            hint("q", Action::Quit),
        ],
        KeyContext::Home => vec![
            ("Tab", "Menu"),
            ("↑/↓", "Scroll"),
            hint("d", Action::DownloadCv),
            hint("l", Action::ToggleLog),
            hint("q", Action::Quit),
        ],
        KeyContext::Archive => vec![
            ("↑/↓", "Select"),
            hint("Enter", Action::OpenSelected),
            hint("f", Action::NextFilter),
            hint("l", Action::ToggleLog),
            hint("q", Action::Quit),
        ],
        KeyContext::Detail => vec![
            ("↑/↓", "Scroll"),
            hint("o", Action::OpenGithub),
            hint("Esc", Action::Back),
            hint("l", Action::ToggleLog),
        ],
        KeyContext::ContactField { .. } => vec![
            hint("Tab", Action::FocusNext),
            hint("Ctrl+S", Action::Submit),
            hint("Esc", Action::Unfocus),
            hint("Ctrl+L", Action::ToggleLog),
        ],
        KeyContext::ContactButton => vec![
            hint("Enter", Action::Submit),
            ("e/g/i", Action::OpenChannel(0).description()),
            hint("Esc", Action::Unfocus),
            hint("l", Action::ToggleLog),
        ],
        KeyContext::NotFound => vec![
            hint("h", Action::GoHome),
            hint("b", Action::GoBack),
            hint("q", Action::Quit),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_number_keys_navigate_outside_fields() {
        assert_eq!(
            Action::from_key(KeyContext::Home, key(KeyCode::Char('2'))),
            Some(Action::NavigateTo(1))
        );
        assert_eq!(
            Action::from_key(
                KeyContext::ContactField { multiline: false },
                key(KeyCode::Char('2'))
            ),
            Some(Action::Insert('2'))
        );
    }

    #[test]
    fn test_fields_capture_letters() {
        let field = KeyContext::ContactField { multiline: true };
        assert_eq!(
            Action::from_key(field, key(KeyCode::Char('q'))),
            Some(Action::Insert('q'))
        );
        assert_eq!(
            Action::from_key(field, key(KeyCode::Enter)),
            Some(Action::InsertNewline)
        );
        assert_eq!(Action::from_key(field, ctrl('s')), Some(Action::Submit));
        assert_eq!(Action::from_key(field, ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_single_line_enter_moves_on() {
        assert_eq!(
            Action::from_key(
                KeyContext::ContactField { multiline: false },
                key(KeyCode::Enter)
            ),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn test_archive_keys() {
        assert_eq!(
            Action::from_key(KeyContext::Archive, key(KeyCode::Char('f'))),
            Some(Action::NextFilter)
        );
        assert_eq!(
            Action::from_key(KeyContext::Archive, key(KeyCode::Enter)),
            Some(Action::OpenSelected)
        );
        assert_eq!(
            Action::from_key(KeyContext::Detail, key(KeyCode::Esc)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_not_found_home_and_back() {
        assert_eq!(
            Action::from_key(KeyContext::NotFound, key(KeyCode::Char('h'))),
            Some(Action::GoHome)
        );
        assert_eq!(
            Action::from_key(KeyContext::NotFound, key(KeyCode::Char('b'))),
            Some(Action::GoBack)
        );
        assert_eq!(
            Action::from_key(KeyContext::NotFound, key(KeyCode::Esc)),
            Some(Action::GoBack)
        );
    }

    #[test]
    fn test_channel_keys_only_off_fields() {
        assert_eq!(
            Action::from_key(KeyContext::ContactButton, key(KeyCode::Char('g'))),
            Some(Action::OpenChannel(1))
        );
        assert_eq!(
            Action::from_key(
                KeyContext::ContactField { multiline: false },
                key(KeyCode::Char('g'))
            ),
            Some(Action::Insert('g'))
        );
    }

    #[test]
    fn test_tab_is_global() {
        for context in [KeyContext::Home, KeyContext::Nav, KeyContext::ContactButton] {
            assert_eq!(
                Action::from_key(context, key(KeyCode::Tab)),
                Some(Action::FocusNext)
            );
        }
    }
}
