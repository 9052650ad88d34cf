//! Key mapping from terminal events to game commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    Restart,
}

/// Map keyboard input to game commands.
///
/// Arrows, WASD and vi keys (hjkl) slide the board; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Direction::Right,
        KeyCode::Char('r' | 'R') => return Some(InputCommand::Restart),
        _ => return None,
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    Some(InputCommand::Move(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Option<InputCommand> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), Some(InputCommand::Move(Direction::Up)));
        assert_eq!(press(KeyCode::Down), Some(InputCommand::Move(Direction::Down)));
        assert_eq!(press(KeyCode::Left), Some(InputCommand::Move(Direction::Left)));
        assert_eq!(press(KeyCode::Right), Some(InputCommand::Move(Direction::Right)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(press(KeyCode::Char('w')), Some(InputCommand::Move(Direction::Up)));
        assert_eq!(press(KeyCode::Char('J')), Some(InputCommand::Move(Direction::Down)));
        assert_eq!(press(KeyCode::Char('h')), Some(InputCommand::Move(Direction::Left)));
        assert_eq!(press(KeyCode::Char('D')), Some(InputCommand::Move(Direction::Right)));
        assert_eq!(press(KeyCode::Char('r')), Some(InputCommand::Restart));
        assert_eq!(press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_chords_are_not_moves() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
