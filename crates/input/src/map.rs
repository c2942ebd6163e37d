//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up => Some(GameAction::RotateCw),

        // Lifecycle
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Enter => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Enter)));
    }
}
