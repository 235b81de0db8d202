//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Key releases map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('x') => {
            Some(GameAction::Rotate)
        }

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Enter | KeyCode::Char('r') => Some(GameAction::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(press(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Char('J')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(press(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('k')), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('W')), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('x')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(press(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(press(KeyCode::Enter), Some(GameAction::Start));
        assert_eq!(press(KeyCode::Char('R')), Some(GameAction::Start));
        assert_eq!(press(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_release_and_ctrl_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
