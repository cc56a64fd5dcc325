use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use minesweeper_solver::board::Status;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// High-level input actions translated from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Dir),
    Reveal,
    Flag,
    Chord,
    Restart,
    ChangeDifficulty,
    Quit,
}

impl InputAction {
    /// Whether this action acts on the board itself, as opposed to the
    /// session around it (restart/difficulty/quit always apply).
    fn is_gameplay(self) -> bool {
        matches!(self, Self::Move(_) | Self::Reveal | Self::Flag | Self::Chord)
    }
}

/// Translate a crossterm Event into an optional InputAction, given the
/// board's current status.
///
/// Gameplay actions (movement, reveal, flag, chord) are suppressed once the
/// round has ended — only `Restart`, `ChangeDifficulty`, and `Quit` still
/// reach a finished board, mirroring a real client refusing clicks on a
/// swept board.
///
/// Supported bindings:
/// - Movement: Arrow keys, WASD (W/A/S/d). Note: uppercase 'D' is reserved for ChangeDifficulty.
/// - Reveal: Enter or Space
/// - Flag: F/f
/// - Chord: C/c
/// - Restart: R/r
/// - ChangeDifficulty: D (uppercase)
/// - Quit: Q/q or Ctrl-C
pub fn translate_event(ev: Event, status: Status) -> Option<InputAction> {
    let action = translate_key(ev)?;
    if status != Status::Playing && action.is_gameplay() {
        return None;
    }
    Some(action)
}

fn translate_key(ev: Event) -> Option<InputAction> {
    match ev {
        Event::Key(KeyEvent { code, modifiers, .. }) => {
            // Handle Ctrl-C as Quit regardless of code case
            if modifiers.contains(KeyModifiers::CONTROL) {
                if matches!(code, KeyCode::Char('c') | KeyCode::Char('C')) {
                    return Some(InputAction::Quit);
                }
            }

            match code {
                // Movement via arrows
                KeyCode::Left => Some(InputAction::Move(Dir::Left)),
                KeyCode::Right => Some(InputAction::Move(Dir::Right)),
                KeyCode::Up => Some(InputAction::Move(Dir::Up)),
                KeyCode::Down => Some(InputAction::Move(Dir::Down)),

                // Reveal via Enter/Space
                KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Reveal),

                // Chord
                KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Chord),

                // Flag
                KeyCode::Char('f') | KeyCode::Char('F') => Some(InputAction::Flag),

                // Restart
                KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

                // Change difficulty (upper-case D)
                KeyCode::Char('D') => Some(InputAction::ChangeDifficulty),

                // Quit
                KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),

                // Movement via WASD (lowercase/uppercase except 'D' uppercase)
                KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::Move(Dir::Left)),
                KeyCode::Char('d') /* lowercase only */ => Some(InputAction::Move(Dir::Right)),
                KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::Move(Dir::Up)),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::Move(Dir::Down)),

                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn gameplay_actions_pass_through_while_playing() {
        assert_eq!(translate_event(key(KeyCode::Char(' ')), Status::Playing), Some(InputAction::Reveal));
        assert_eq!(translate_event(key(KeyCode::Char('f')), Status::Playing), Some(InputAction::Flag));
    }

    #[test]
    fn gameplay_actions_are_suppressed_once_the_round_ends() {
        assert_eq!(translate_event(key(KeyCode::Char(' ')), Status::Lose), None);
        assert_eq!(translate_event(key(KeyCode::Left), Status::Win), None);
    }

    #[test]
    fn session_actions_always_pass_through() {
        assert_eq!(translate_event(key(KeyCode::Char('r')), Status::Lose), Some(InputAction::Restart));
        assert_eq!(translate_event(key(KeyCode::Char('D')), Status::Win), Some(InputAction::ChangeDifficulty));
        assert_eq!(translate_event(key(KeyCode::Char('q')), Status::Lose), Some(InputAction::Quit));
    }
}

