//! Mapping from terminal events to input events.

use crate::types::{Arena, PADDLE_WIDTH};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Input events in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved (with or without a button held)
    PointerMoved { col: u16, row: u16 },
    /// Any mouse button went down
    Click { col: u16, row: u16 },
    /// Quit key
    Quit,
}

/// Map a terminal event to an input event.
pub fn handle_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(InputEvent::Quit)
        }
        _ => None,
    }
}

/// Map a mouse event; drags count as moves.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved { col, row }),
        MouseEventKind::Down(_) => Some(InputEvent::Click { col, row }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Paddle x for a pointer at `pointer_x`: centered on the pointer, clamped
/// into `[0, arena.width - PADDLE_WIDTH]`.
pub fn paddle_x_for_pointer(pointer_x: i32, arena: Arena) -> i32 {
    pointer_x
        .saturating_sub(PADDLE_WIDTH / 2)
        .clamp(0, arena.max_paddle_x())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_pointer_events() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 3, 4)),
            Some(InputEvent::PointerMoved { col: 3, row: 4 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
            Some(InputEvent::PointerMoved { col: 5, row: 6 })
        );
    }

    #[test]
    fn test_click_events() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 2)),
            Some(InputEvent::Click { col: 1, row: 2 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 2)),
            Some(InputEvent::Click { col: 1, row: 2 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 2)),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollUp, 1, 2)), None);
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));

        assert_eq!(
            handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('Q')))),
            Some(InputEvent::Quit)
        );
        assert_eq!(handle_event(&Event::Key(KeyEvent::from(KeyCode::Left))), None);
        assert_eq!(handle_event(&Event::Resize(100, 40)), None);
    }

    #[test]
    fn test_paddle_centered_on_pointer() {
        let arena = Arena::new(800, 600);
        assert_eq!(paddle_x_for_pointer(400, arena), 350);
        assert_eq!(paddle_x_for_pointer(10, arena), 0);
        assert_eq!(paddle_x_for_pointer(790, arena), 700);
        assert_eq!(paddle_x_for_pointer(i32::MIN, arena), 0);
        assert_eq!(paddle_x_for_pointer(i32::MAX, arena), 700);
    }
}
