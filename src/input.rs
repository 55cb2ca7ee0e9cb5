use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::Direction;
use crate::session::FrameInput;

/// Frames a movement key counts as held after a press when the terminal
/// cannot report key releases. Must outlast the keyboard's auto-repeat delay
/// (usually 250-500 ms) so a held key never stutters before repeats arrive.
const HOLD_FRAMES: u8 = 30;

/// Tracks one key that can be held down for continuous input
#[derive(Debug, Default, Clone, Copy)]
struct HeldKey {
    down: bool,
    frames_left: u8,
}

impl HeldKey {
    fn press(&mut self, release_events: bool) {
        if release_events {
            self.down = true;
        } else {
            self.frames_left = HOLD_FRAMES;
        }
    }

    fn release(&mut self) {
        self.down = false;
        self.frames_left = 0;
    }

    fn is_held(&self) -> bool {
        self.down || self.frames_left > 0
    }

    fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: HeldKey,
    right: HeldKey,
}

/// Edge-triggered commands collected since the last frame
#[derive(Debug, Default)]
struct Pending {
    fire: bool,
    reset: bool,
    quit: bool,
    pause: bool,
}

/// Manages input polling and translates raw key events into per-frame input
pub struct InputManager {
    key_state: KeyState,
    pending: Pending,
    /// Whether the terminal reports key releases (keyboard enhancement)
    release_events: bool,
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            pending: Pending::default(),
            release_events,
        }
    }

    /// Drains every queued terminal event without blocking.
    /// Should be called once per frame before [`InputManager::frame_input`].
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Processes a key event and updates key state and pending commands
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_command(key_event);
                self.handle_movement_press(key_event.code);
            }
            // Auto-repeat keeps movement alive but never re-triggers commands
            KeyEventKind::Repeat => self.handle_movement_press(key_event.code),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_command(&mut self, key_event: KeyEvent) {
        let ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c {
            self.pending.quit = true;
            return;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.pending.quit = true,
            KeyCode::Char(' ') => self.pending.fire = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.pending.reset = true,
            KeyCode::Char('p') | KeyCode::Char('P') => self.pending.pause = true,
            _ => {}
        }
    }

    fn handle_movement_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left.press(self.release_events);
                self.key_state.right.release();
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right.press(self.release_events);
                self.key_state.left.release();
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left.release();
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right.release();
            }
            _ => {}
        }
    }

    /// Resolves this frame's input and clears the one-shot commands.
    pub fn frame_input(&mut self) -> FrameInput {
        // Right wins if both somehow end up held
        let direction = if self.key_state.right.is_held() {
            Direction::Right
        } else if self.key_state.left.is_held() {
            Direction::Left
        } else {
            Direction::Idle
        };

        let pending = std::mem::take(&mut self.pending);
        self.key_state.left.tick();
        self.key_state.right.tick();

        FrameInput {
            direction,
            fire: pending.fire,
            reset: pending.reset,
            quit: pending.quit,
            pause: pending.pause,
        }
    }
}
