use std::collections::HashMap;

use winit::event as ev;
use winit::keyboard::PhysicalKey;

use crate::error::{Error, Result};

pub use ev::ElementState;
pub use winit::keyboard::KeyCode as Key;

/// Track the state of the keyboard so that it can be looked up from a single location
/// instead of moving window events around.
///
/// A game gets a reference to this every tick. Keys are aged by one tick at the end
/// of every tick, so "pressed this frame" and "released this frame" queries
/// are true for exactly one tick.
#[derive(Clone, Debug)]
pub struct InputCache {
    keyboard: HashMap<Key, AgedState>,
    quit_requested: bool,
}

impl InputCache {
    pub fn new() -> Self {
        InputCache {
            // immediately allocate enough space to fit every key the user presses
            keyboard: HashMap::with_capacity(128),
            quit_requested: false,
        }
    }

    /// Do maintenance such as updating the ages of pressed keys.
    /// Call this at the end of every tick.
    pub fn tick(&mut self) {
        for state in self.keyboard.values_mut() {
            state.age = state.age.saturating_add(1);
        }
    }

    //
    // Getters
    //

    /// Get the state of a keyboard key along with the number of ticks since it last changed.
    /// Returns None if the key has never been touched.
    pub fn get_key_state(&self, key: Key) -> Option<&AgedState> {
        self.keyboard.get(&key)
    }

    /// True if the requested key is currently held down
    /// (for fewer ticks than age_limit if provided), false otherwise.
    pub fn is_key_pressed(&self, key: Key, age_limit: Option<u32>) -> bool {
        match self.get_key_state(key) {
            None => false,
            Some(AgedState {
                state: ElementState::Released,
                ..
            }) => false,
            Some(AgedState {
                age,
                state: ElementState::Pressed,
            }) => {
                if let Some(al) = age_limit {
                    *age <= al
                } else {
                    true
                }
            }
        }
    }

    /// True if the key is currently held down.
    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.is_key_pressed(key, None)
    }

    /// True if the key went down during this tick.
    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.is_key_pressed(key, Some(0))
    }

    /// True if the key went up during this tick.
    pub fn key_released(&self, key: Key) -> bool {
        matches!(
            self.get_key_state(key),
            Some(AgedState {
                state: ElementState::Released,
                age: 0,
            })
        )
    }

    /// Get the state of an axis defined by a positive and negative key.
    /// Prefers the positive key if both are pressed.
    pub fn get_key_axis_state(&self, pos_key: Key, neg_key: Key) -> KeyAxisState {
        use ElementState::*;
        use KeyAxisState::*;
        match (
            self.get_key_state(pos_key).map(|s| s.state),
            self.get_key_state(neg_key).map(|s| s.state),
        ) {
            (Some(Pressed), _) => Pos,
            (_, Some(Pressed)) => Neg,
            _ => Zero,
        }
    }

    /// True once something asked the game to stop, e.g. the window was closed.
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    //
    // Trackers
    //

    /// Ask the game loop to stop after the current tick.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Track a key going up or down.
    ///
    /// Key repeat events for a key that's already held don't reset its age.
    pub fn track_key(&mut self, key: Key, new_state: ElementState) {
        self.keyboard
            .entry(key)
            .and_modify(|e| {
                if e.state != new_state {
                    *e = AgedState::new(new_state);
                }
            })
            .or_insert(AgedState::new(new_state));
    }

    /// Perform whatever tracking is available for the given window event.
    pub fn track_window_event(&mut self, event: &ev::WindowEvent) {
        use ev::WindowEvent::*;
        match event {
            KeyboardInput {
                event:
                    ev::KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.track_key(*code, *state),
            CloseRequested => self.request_quit(),
            _ => (),
        }
    }
}

impl Default for InputCache {
    fn default() -> Self {
        Self::new()
    }
}

//

/// The state of a key and time in number of ticks since last state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgedState {
    pub state: ElementState,
    pub age: u32,
}

impl AgedState {
    pub fn new(state: ElementState) -> Self {
        AgedState { state, age: 0 }
    }
}

impl Default for AgedState {
    fn default() -> Self {
        Self::new(ElementState::Released)
    }
}

/// The state of an input axis defined by a positive and negative key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAxisState {
    Pos,
    Zero,
    Neg,
}

impl KeyAxisState {
    /// `1.0`, `0.0` or `-1.0`, handy for multiplying with a speed.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            KeyAxisState::Pos => 1.0,
            KeyAxisState::Zero => 0.0,
            KeyAxisState::Neg => -1.0,
        }
    }
}

//
// Key lookup by name
//

/// Look up the key that types the given character on a US layout.
///
/// Letters are case-insensitive. Only letters, digits and space are supported.
pub fn key_from_char(c: char) -> Result<Key> {
    use Key as K;
    const LETTERS: [Key; 26] = [
        K::KeyA, K::KeyB, K::KeyC, K::KeyD, K::KeyE, K::KeyF, K::KeyG, K::KeyH, K::KeyI, K::KeyJ,
        K::KeyK, K::KeyL, K::KeyM, K::KeyN, K::KeyO, K::KeyP, K::KeyQ, K::KeyR, K::KeyS, K::KeyT,
        K::KeyU, K::KeyV, K::KeyW, K::KeyX, K::KeyY, K::KeyZ,
    ];
    const DIGITS: [Key; 10] = [
        K::Digit0, K::Digit1, K::Digit2, K::Digit3, K::Digit4, K::Digit5, K::Digit6, K::Digit7,
        K::Digit8, K::Digit9,
    ];

    let lower = c.to_ascii_lowercase();
    match lower {
        'a'..='z' => Ok(LETTERS[(lower as u8 - b'a') as usize]),
        '0'..='9' => Ok(DIGITS[(lower as u8 - b'0') as usize]),
        ' ' => Ok(K::Space),
        _ => Err(Error::UnknownKey(c.to_string())),
    }
}

/// Like [`key_from_char`], but for a string that must be exactly one character long.
pub fn key_from_str(s: &str) -> Result<Key> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => key_from_char(c),
        _ => Err(Error::UnknownKey(s.to_string())),
    }
}
