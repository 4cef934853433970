//! Logical input: held keys plus discrete session commands

use crate::sim::{GameState, TickInput};

/// Logical keys the ship responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Reverse,
    Fire,
}

impl Key {
    const fn bit(self) -> u8 {
        match self {
            Key::RotateLeft => 1 << 0,
            Key::RotateRight => 1 << 1,
            Key::Thrust => 1 << 2,
            Key::Reverse => 1 << 3,
            Key::Fire => 1 << 4,
        }
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet(u8);

impl KeySet {
    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }
}

impl TickInput {
    /// Controls for one tick from the held key set
    pub fn from_keys(keys: KeySet) -> Self {
        Self {
            rotate_left: keys.is_down(Key::RotateLeft),
            rotate_right: keys.is_down(Key::RotateRight),
            thrust: keys.is_down(Key::Thrust),
            reverse: keys.is_down(Key::Reverse),
            fire: keys.is_down(Key::Fire),
        }
    }
}

/// Session-level commands, consumed by the outer loop only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Quit,
    Restart,
}

/// Everything the input collaborator reports for one frame
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub keys: KeySet,
    pub commands: Vec<SessionCommand>,
}

/// Source of player input, polled once per frame
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> InputFrame;
}

/// Replays a fixed sequence of frames, then reports nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyset_press_release() {
        let mut keys = KeySet::default();
        keys.press(Key::Thrust);
        keys.press(Key::Fire);
        assert!(keys.is_down(Key::Thrust));
        assert!(keys.is_down(Key::Fire));
        assert!(!keys.is_down(Key::Reverse));

        keys.release(Key::Thrust);
        assert!(!keys.is_down(Key::Thrust));
        assert!(keys.is_down(Key::Fire));
    }

    #[test]
    fn test_tick_input_from_keys() {
        let keys = KeySet::default().with(Key::RotateLeft).with(Key::Reverse);
        let input = TickInput::from_keys(keys);
        assert_eq!(
            input,
            TickInput {
                rotate_left: true,
                reverse: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_scripted_input_runs_dry() {
        let state = GameState::new(1);
        let mut input = ScriptedInput::new([InputFrame {
            keys: KeySet::default().with(Key::Fire),
            commands: vec![SessionCommand::Quit],
        }]);
        let first = input.poll(&state);
        assert!(first.keys.is_down(Key::Fire));
        assert_eq!(first.commands, vec![SessionCommand::Quit]);

        let second = input.poll(&state);
        assert_eq!(second.keys, KeySet::default());
        assert!(second.commands.is_empty());
    }
}
