//! Stand-ins for the peripherals so the CPU can be driven deterministically in tests.
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::clock::TimerClock;
use crate::keyboard::Keyboard;
use crate::random::Randomizer;

/// Always produces the same byte
pub struct FixedRandomizer(pub u8);

impl Randomizer for FixedRandomizer {
    fn next_byte(&mut self) -> u8 {
        self.0
    }
}

/// Holds a fixed set of keys down and answers waits from a queue of presses.
/// Once the queue runs dry the keyboard behaves as if input was closed.
#[derive(Default)]
pub struct ScriptedKeyboard {
    held: Vec<u8>,
    presses: VecDeque<u8>,
}

impl ScriptedKeyboard {
    pub fn holding(keys: &[u8]) -> Self {
        ScriptedKeyboard {
            held: keys.to_vec(),
            ..Default::default()
        }
    }

    pub fn pressing(keys: &[u8]) -> Self {
        ScriptedKeyboard {
            presses: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Keyboard for ScriptedKeyboard {
    fn is_key_down(&self, key: u8) -> bool {
        self.held.contains(&key)
    }

    fn wait_for_key_press(&mut self) -> Option<u8> {
        self.presses.pop_front()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn advance(&self, seconds: f64) {
        self.elapsed.set(self.elapsed.get() + seconds);
    }
}

impl TimerClock for ManualClock {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed.get()
    }

    fn reset(&mut self) {
        self.elapsed.set(0.0);
    }
}
