use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::constants::KEY_COUNT;

/// # Keyboard
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
pub trait Keyboard {
    /// Whether `key` is currently held down. Keys outside 0..=F are never down.
    fn is_key_down(&self, key: u8) -> bool;

    /// Blocks until a key is pressed and returns it.
    /// Returns `None` once no more input will ever arrive.
    fn wait_for_key_press(&mut self) -> Option<u8>;
}

#[derive(Default)]
struct KeyState {
    down: [bool; KEY_COUNT],
    presses: u64,
    last_pressed: u8,
    closed: bool,
}

#[derive(Default)]
struct Shared {
    keys: Mutex<KeyState>,
    pressed: Condvar,
}

/// A keypad that can be shared between the thread receiving key events and the
/// thread running the CPU.
///
/// Cloning a `Keypad` gives another handle onto the same keys.
#[derive(Clone, Default)]
pub struct Keypad {
    shared: Arc<Shared>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of key and wake anything waiting for a key press
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&self, key: u8) {
        if key as usize >= KEY_COUNT {
            return;
        }
        let mut keys = self.lock();
        keys.down[key as usize] = true;
        keys.presses += 1;
        keys.last_pressed = key;
        self.shared.pressed.notify_all();
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&self, key: u8) {
        if key as usize >= KEY_COUNT {
            return;
        }
        self.lock().down[key as usize] = false;
    }

    /// Stops accepting input; anything blocked in `wait_for_key_press` returns `None`
    pub fn close(&self) {
        self.lock().closed = true;
        self.shared.pressed.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, KeyState> {
        self.shared
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Keyboard for Keypad {
    fn is_key_down(&self, key: u8) -> bool {
        (key as usize) < KEY_COUNT && self.lock().down[key as usize]
    }

    /// Only presses made after the call count; keys already held are ignored.
    fn wait_for_key_press(&mut self) -> Option<u8> {
        let keys = self.lock();
        let seen = keys.presses;
        let keys = self
            .shared
            .pressed
            .wait_while(keys, |k| !k.closed && k.presses == seen)
            .unwrap_or_else(PoisonError::into_inner);

        if keys.closed {
            None
        } else {
            debug!("key {:X} pressed while waiting", keys.last_pressed);
            Some(keys.last_pressed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_press_and_release() {
        let keypad = Keypad::new();
        keypad.key_press(0xE);
        assert!(keypad.is_key_down(0xE));
        assert!(!keypad.is_key_down(0x1));
        keypad.key_release(0xE);
        assert!(!keypad.is_key_down(0xE));
    }

    #[test]
    fn test_out_of_range_keys_are_never_down() {
        let keypad = Keypad::new();
        keypad.key_press(0x10);
        assert!(!keypad.is_key_down(0x10));
        assert!(!keypad.is_key_down(0xFF));
    }

    #[test]
    fn test_clones_share_keys() {
        let keypad = Keypad::new();
        let other = keypad.clone();
        other.key_press(0x3);
        assert!(keypad.is_key_down(0x3));
    }

    #[test]
    fn test_wait_returns_next_press() {
        let mut keypad = Keypad::new();
        let presser = keypad.clone();
        // a key already held doesn't satisfy the wait
        presser.key_press(0x1);

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            presser.key_press(0xA);
        });

        assert_eq!(keypad.wait_for_key_press(), Some(0xA));
        handle.join().unwrap();
    }

    #[test]
    fn test_close_wakes_waiter() {
        let mut keypad = Keypad::new();
        let closer = keypad.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            closer.close();
        });

        assert_eq!(keypad.wait_for_key_press(), None);
        handle.join().unwrap();
    }
}
