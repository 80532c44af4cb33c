//! Paste keystroke simulation.

use std::thread;
use std::time::{Duration, Instant};

use device_query::{DeviceQuery, DeviceState, Keycode};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::debug;

use cq_core::ports::{PasteError, PasteSimulatorPort};

#[cfg(target_os = "macos")]
const PASTE_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const PASTE_MODIFIER: Key = Key::Control;

const RELEASE_TIMEOUT: Duration = Duration::from_millis(500);
const RELEASE_POLL: Duration = Duration::from_millis(10);

fn modifiers_held(keys: &[Keycode]) -> bool {
    keys.iter().any(|key| {
        matches!(
            key,
            Keycode::LControl
                | Keycode::RControl
                | Keycode::LShift
                | Keycode::RShift
                | Keycode::LAlt
                | Keycode::RAlt
                | Keycode::LMeta
                | Keycode::RMeta
        )
    })
}

/// Block until no modifier is physically held, or `timeout` passes.
/// Returns whether the keyboard came free.
fn wait_for_modifier_release(timeout: Duration) -> bool {
    let device = DeviceState::new();
    let deadline = Instant::now() + timeout;
    loop {
        if !modifiers_held(&device.get_keys()) {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(RELEASE_POLL);
    }
}

/// Presses the platform paste chord with `enigo`.
///
/// The paste hotkey itself holds modifiers, so the chord is only sent once
/// they are released (waiting at most 500 ms); otherwise the focused
/// application would see e.g. `ctrl+alt+v`. A fresh connection is opened
/// per press.
#[derive(Debug, Default)]
pub struct EnigoPasteSimulator;

impl EnigoPasteSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl PasteSimulatorPort for EnigoPasteSimulator {
    fn paste(&self) -> Result<(), PasteError> {
        if !wait_for_modifier_release(RELEASE_TIMEOUT) {
            return Err(PasteError::Failed(
                "modifier keys still held, chord not sent".into(),
            ));
        }

        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| PasteError::Unavailable(e.to_string()))?;

        let failed = |e: enigo::InputError| PasteError::Failed(e.to_string());

        enigo.key(PASTE_MODIFIER, Direction::Press).map_err(failed)?;
        let clicked = enigo.key(Key::Unicode('v'), Direction::Click);
        // Always release the modifier, even if the click failed.
        let released = enigo.key(PASTE_MODIFIER, Direction::Release);
        clicked.map_err(failed)?;
        released.map_err(failed)?;

        debug!("Paste chord sent");
        Ok(())
    }
}

/// Used when auto-paste is disabled.
#[derive(Debug, Default)]
pub struct NoopPasteSimulator;

impl PasteSimulatorPort for NoopPasteSimulator {
    fn paste(&self) -> Result<(), PasteError> {
        Ok(())
    }
}
