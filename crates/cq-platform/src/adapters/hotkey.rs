//! Global hotkeys by polling the keyboard state with `device_query`.
//!
//! A background thread samples the set of held keys every
//! `poll_interval`, folds it into a [`KeyCombo`] and posts the bound
//! [`HotkeyAction`] when a combination is newly pressed.
//!
//! 轮询键盘状态实现的全局快捷键。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use device_query::{DeviceQuery, DeviceState, Keycode};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use cq_core::ports::{HotkeyError, HotkeyPort};
use cq_core::{HotkeyAction, Key, KeyCombo, Modifier};

enum Classified {
    Modifier(Modifier),
    Key(Key),
}

fn classify(code: &Keycode) -> Option<Classified> {
    use Classified::{Key as K, Modifier as M};

    let classified = match code {
        Keycode::LControl | Keycode::RControl => M(Modifier::Ctrl),
        Keycode::LShift | Keycode::RShift => M(Modifier::Shift),
        Keycode::LAlt | Keycode::RAlt => M(Modifier::Alt),
        Keycode::LMeta | Keycode::RMeta => M(Modifier::Meta),
        Keycode::Left => K(Key::Left),
        Keycode::Right => K(Key::Right),
        Keycode::Up => K(Key::Up),
        Keycode::Down => K(Key::Down),
        other => {
            // Letters and digits render as "A".."Z" and "Key0".."Key9".
            let name = other.to_string();
            let c = match name.as_str() {
                s if s.len() == 1 => s.chars().next()?,
                s => s.strip_prefix("Key").filter(|d| d.len() == 1)?.chars().next()?,
            };
            K(Key::char(c)?)
        }
    };
    Some(classified)
}

/// Edge-triggered matcher from raw key snapshots to bound actions.
///
/// Holding a combination fires once; it fires again only after the
/// combination has been released (or changed) and pressed anew.
#[derive(Debug, Default)]
pub struct HotkeyMatcher {
    bindings: HashMap<KeyCombo, HotkeyAction>,
    last: Option<KeyCombo>,
}

impl HotkeyMatcher {
    pub fn new(bindings: HashMap<KeyCombo, HotkeyAction>) -> Self {
        Self {
            bindings,
            last: None,
        }
    }

    /// Feed one snapshot of held keys.
    pub fn observe(&mut self, pressed: &[Keycode]) -> Option<HotkeyAction> {
        let current = Self::combo_of(pressed);
        if current == self.last {
            return None;
        }
        self.last = current.clone();
        current.and_then(|combo| self.bindings.get(&combo).copied())
    }

    fn combo_of(pressed: &[Keycode]) -> Option<KeyCombo> {
        let mut modifiers = Vec::new();
        let mut keys: Vec<Key> = Vec::new();
        for code in pressed {
            match classify(code)? {
                Classified::Modifier(m) => modifiers.push(m),
                Classified::Key(k) if !keys.contains(&k) => keys.push(k),
                Classified::Key(_) => {}
            }
        }
        KeyCombo::from_pressed(modifiers, &keys)
    }
}

pub struct DeviceQueryHotkeys {
    bindings: HashMap<KeyCombo, HotkeyAction>,
    poll_interval: Duration,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl DeviceQueryHotkeys {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            bindings: HashMap::new(),
            poll_interval,
            stop: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.worker.is_some()
    }
}

impl HotkeyPort for DeviceQueryHotkeys {
    fn bind(&mut self, combo: KeyCombo, action: HotkeyAction) -> Result<(), HotkeyError> {
        if self.bindings.contains_key(&combo) {
            return Err(HotkeyError::AlreadyBound(combo));
        }
        self.bindings.insert(combo, action);
        Ok(())
    }

    fn start(&mut self, tx: mpsc::Sender<HotkeyAction>) -> Result<(), HotkeyError> {
        if self.worker.is_some() {
            return Err(HotkeyError::AlreadyListening);
        }

        self.stop.store(false, Ordering::SeqCst);
        let stop = Arc::clone(&self.stop);
        let interval = self.poll_interval;
        let mut matcher = HotkeyMatcher::new(self.bindings.clone());

        let worker = thread::Builder::new()
            .name("clipqueue-hotkeys".into())
            .spawn(move || {
                // DeviceState is not Send on every platform; build it here.
                let device = DeviceState::new();
                debug!(?interval, "Hotkey polling started");

                while !stop.load(Ordering::SeqCst) {
                    let keys = device.get_keys();
                    if let Some(action) = matcher.observe(&keys) {
                        debug!(%action, "Hotkey pressed");
                        if tx.blocking_send(action).is_err() {
                            debug!("Action channel closed, hotkey polling ends");
                            break;
                        }
                    }
                    thread::sleep(interval);
                }

                debug!("Hotkey polling stopped");
            })
            .map_err(|e| HotkeyError::Unavailable(e.to_string()))?;

        self.worker = Some(worker);
        info!(bindings = self.bindings.len(), "Hotkey listener started");
        Ok(())
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Hotkey polling thread panicked");
            }
            info!("Hotkey listener stopped");
        }
    }
}

impl Drop for DeviceQueryHotkeys {
    fn drop(&mut self) {
        self.stop();
    }
}
