//! Fixed hotkey table.
//!
//! | Combination    | Action |
//! |----------------|--------|
//! | `ctrl+c`       | Copy   |
//! | `ctrl+alt+v`   | Paste  |
//! | `ctrl+shift+p` | Pause  |
//! | `ctrl+right`   | Next   |
//! | `ctrl+left`    | Prev   |
//! | `ctrl+shift+q` | Exit   |

use tracing::info;

use cq_core::ports::{HotkeyError, HotkeyPort};
use cq_core::{HotkeyAction, Key, KeyCombo, Modifier};

/// The combination-to-action table handed to a [`HotkeyPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBindings {
    entries: Vec<(KeyCombo, HotkeyAction)>,
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        Self::fixed()
    }
}

impl HotkeyBindings {
    /// The built-in bindings. They are not configurable.
    pub fn fixed() -> Self {
        use Modifier::{Alt, Ctrl, Shift};

        Self {
            entries: vec![
                (KeyCombo::new([Ctrl], Key::Char('c')), HotkeyAction::Copy),
                (KeyCombo::new([Ctrl, Alt], Key::Char('v')), HotkeyAction::Paste),
                (KeyCombo::new([Ctrl, Shift], Key::Char('p')), HotkeyAction::Pause),
                (KeyCombo::new([Ctrl], Key::Right), HotkeyAction::Next),
                (KeyCombo::new([Ctrl], Key::Left), HotkeyAction::Prev),
                (KeyCombo::new([Ctrl, Shift], Key::Char('q')), HotkeyAction::Exit),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, HotkeyAction)> {
        self.entries.iter().map(|(combo, action)| (combo, *action))
    }

    pub fn action_for(&self, combo: &KeyCombo) -> Option<HotkeyAction> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == combo)
            .map(|(_, action)| *action)
    }

    pub fn combo_for(&self, action: HotkeyAction) -> Option<&KeyCombo> {
        self.entries
            .iter()
            .find(|(_, bound)| *bound == action)
            .map(|(combo, _)| combo)
    }

    /// Bind every entry on `port`.
    pub fn register(&self, port: &mut dyn HotkeyPort) -> Result<(), HotkeyError> {
        for (combo, action) in self.iter() {
            port.bind(combo.clone(), action)?;
            info!(%combo, %action, "Hotkey bound");
        }
        Ok(())
    }
}
