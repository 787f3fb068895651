use egui::Key;
use log::debug;

use crate::utils::unique_id;
use crate::view::{on_off, ControlsView};
use crate::PlayerHost;

/// What a bound key does.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HotkeyAction {
    /// Left arrow or J.
    SeekBackward,
    /// Right arrow or L.
    SeekForward,
    /// Up arrow.
    VolumeUp,
    /// Down arrow.
    VolumeDown,
    /// Space or K.
    TogglePlay,
    /// Swallowed without doing anything.
    Suppress,
}

impl HotkeyAction {
    /// Action bound to `key`, if any.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft | Key::J => Some(Self::SeekBackward),
            Key::ArrowRight | Key::L => Some(Self::SeekForward),
            Key::ArrowUp => Some(Self::VolumeUp),
            Key::ArrowDown => Some(Self::VolumeDown),
            Key::K | Key::Space => Some(Self::TogglePlay),
            Key::F12 => Some(Self::Suppress),
            _ => None,
        }
    }
}

/// Keys every bound controller consumes.
pub const HOTKEYS: [Key; 9] = [
    Key::ArrowLeft,
    Key::J,
    Key::ArrowRight,
    Key::L,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::K,
    Key::Space,
    Key::F12,
];

/// Live subscription to keyboard input for the whole host surface.
/// Dropping it releases the subscription.
#[derive(Debug)]
pub struct HotkeyBinding {
    id: String,
}

impl HotkeyBinding {
    fn new() -> Self {
        Self {
            id: unique_id("hotkey-"),
        }
    }

    /// Unique id of this subscription.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Global hotkey toggle.
#[derive(Debug, Default)]
pub struct Hotkeys {
    binding: Option<HotkeyBinding>,
}

impl Hotkeys {
    /// Whether keys are currently consumed.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The live subscription.
    pub fn binding(&self) -> Option<&HotkeyBinding> {
        self.binding.as_ref()
    }

    /// Bind without telling the user, used at construction.
    pub(crate) fn bind_quiet(&mut self, view: &mut ControlsView) {
        if self.binding.is_none() {
            self.binding = Some(HotkeyBinding::new());
        }
        view.hotkey_label = on_off(true);
    }

    /// Flip the binding, updating the settings label and showing a notice.
    pub fn toggle(&mut self, view: &mut ControlsView, host: &mut impl PlayerHost) -> bool {
        let enabled = match self.binding.take() {
            Some(b) => {
                debug!("Hotkey disable ({})", b.id());
                false
            }
            None => {
                let b = HotkeyBinding::new();
                debug!("Hotkey enable ({})", b.id());
                self.binding = Some(b);
                true
            }
        };
        view.hotkey_label = on_off(enabled);
        host.notice(&format!("Global hotkeys {}", on_off(enabled)));
        enabled
    }

    /// Release the binding, whatever its state.
    pub fn release(&mut self) {
        self.binding = None;
    }

    /// The action for `key` if the binding is live.
    pub fn action(&self, key: Key) -> Option<HotkeyAction> {
        if self.binding.is_none() {
            return None;
        }
        HotkeyAction::from_key(key)
    }
}
