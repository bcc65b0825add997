//! Process-wide debug overlay switch.
//!
//! The overlay draws layout guides on top of text widgets and logs their
//! measured sizes. It is off unless a host turns it on at startup; widgets
//! can still override it per instance.

use state::InitCell;

static DEBUG_OVERLAY: InitCell<bool> = InitCell::new();

/// Sets the process-wide debug overlay flag.
///
/// Only the first call takes effect. Returns `false` if the flag was already
/// set, in which case `enabled` is ignored.
#[must_use = "false means an earlier call already fixed the flag"]
pub fn init_debug_overlay(enabled: bool) -> bool {
    let set = DEBUG_OVERLAY.set(enabled);
    if set {
        log::debug!("debug overlay {}", if enabled { "enabled" } else { "disabled" });
    } else {
        log::warn!("debug overlay already initialized, ignoring init_debug_overlay({enabled})");
    }
    set
}

/// Current process-wide flag. `false` until [`init_debug_overlay`] runs.
pub fn debug_overlay_enabled() -> bool {
    DEBUG_OVERLAY.try_get().copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The flag is process-wide and other tests read it, so only the
    // disabled value is ever written here.
    #[test]
    fn second_init_is_rejected() {
        let _ = init_debug_overlay(false);
        assert!(!init_debug_overlay(false));
        assert!(!debug_overlay_enabled());
    }
}
