//! Dip switch hook.
//!
//! The runtime calls [`DipSwitchHandler::update`] whenever a monitored dip switch changes
//! state, the same contract as QMK's `dip_switch_update_user`.

use log::debug;

use crate::event::DipSwitchEvent;
use crate::injector::KeyInjector;
use crate::keycode::KeyCode;

/// Keycodes tapped when each dip switch becomes active, `None` for unbound switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DipSwitchConfig<const N: usize> {
    pub on_active: [Option<KeyCode>; N],
}

impl<const N: usize> DipSwitchConfig<N> {
    pub const fn new(on_active: [Option<KeyCode>; N]) -> Self {
        Self { on_active }
    }
}

/// Stateless mapping from a dip switch transition to at most one key tap.
#[derive(Clone, Copy, Debug)]
pub struct DipSwitchHandler<const N: usize> {
    config: DipSwitchConfig<N>,
}

impl<const N: usize> DipSwitchHandler<N> {
    pub const fn new(config: DipSwitchConfig<N>) -> Self {
        Self { config }
    }

    /// Handle a dip switch transition.
    ///
    /// Taps the bound keycode once when switch `index` becomes active. Inactive transitions,
    /// unbound switches and unknown indices do nothing. Always returns `true`.
    pub fn update<I: KeyInjector>(&self, index: u8, active: bool, injector: &mut I) -> bool {
        let bound = self.config.on_active.get(index as usize).copied().flatten();
        match (bound, active) {
            (Some(keycode), true) => {
                debug!("Dip switch {} active, tap {:?}", index, keycode);
                injector.tap(keycode);
            }
            (Some(_), false) => debug!("Dip switch {} inactive", index),
            (None, _) => debug!("Dip switch {} has no binding", index),
        }

        true
    }

    /// Handle a dip switch event, see [`DipSwitchHandler::update`]
    pub fn on_event<I: KeyInjector>(&self, event: DipSwitchEvent, injector: &mut I) -> bool {
        self.update(event.index, event.active, injector)
    }
}
