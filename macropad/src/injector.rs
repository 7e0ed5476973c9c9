//! The seam to the runtime's key event injection.
//!
//! Hooks in this crate never talk to the HID stack. They emit synthetic key events
//! through a [`KeyInjector`], which the runtime implements on top of its report queue.

use heapless::Vec;
use log::warn;

use crate::keycode::KeyCode;

/// Synthetic key event emission, implemented by the firmware runtime.
pub trait KeyInjector {
    /// Register a keycode as pressed
    fn press(&mut self, keycode: KeyCode);

    /// Register a keycode as released
    fn release(&mut self, keycode: KeyCode);

    /// Press and release a keycode, same as QMK's `tap_code`
    fn tap(&mut self, keycode: KeyCode) {
        self.press(keycode);
        self.release(keycode);
    }

    /// Wait before the next event. Runtimes without a notion of time ignore it.
    fn delay_ms(&mut self, _ms: u16) {}
}

/// An event received by a [`RecordingInjector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InjectedEvent {
    Press(KeyCode),
    Release(KeyCode),
    Delay(u16),
}

/// Injector that records everything it receives, for tests and host side tooling.
///
/// Events beyond the capacity `N` are dropped.
#[derive(Debug, Default)]
pub struct RecordingInjector<const N: usize = 64> {
    events: Vec<InjectedEvent, N>,
}

impl<const N: usize> RecordingInjector<N> {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events, in emission order
    pub fn events(&self) -> &[InjectedEvent] {
        &self.events
    }

    /// Number of complete taps of `keycode`, i.e. presses followed by a release
    pub fn taps_of(&self, keycode: KeyCode) -> usize {
        self.events
            .windows(2)
            .filter(|w| w[0] == InjectedEvent::Press(keycode) && w[1] == InjectedEvent::Release(keycode))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: InjectedEvent) {
        if self.events.push(event).is_err() {
            warn!("Recording injector is full, {:?} dropped", event);
        }
    }
}

impl<const N: usize> KeyInjector for RecordingInjector<N> {
    fn press(&mut self, keycode: KeyCode) {
        self.record(InjectedEvent::Press(keycode));
    }

    fn release(&mut self, keycode: KeyCode) {
        self.record(InjectedEvent::Release(keycode));
    }

    fn delay_ms(&mut self, ms: u16) {
        self.record(InjectedEvent::Delay(ms));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tap_is_press_then_release() {
        let mut injector: RecordingInjector<8> = RecordingInjector::new();
        injector.tap(KeyCode::AudioMute);
        assert_eq!(
            injector.events(),
            &[InjectedEvent::Press(KeyCode::AudioMute), InjectedEvent::Release(KeyCode::AudioMute)]
        );
        assert_eq!(injector.taps_of(KeyCode::AudioMute), 1);
        assert_eq!(injector.taps_of(KeyCode::AudioVolUp), 0);
    }

    #[test]
    fn test_overflow_drops_events() {
        let mut injector: RecordingInjector<3> = RecordingInjector::new();
        injector.tap(KeyCode::A);
        injector.tap(KeyCode::B);
        assert_eq!(injector.events().len(), 3);
        assert_eq!(injector.events()[2], InjectedEvent::Press(KeyCode::B));

        injector.clear();
        assert!(injector.is_empty());
    }
}
