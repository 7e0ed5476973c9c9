//! Hue control of the RGB encoder.
//!
//! Turning the RGB encoder changes the underglow hue directly instead of sending
//! `RgbHui`/`RgbHud`, and every change is written to non-volatile memory so the hue
//! survives a power cycle.

use log::debug;
use macropad::event::Direction;

/// Non-volatile storage of the hue, implemented by the runtime on top of its flash or NVM
pub trait HueStore {
    /// The saved hue
    fn load(&self) -> u8;

    /// Persist a new hue
    fn save(&mut self, hue: u8);
}

pub const HUE_STEP: u8 = 1;

pub struct HueControl<S: HueStore> {
    hue: u8,
    store: S,
}

impl<S: HueStore> HueControl<S> {
    /// Start from the saved hue
    pub fn new(store: S) -> Self {
        Self {
            hue: store.load(),
            store,
        }
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Apply an encoder step, the hue wraps around. Returns the new hue.
    pub fn on_step(&mut self, direction: Direction) -> u8 {
        self.hue = match direction {
            Direction::Clockwise => self.hue.wrapping_add(HUE_STEP),
            Direction::CounterClockwise => self.hue.wrapping_sub(HUE_STEP),
        };
        self.store.save(self.hue);
        debug!("RGB hue {} saved", self.hue);
        self.hue
    }

    /// Give the store back, e.g. to flush it
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct Nvm {
        hue: u8,
        writes: usize,
    }

    impl HueStore for Nvm {
        fn load(&self) -> u8 {
            self.hue
        }

        fn save(&mut self, hue: u8) {
            self.hue = hue;
            self.writes += 1;
        }
    }

    #[test]
    fn test_hue_starts_from_store() {
        let control = HueControl::new(Nvm { hue: 100, writes: 0 });
        assert_eq!(control.hue(), 100);
        assert_eq!(control.into_store().writes, 0);
    }

    #[test]
    fn test_steps_are_saved_and_wrap() {
        let mut control = HueControl::new(Nvm::default());
        assert_eq!(control.on_step(Direction::CounterClockwise), 255);
        assert_eq!(control.on_step(Direction::Clockwise), 0);
        assert_eq!(control.on_step(Direction::Clockwise), 1);
        let nvm = control.into_store();
        assert_eq!(nvm.hue, 1);
        assert_eq!(nvm.writes, 3);
    }
}
