use log::debug;

use crate::action::KeyAction;

/// Max number of taps a tap dance distinguishes
pub const MAX_TAPS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    /// Action triggered by 1, 2, 3 and 4 taps
    pub actions: [KeyAction; MAX_TAPS],
    /// Max interval between two taps of the same dance
    pub tapping_term_ms: u16,
}

impl Default for TapDance {
    fn default() -> Self {
        Self {
            actions: [KeyAction::No; MAX_TAPS],
            tapping_term_ms: 200,
        }
    }
}

impl TapDance {
    pub const fn new(actions: [KeyAction; MAX_TAPS], tapping_term_ms: u16) -> Self {
        Self {
            actions,
            tapping_term_ms,
        }
    }

    /// The action to trigger after `taps` taps, `KeyAction::No` for 0 or more than 4 taps
    pub fn action_for(&self, taps: u8) -> KeyAction {
        let action = match taps {
            1..=4 => self.actions[taps as usize - 1],
            _ => KeyAction::No,
        };
        debug!("Tap dance resolved {} taps to {:?}", taps, action);
        action
    }

    /// Whether a tap `elapsed_ms` after the previous one continues the dance
    pub fn continues(&self, elapsed_ms: u16) -> bool {
        elapsed_ms < self.tapping_term_ms
    }
}

/// Fetch a tap dance by the index stored in `KeyAction::TapDance`
pub fn get_tap_dance(tap_dances: &[TapDance], index: u8) -> Option<&TapDance> {
    tap_dances.get(index as usize)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{a, k, mc, mo, to};

    #[test]
    fn test_action_for_taps() {
        let td = TapDance::new([mc!(0), mo!(1), a!(No), to!(2)], 250);
        assert_eq!(td.action_for(0), KeyAction::No);
        assert_eq!(td.action_for(1), mc!(0));
        assert_eq!(td.action_for(2), mo!(1));
        assert_eq!(td.action_for(3), KeyAction::No);
        assert_eq!(td.action_for(4), to!(2));
        assert_eq!(td.action_for(5), KeyAction::No);
    }

    #[test]
    fn test_tapping_term() {
        let td = TapDance::default();
        assert!(td.continues(199));
        assert!(!td.continues(200));
    }

    #[test]
    fn test_get_tap_dance() {
        let dances = [TapDance::new([k!(A), a!(No), a!(No), a!(No)], 250)];
        assert_eq!(get_tap_dance(&dances, 0).map(|td| td.action_for(1)), Some(k!(A)));
        assert!(get_tap_dance(&dances, 1).is_none());
    }
}
