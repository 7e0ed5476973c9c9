use log::{debug, warn};

use crate::error::{KeymapError, KeymapResult};
use crate::injector::KeyInjector;
use crate::keycode::{KeyCode, from_ascii};
use crate::modifier::ModifierCombination;

/// A step of a macro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    /// Press and release a key
    Tap(KeyCode),
    /// Press a key, keeps it pressed
    Press(KeyCode),
    /// Release a key
    Release(KeyCode),
    /// Tap a key while holding the modifiers
    TapWithModifier(KeyCode, ModifierCombination),
    /// Wait for the given ms
    Delay(u16),
    /// Type an ascii string
    Text(&'static str),
}

/// Macro sequences are declared as static slices in the board crates
pub type MacroSequence = &'static [MacroOperation];

/// Fetch the sequence at `index`
pub fn get_macro(sequences: &[MacroSequence], index: u8) -> KeymapResult<MacroSequence> {
    sequences
        .get(index as usize)
        .copied()
        .ok_or(KeymapError::MacroOutOfRange {
            index: index as usize,
            num_macro: sequences.len(),
        })
}

/// Play a macro sequence through the injector.
pub fn play<I: KeyInjector>(sequence: &[MacroOperation], injector: &mut I) {
    debug!("Playing macro of {} operations", sequence.len());
    for operation in sequence {
        match *operation {
            MacroOperation::Tap(k) => injector.tap(k),
            MacroOperation::Press(k) => injector.press(k),
            MacroOperation::Release(k) => injector.release(k),
            MacroOperation::TapWithModifier(k, m) => tap_with_modifier(k, m, injector),
            MacroOperation::Delay(ms) => injector.delay_ms(ms),
            MacroOperation::Text(text) => {
                for c in text.bytes() {
                    let (k, shifted) = from_ascii(c);
                    if k == KeyCode::No {
                        warn!("Character {:#X} can't be typed, skipped", c);
                        continue;
                    }
                    if shifted {
                        tap_with_modifier(k, ModifierCombination::new().with_shift(true), injector);
                    } else {
                        injector.tap(k);
                    }
                }
            }
        }
    }
}

fn tap_with_modifier<I: KeyInjector>(keycode: KeyCode, modifier: ModifierCombination, injector: &mut I) {
    let (modifiers, n) = modifier.to_modifier_keycodes();
    for m in &modifiers[..n] {
        injector.press(*m);
    }
    injector.tap(keycode);
    for m in modifiers[..n].iter().rev() {
        injector.release(*m);
    }
}

// Vial macro buffer encoding, same as QMK's send_string
const SS_QMK_PREFIX: u8 = 0x01;
const SS_TAP_CODE: u8 = 0x01;
const SS_DOWN_CODE: u8 = 0x02;
const SS_UP_CODE: u8 = 0x03;
const SS_DELAY_CODE: u8 = 0x04;
/// Longest delay a single delay record holds, both bytes at 0xFF
const MAX_DELAY_RECORD_MS: u16 = 254 + 254 * 255;

struct MacroWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl MacroWriter<'_> {
    fn push(&mut self, bytes: &[u8]) -> KeymapResult<()> {
        let end = self.len + bytes.len();
        if end > self.buf.len() {
            return Err(KeymapError::MacroBufferOverflow {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    fn keycode(&mut self, code: u8, keycode: KeyCode) -> KeymapResult<()> {
        if !keycode.is_basic() {
            warn!("{:?} can't be stored in a macro, skipped", keycode);
            return Ok(());
        }
        self.push(&[SS_QMK_PREFIX, code, keycode as u8])
    }

    fn delay(&mut self, ms: u16) -> KeymapResult<()> {
        let low = (ms % 255 + 1) as u8;
        let high = (ms / 255 + 1) as u8;
        self.push(&[SS_QMK_PREFIX, SS_DELAY_CODE, low, high])
    }
}

/// Serialize macro sequences into the Vial macro buffer.
///
/// Every sequence ends with `0x00`. Delays are stored as two bytes with each byte +1,
/// so the buffer never contains a zero inside a sequence. A record holds at most 65024 ms,
/// longer delays take several records. Returns the number of bytes written.
pub fn encode_vial(sequences: &[MacroSequence], buf: &mut [u8]) -> KeymapResult<usize> {
    let mut w = MacroWriter { buf, len: 0 };
    for sequence in sequences {
        for operation in sequence.iter() {
            match *operation {
                MacroOperation::Tap(k) => w.keycode(SS_TAP_CODE, k)?,
                MacroOperation::Press(k) => w.keycode(SS_DOWN_CODE, k)?,
                MacroOperation::Release(k) => w.keycode(SS_UP_CODE, k)?,
                MacroOperation::TapWithModifier(k, m) => {
                    let (modifiers, n) = m.to_modifier_keycodes();
                    for m in &modifiers[..n] {
                        w.keycode(SS_DOWN_CODE, *m)?;
                    }
                    w.keycode(SS_TAP_CODE, k)?;
                    for m in modifiers[..n].iter().rev() {
                        w.keycode(SS_UP_CODE, *m)?;
                    }
                }
                MacroOperation::Delay(ms) => {
                    // Longer delays are split into consecutive records
                    let mut remaining = ms;
                    while remaining > MAX_DELAY_RECORD_MS {
                        w.delay(MAX_DELAY_RECORD_MS)?;
                        remaining -= MAX_DELAY_RECORD_MS;
                    }
                    w.delay(remaining)?;
                }
                MacroOperation::Text(text) => {
                    for c in text.bytes() {
                        // Control characters collide with the prefix and the terminator
                        if !(0x20..=0x7E).contains(&c) {
                            warn!("Character {:#X} can't be stored in a macro, skipped", c);
                            continue;
                        }
                        w.push(&[c])?;
                    }
                }
            }
        }
        w.push(&[0x00])?;
    }
    Ok(w.len)
}
