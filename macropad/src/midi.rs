//! MIDI note hook.
//!
//! A key bound to `Action::MidiNote` sends note on when pressed and note off when released,
//! both with the configured velocity.

use log::{debug, warn};

use crate::config::MidiConfig;

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiMessage {
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
}

impl MidiMessage {
    /// Serialize the message, channel is masked to 4 bits and data bytes to 7 bits
    pub fn to_bytes(&self) -> [u8; 3] {
        let (status, channel, note, velocity) = match *self {
            MidiMessage::NoteOn {
                channel,
                note,
                velocity,
            } => (NOTE_ON, channel, note, velocity),
            MidiMessage::NoteOff {
                channel,
                note,
                velocity,
            } => (NOTE_OFF, channel, note, velocity),
        };
        [status | (channel & 0x0F), note & 0x7F, velocity & 0x7F]
    }
}

/// The runtime's MIDI output, e.g. the USB MIDI class
pub trait MidiSink {
    fn send(&mut self, message: MidiMessage);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiHook {
    pub channel: u8,
    pub velocity: u8,
}

impl Default for MidiHook {
    fn default() -> Self {
        Self::new(MidiConfig::const_default())
    }
}

impl MidiHook {
    pub const fn new(config: MidiConfig) -> Self {
        Self {
            channel: config.channel,
            velocity: config.velocity,
        }
    }

    pub fn on_press<S: MidiSink>(&self, note: u8, sink: &mut S) {
        if note > 0x7F {
            warn!("MIDI note {} out of range, ignored", note);
            return;
        }
        debug!("MIDI note on {}", note);
        sink.send(MidiMessage::NoteOn {
            channel: self.channel,
            note,
            velocity: self.velocity,
        });
    }

    pub fn on_release<S: MidiSink>(&self, note: u8, sink: &mut S) {
        if note > 0x7F {
            warn!("MIDI note {} out of range, ignored", note);
            return;
        }
        debug!("MIDI note off {}", note);
        sink.send(MidiMessage::NoteOff {
            channel: self.channel,
            note,
            velocity: self.velocity,
        });
    }
}

#[cfg(test)]
mod test {
    use heapless::Vec;

    use super::*;

    #[derive(Default)]
    struct Sink(Vec<MidiMessage, 8>);

    impl MidiSink for Sink {
        fn send(&mut self, message: MidiMessage) {
            self.0.push(message).unwrap();
        }
    }

    #[test]
    fn test_message_bytes() {
        let on = MidiMessage::NoteOn {
            channel: 0,
            note: 60,
            velocity: 120,
        };
        assert_eq!(on.to_bytes(), [0x90, 60, 120]);
        let off = MidiMessage::NoteOff {
            channel: 3,
            note: 70,
            velocity: 0,
        };
        assert_eq!(off.to_bytes(), [0x83, 70, 0]);
        let masked = MidiMessage::NoteOn {
            channel: 0x12,
            note: 0xFF,
            velocity: 0x80,
        };
        assert_eq!(masked.to_bytes(), [0x92, 0x7F, 0x00]);
    }

    #[test]
    fn test_hook_press_release() {
        let hook = MidiHook::default();
        let mut sink = Sink::default();
        hook.on_press(64, &mut sink);
        hook.on_release(64, &mut sink);
        hook.on_press(200, &mut sink);
        assert_eq!(
            sink.0.as_slice(),
            &[
                MidiMessage::NoteOn {
                    channel: 0,
                    note: 64,
                    velocity: 120
                },
                MidiMessage::NoteOff {
                    channel: 0,
                    note: 64,
                    velocity: 120
                },
            ]
        );
    }
}
