mod usb_config;

pub use usb_config::UsbConfig;

/// The config struct of a macro pad.
///
/// Everything is known at compile time, boards declare it as a `static`.
/// Matrix and encoder counts must agree with the keymap's const generics,
/// see [`KeyboardConfig::matches`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardConfig<'a> {
    pub usb: UsbConfig<'a>,
    pub matrix: MatrixConfig,
    pub encoder_count: usize,
    pub dip_switch_count: usize,
    pub behavior: BehaviorConfig,
}

impl Default for KeyboardConfig<'_> {
    fn default() -> Self {
        Self::const_default()
    }
}

impl KeyboardConfig<'_> {
    pub const fn const_default() -> Self {
        Self {
            usb: UsbConfig::const_default(),
            matrix: MatrixConfig { rows: 0, cols: 0 },
            encoder_count: 0,
            dip_switch_count: 0,
            behavior: BehaviorConfig::const_default(),
        }
    }

    /// Check the config against a keymap shape `(ROW, COL, NUM_LAYER, NUM_ENCODER)`
    pub fn matches(&self, dimensions: (usize, usize, usize, usize)) -> bool {
        let (row, col, _, num_encoder) = dimensions;
        self.matrix.rows == row && self.matrix.cols == col && self.encoder_count == num_encoder
    }
}

/// Physical matrix size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Time window in ms in which consecutive taps count as one tap dance
    pub tapping_term_ms: u16,
    pub midi: MidiConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

impl BehaviorConfig {
    pub const fn const_default() -> Self {
        Self {
            tapping_term_ms: 200,
            midi: MidiConfig::const_default(),
        }
    }
}

/// Config of the MIDI hook
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiConfig {
    /// Output channel, 0..=15
    pub channel: u8,
    /// Velocity of note on and note off messages, 0..=127
    pub velocity: u8,
}

impl Default for MidiConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

impl MidiConfig {
    pub const fn const_default() -> Self {
        Self {
            channel: 0,
            velocity: 120,
        }
    }
}
