/// Raw event of a key in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

/// Rotation direction of an encoder step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Index in QMK's `encoder_map[][NUM_ENCODERS][NUM_DIRECTIONS]`, counter-clockwise first
    pub const fn qmk_index(self) -> usize {
        match self {
            Direction::CounterClockwise => 0,
            Direction::Clockwise => 1,
        }
    }
}

/// A step of a rotary encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderEvent {
    pub id: u8,
    pub direction: Direction,
}

/// A dip switch changed state. Not stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DipSwitchEvent {
    pub index: u8,
    pub active: bool,
}
