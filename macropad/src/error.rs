//! Error type of keymap lookups and macro encoding.
//!
//! Table shapes are checked by the compiler. What's left are lookups with indices
//! coming from the runtime, which may be out of range.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Layer index is not in the keymap
    LayerOutOfRange { layer: usize, num_layer: usize },
    /// Key position is not in the matrix
    PositionOutOfRange { row: usize, col: usize },
    /// Encoder id is not in the encoder map
    EncoderOutOfRange { id: usize, num_encoder: usize },
    /// Macro index has no sequence
    MacroOutOfRange { index: usize, num_macro: usize },
    /// Encoded macros don't fit the buffer
    MacroBufferOverflow { capacity: usize },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerOutOfRange { layer, num_layer } => {
                write!(f, "Layer {} out of range, keymap has {} layers", layer, num_layer)
            }
            KeymapError::PositionOutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is not in the matrix", row, col)
            }
            KeymapError::EncoderOutOfRange { id, num_encoder } => {
                write!(f, "Encoder {} out of range, encoder map has {} encoders", id, num_encoder)
            }
            KeymapError::MacroOutOfRange { index, num_macro } => {
                write!(f, "Macro {} out of range, {} macros defined", index, num_macro)
            }
            KeymapError::MacroBufferOverflow { capacity } => {
                write!(f, "Macro sequences exceed the {} byte buffer", capacity)
            }
        }
    }
}

impl core::error::Error for KeymapError {}

/// Result type alias for keymap operations
pub type KeymapResult<T> = Result<T, KeymapError>;
