use log::{debug, warn};

use crate::action::{EncoderAction, KeyAction};
use crate::error::{KeymapError, KeymapResult};
use crate::event::{Direction, EncoderEvent, KeyEvent};

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The runtime uses tuple `(row, col, layer)` to retrieve the action from Keymap.
/// Both tables are borrowed immutably, usually from `static`s, so lookups never change them.
/// Only the layer state, which belongs to the runtime, is mutable.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Rotary encoders, each rotary encoder is represented as (Clockwise, CounterClockwise, Press)
    encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub const fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    ) -> Self {
        KeyMap {
            layers,
            encoders,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
        }
    }

    /// Get `(ROW, COL, NUM_LAYER, NUM_ENCODER)` of the keymap
    pub const fn dimensions(&self) -> (usize, usize, usize, usize) {
        (ROW, COL, NUM_LAYER, NUM_ENCODER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid default layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.default_layer = layer_num;
    }

    /// Fetch the action in keymap at exactly the given layer, no layer resolution.
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeymapResult<KeyAction> {
        let layer = self.layers.get(layer_num).ok_or(KeymapError::LayerOutOfRange {
            layer: layer_num,
            num_layer: NUM_LAYER,
        })?;
        layer
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(KeymapError::PositionOutOfRange { row, col })
    }

    /// Fetch the action at a position, resolving through the active layers.
    ///
    /// Iterates from higher layer to lower layer, the lowest checked layer is the default layer.
    /// `Transparent` falls through to the next active layer, if every layer is transparent
    /// the result is `KeyAction::No`.
    pub fn get_action(&self, row: usize, col: usize) -> KeymapResult<KeyAction> {
        if row >= ROW || col >= COL {
            return Err(KeymapError::PositionOutOfRange { row, col });
        }
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action != KeyAction::Transparent {
                    return Ok(action);
                }
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        Ok(KeyAction::No)
    }

    /// Fetch the action of a key event, see [`KeyMap::get_action`]
    pub fn get_action_for_event(&self, event: KeyEvent) -> KeymapResult<KeyAction> {
        self.get_action(event.row as usize, event.col as usize)
    }

    /// Fetch the encoder action at exactly the given layer
    pub fn get_encoder_action(&self, id: usize, layer_num: usize) -> KeymapResult<EncoderAction> {
        let encoders = self.encoders.ok_or(KeymapError::EncoderOutOfRange { id, num_encoder: 0 })?;
        let layer = encoders.get(layer_num).ok_or(KeymapError::LayerOutOfRange {
            layer: layer_num,
            num_layer: NUM_LAYER,
        })?;
        layer.get(id).copied().ok_or(KeymapError::EncoderOutOfRange {
            id,
            num_encoder: NUM_ENCODER,
        })
    }

    /// Fetch the action of an encoder step on the activated layer.
    ///
    /// Encoder entries don't fall through to lower layers: `Transparent` is returned as is
    /// and the runtime treats it as a no-op, the same as `KC.TRNS` in a KMK encoder map.
    pub fn get_encoder_key_action(&self, event: EncoderEvent) -> KeymapResult<KeyAction> {
        let layer = self.get_activated_layer();
        let encoder = self.get_encoder_action(event.id as usize, layer as usize)?;
        let action = match event.direction {
            Direction::Clockwise => encoder.clockwise(),
            Direction::CounterClockwise => encoder.counter_clockwise(),
        };
        debug!("Encoder {} {:?} on layer {}: {:?}", event.id, event.direction, layer, action);
        Ok(action)
    }

    /// The highest active layer, or the default layer if none is active
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    /// Whether a layer is active, the default layer is always active
    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        layer_num == self.default_layer || self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }

    /// Activate given layer and deactivate all other layers, except the default layer
    pub fn toggle_only(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.layer_state = [false; NUM_LAYER];
        self.layer_state[layer_num as usize] = true;
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }
}
