/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a normal key with modifier action. For example, `wm!(Escape, GUI)` is QMK's `LGUI(KC_ESC)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggle($x))
    };
}

/// Create a layer toggle only action (activate layer `n` and deactivate all other layers), `n` is the layer number
#[macro_export]
macro_rules! to {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggleOnly($x))
    };
}

/// Create a tap dance action, `n` is the index of the tap dance
#[macro_export]
macro_rules! td {
    ($x: literal) => {
        $crate::action::KeyAction::TapDance($x)
    };
}

/// Create a macro trigger action, `n` is the index of the macro sequence
#[macro_export]
macro_rules! mc {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::TriggerMacro($x))
    };
}

/// Create a MIDI note action, `n` is the note number
#[macro_export]
macro_rules! midi {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::MidiNote($x))
    };
}

/// Create an encoder action, the first argument is the clockwise action, the second is the counter-clockwise action
#[macro_export]
macro_rules! encoder {
    ($clockwise: expr, $counter_clockwise: expr) => {
        $crate::action::EncoderAction::new($clockwise, $counter_clockwise)
    };
    ($clockwise: expr, $counter_clockwise: expr, $press: expr) => {
        $crate::action::EncoderAction::new($clockwise, $counter_clockwise).with_press($press)
    };
}
