use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// KeyCode is the internal representation of all keycodes used by the macro pads.
///
/// Values in `0x0000..=0x00FF` are identical to the HID usage ids, which are also
/// QMK's basic keycodes, so a basic keycode converts to the 16-bit table format as is.
/// RGB control keycodes live in `0x620..=0x635`, QMK stops at `0x634`.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// `a` and `A`
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002A,
    Tab = 0x002B,
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    NumLock = 0x0053,
    /// `/` on keypad
    KpSlash = 0x0054,
    /// `*` on keypad
    KpAsterisk = 0x0055,
    /// `-` on keypad
    KpMinus = 0x0056,
    /// `+` on keypad
    KpPlus = 0x0057,
    KpEnter = 0x0058,
    Kp1 = 0x0059,
    Kp2 = 0x005A,
    Kp3 = 0x005B,
    Kp4 = 0x005C,
    Kp5 = 0x005D,
    Kp6 = 0x005E,
    Kp7 = 0x005F,
    Kp8 = 0x0060,
    Kp9 = 0x0061,
    Kp0 = 0x0062,
    KpDot = 0x0063,
    Application = 0x0065,
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    // Backlight and RGB keycodes, uses 0x600 ~ 0x6FF
    RgbTog = 0x620,
    RgbModeForward = 0x621,
    RgbModeReverse = 0x622,
    RgbHui = 0x623,
    RgbHud = 0x624,
    RgbSai = 0x625,
    RgbSad = 0x626,
    RgbVai = 0x627,
    RgbVad = 0x628,
    RgbSpi = 0x629,
    RgbSpd = 0x62A,
    RgbModePlain = 0x62B,
    RgbModeBreathe = 0x62C,
    RgbModeRainbow = 0x62D,
    RgbModeSwirl = 0x62E,
    RgbModeSnake = 0x62F,
    RgbModeKnight = 0x630,
    RgbModeXmas = 0x631,
    RgbModeGradient = 0x632,
    RgbModeRgbtest = 0x633,
    RgbModeTwinkle = 0x634,
    /// Not in QMK, cycles the hue while breathing
    RgbModeBreatheRainbow = 0x635,
}

impl KeyCode {
    /// Returns `true` if the keycode is a basic keycode, which is shared by HID and QMK
    pub fn is_basic(self) -> bool {
        KeyCode::No <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode is sent through the consumer page by the runtime
    pub fn is_consumer(self) -> bool {
        KeyCode::AudioMute <= self && self <= KeyCode::MediaPlayPause
    }

    /// Returns `true` if the keycode controls the RGB underglow
    pub fn is_rgb(self) -> bool {
        KeyCode::RgbTog <= self && self <= KeyCode::RgbModeBreatheRainbow
    }
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        Self::from_repr(value).unwrap_or(KeyCode::No)
    }
}

/// Convert an ascii character to the keycode which types it.
/// The returned bool is true when shift has to be held.
/// Characters which can't be typed return `(KeyCode::No, false)`.
pub fn from_ascii(ascii: u8) -> (KeyCode, bool) {
    match ascii {
        b'a'..=b'z' => (KeyCode::from(KeyCode::A as u16 + (ascii - b'a') as u16), false),
        b'A'..=b'Z' => (KeyCode::from(KeyCode::A as u16 + (ascii - b'A') as u16), true),
        b'1'..=b'9' => (KeyCode::from(KeyCode::Kc1 as u16 + (ascii - b'1') as u16), false),
        b'0' => (KeyCode::Kc0, false),
        b'!' => (KeyCode::Kc1, true),
        b'@' => (KeyCode::Kc2, true),
        b'#' => (KeyCode::Kc3, true),
        b'$' => (KeyCode::Kc4, true),
        b'%' => (KeyCode::Kc5, true),
        b'^' => (KeyCode::Kc6, true),
        b'&' => (KeyCode::Kc7, true),
        b'*' => (KeyCode::Kc8, true),
        b'(' => (KeyCode::Kc9, true),
        b')' => (KeyCode::Kc0, true),
        b'\n' => (KeyCode::Enter, false),
        b'\t' => (KeyCode::Tab, false),
        b' ' => (KeyCode::Space, false),
        b'-' => (KeyCode::Minus, false),
        b'_' => (KeyCode::Minus, true),
        b'=' => (KeyCode::Equal, false),
        b'+' => (KeyCode::Equal, true),
        b'[' => (KeyCode::LeftBracket, false),
        b'{' => (KeyCode::LeftBracket, true),
        b']' => (KeyCode::RightBracket, false),
        b'}' => (KeyCode::RightBracket, true),
        b'\\' => (KeyCode::Backslash, false),
        b'|' => (KeyCode::Backslash, true),
        b';' => (KeyCode::Semicolon, false),
        b':' => (KeyCode::Semicolon, true),
        b'\'' => (KeyCode::Quote, false),
        b'"' => (KeyCode::Quote, true),
        b'`' => (KeyCode::Grave, false),
        b'~' => (KeyCode::Grave, true),
        b',' => (KeyCode::Comma, false),
        b'<' => (KeyCode::Comma, true),
        b'.' => (KeyCode::Dot, false),
        b'>' => (KeyCode::Dot, true),
        b'/' => (KeyCode::Slash, false),
        b'?' => (KeyCode::Slash, true),
        _ => (KeyCode::No, false),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keycode_values_match_qmk() {
        assert_eq!(KeyCode::AudioMute as u16, 0xA8);
        assert_eq!(KeyCode::AudioVolUp as u16, 0xA9);
        assert_eq!(KeyCode::AudioVolDown as u16, 0xAA);
        assert_eq!(KeyCode::MediaPlayPause as u16, 0xAE);
        assert_eq!(KeyCode::PrintScreen as u16, 0x46);
        assert_eq!(KeyCode::Escape as u16, 0x29);
    }

    #[test]
    fn test_from_repr() {
        assert_eq!(KeyCode::from_repr(0x50), Some(KeyCode::Left));
        assert_eq!(KeyCode::from_repr(0x62E), Some(KeyCode::RgbModeSwirl));
        // Gap in the HID table
        assert_eq!(KeyCode::from_repr(0x32), None);
        assert_eq!(KeyCode::from(0x32), KeyCode::No);
    }

    #[test]
    fn test_classification() {
        assert!(KeyCode::AudioMute.is_consumer());
        assert!(KeyCode::LGui.is_modifier());
        assert!(!KeyCode::Escape.is_modifier());
        assert!(KeyCode::RgbTog.is_rgb());
        assert!(!KeyCode::RgbTog.is_basic());
        assert!(KeyCode::PrintScreen.is_basic());
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(from_ascii(b'g'), (KeyCode::G, false));
        assert_eq!(from_ascii(b'T'), (KeyCode::T, true));
        assert_eq!(from_ascii(b'0'), (KeyCode::Kc0, false));
        assert_eq!(from_ascii(b'9'), (KeyCode::Kc9, false));
        assert_eq!(from_ascii(b'"'), (KeyCode::Quote, true));
        assert_eq!(from_ascii(b':'), (KeyCode::Semicolon, true));
        assert_eq!(from_ascii(0x7F), (KeyCode::No, false));
    }
}
