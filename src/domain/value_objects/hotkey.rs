//! Hotkey value object - the HotKey field of a shell link header
//!
//! The field is two bytes: the low byte is a virtual-key code and the high
//! byte is a `HOTKEYF_*` modifier mask. In the mask, 0x06 reads as
//! ctrl+shift.

use std::fmt;

/// `HOTKEYF_ALT`
pub const HOTKEYF_ALT: u8 = 0x01;
/// `HOTKEYF_CONTROL`
pub const HOTKEYF_CONTROL: u8 = 0x02;
/// `HOTKEYF_SHIFT`
pub const HOTKEYF_SHIFT: u8 = 0x04;

/// Hotkey modifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HotkeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl HotkeyModifiers {
    pub const NONE: HotkeyModifiers = HotkeyModifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Decode the `HOTKEYF_*` mask; unknown bits are ignored
    pub fn from_bits(bits: u8) -> Self {
        Self {
            ctrl: bits & HOTKEYF_CONTROL != 0,
            shift: bits & HOTKEYF_SHIFT != 0,
            alt: bits & HOTKEYF_ALT != 0,
        }
    }

    /// Encode back into a `HOTKEYF_*` mask
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.ctrl {
            bits |= HOTKEYF_CONTROL;
        }
        if self.shift {
            bits |= HOTKEYF_SHIFT;
        }
        if self.alt {
            bits |= HOTKEYF_ALT;
        }
        bits
    }

    /// Check if no modifiers are set
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }

    /// Modifier tokens in display order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.ctrl {
            names.push("ctrl");
        }
        if self.shift {
            names.push("shift");
        }
        if self.alt {
            names.push("alt");
        }
        names
    }
}

/// Virtual keys that can appear in a shortcut's hotkey field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    /// `A`-`Z` (0x41-0x5A)
    Letter(char),
    /// `0`-`9` on the main row (0x30-0x39)
    Digit(u8),
    /// `F1`-`F24` (0x70-0x87)
    Function(u8),
    /// Numeric keypad `0`-`9` (0x60-0x69)
    NumPad(u8),

    Backspace,
    Tab,
    Enter,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    PrintScreen,
    Insert,
    Delete,

    // Keypad operators
    Multiply,
    Add,
    Separator,
    Subtract,
    Decimal,
    Divide,

    NumLock,
    ScrollLock,

    // OEM punctuation (US layout)
    Semicolon,
    Equals,
    Comma,
    Minus,
    Period,
    Slash,
    Backtick,
    LeftBracket,
    Backslash,
    RightBracket,
    Quote,
}

impl VirtualKey {
    /// Look up a virtual-key code. Codes outside the table yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        let key = match code {
            0x41..=0x5A => VirtualKey::Letter(code as char),
            0x30..=0x39 => VirtualKey::Digit(code - 0x30),
            0x70..=0x87 => VirtualKey::Function(code - 0x70 + 1),
            0x60..=0x69 => VirtualKey::NumPad(code - 0x60),
            0x08 => VirtualKey::Backspace,
            0x09 => VirtualKey::Tab,
            0x0D => VirtualKey::Enter,
            0x13 => VirtualKey::Pause,
            0x14 => VirtualKey::CapsLock,
            0x1B => VirtualKey::Escape,
            0x20 => VirtualKey::Space,
            0x21 => VirtualKey::PageUp,
            0x22 => VirtualKey::PageDown,
            0x23 => VirtualKey::End,
            0x24 => VirtualKey::Home,
            0x25 => VirtualKey::Left,
            0x26 => VirtualKey::Up,
            0x27 => VirtualKey::Right,
            0x28 => VirtualKey::Down,
            0x2C => VirtualKey::PrintScreen,
            0x2D => VirtualKey::Insert,
            0x2E => VirtualKey::Delete,
            0x6A => VirtualKey::Multiply,
            0x6B => VirtualKey::Add,
            0x6C => VirtualKey::Separator,
            0x6D => VirtualKey::Subtract,
            0x6E => VirtualKey::Decimal,
            0x6F => VirtualKey::Divide,
            0x90 => VirtualKey::NumLock,
            0x91 => VirtualKey::ScrollLock,
            0xBA => VirtualKey::Semicolon,
            0xBB => VirtualKey::Equals,
            0xBC => VirtualKey::Comma,
            0xBD => VirtualKey::Minus,
            0xBE => VirtualKey::Period,
            0xBF => VirtualKey::Slash,
            0xC0 => VirtualKey::Backtick,
            0xDB => VirtualKey::LeftBracket,
            0xDC => VirtualKey::Backslash,
            0xDD => VirtualKey::RightBracket,
            0xDE => VirtualKey::Quote,
            _ => return None,
        };
        Some(key)
    }

    /// The virtual-key code
    pub fn code(&self) -> u8 {
        match self {
            VirtualKey::Letter(c) => *c as u8,
            VirtualKey::Digit(d) => 0x30 + d,
            VirtualKey::Function(n) => 0x70 + n - 1,
            VirtualKey::NumPad(d) => 0x60 + d,
            VirtualKey::Backspace => 0x08,
            VirtualKey::Tab => 0x09,
            VirtualKey::Enter => 0x0D,
            VirtualKey::Pause => 0x13,
            VirtualKey::CapsLock => 0x14,
            VirtualKey::Escape => 0x1B,
            VirtualKey::Space => 0x20,
            VirtualKey::PageUp => 0x21,
            VirtualKey::PageDown => 0x22,
            VirtualKey::End => 0x23,
            VirtualKey::Home => 0x24,
            VirtualKey::Left => 0x25,
            VirtualKey::Up => 0x26,
            VirtualKey::Right => 0x27,
            VirtualKey::Down => 0x28,
            VirtualKey::PrintScreen => 0x2C,
            VirtualKey::Insert => 0x2D,
            VirtualKey::Delete => 0x2E,
            VirtualKey::Multiply => 0x6A,
            VirtualKey::Add => 0x6B,
            VirtualKey::Separator => 0x6C,
            VirtualKey::Subtract => 0x6D,
            VirtualKey::Decimal => 0x6E,
            VirtualKey::Divide => 0x6F,
            VirtualKey::NumLock => 0x90,
            VirtualKey::ScrollLock => 0x91,
            VirtualKey::Semicolon => 0xBA,
            VirtualKey::Equals => 0xBB,
            VirtualKey::Comma => 0xBC,
            VirtualKey::Minus => 0xBD,
            VirtualKey::Period => 0xBE,
            VirtualKey::Slash => 0xBF,
            VirtualKey::Backtick => 0xC0,
            VirtualKey::LeftBracket => 0xDB,
            VirtualKey::Backslash => 0xDC,
            VirtualKey::RightBracket => 0xDD,
            VirtualKey::Quote => 0xDE,
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VirtualKey::Letter(c) => return write!(f, "{}", c),
            VirtualKey::Digit(d) => return write!(f, "{}", d),
            VirtualKey::Function(n) => return write!(f, "F{}", n),
            VirtualKey::NumPad(d) => return write!(f, "NumPad{}", d),
            VirtualKey::Backspace => "Backspace",
            VirtualKey::Tab => "Tab",
            VirtualKey::Enter => "Enter",
            VirtualKey::Pause => "Pause",
            VirtualKey::CapsLock => "CapsLock",
            VirtualKey::Escape => "Escape",
            VirtualKey::Space => "Space",
            VirtualKey::PageUp => "PageUp",
            VirtualKey::PageDown => "PageDown",
            VirtualKey::End => "End",
            VirtualKey::Home => "Home",
            VirtualKey::Left => "Left",
            VirtualKey::Up => "Up",
            VirtualKey::Right => "Right",
            VirtualKey::Down => "Down",
            VirtualKey::PrintScreen => "PrintScreen",
            VirtualKey::Insert => "Insert",
            VirtualKey::Delete => "Delete",
            VirtualKey::Multiply => "Multiply",
            VirtualKey::Add => "Add",
            VirtualKey::Separator => "Separator",
            VirtualKey::Subtract => "Subtract",
            VirtualKey::Decimal => "Decimal",
            VirtualKey::Divide => "Divide",
            VirtualKey::NumLock => "NumLock",
            VirtualKey::ScrollLock => "ScrollLock",
            VirtualKey::Semicolon => ";",
            VirtualKey::Equals => "=",
            VirtualKey::Comma => ",",
            VirtualKey::Minus => "-",
            VirtualKey::Period => ".",
            VirtualKey::Slash => "/",
            VirtualKey::Backtick => "`",
            VirtualKey::LeftBracket => "[",
            VirtualKey::Backslash => "\\",
            VirtualKey::RightBracket => "]",
            VirtualKey::Quote => "'",
        };
        write!(f, "{}", name)
    }
}

/// A decoded shortcut hotkey
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub modifiers: HotkeyModifiers,
    pub key: Option<VirtualKey>,
}

impl Hotkey {
    /// Create a new hotkey
    pub fn new(modifiers: HotkeyModifiers, key: Option<VirtualKey>) -> Self {
        Self { modifiers, key }
    }

    /// Decode the two raw header bytes
    pub fn from_bytes(low: u8, high: u8) -> Self {
        Self {
            modifiers: HotkeyModifiers::from_bits(high),
            key: VirtualKey::from_code(low),
        }
    }

    /// True when neither a modifier nor a recognised key is present
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.key.is_none()
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .modifiers
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(key) = self.key {
            parts.push(key.to_string());
        }
        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shift_a() {
        let hk = Hotkey::from_bytes(0x41, 0x06);
        assert!(hk.modifiers.ctrl);
        assert!(hk.modifiers.shift);
        assert!(!hk.modifiers.alt);
        assert_eq!(hk.key, Some(VirtualKey::Letter('A')));
        assert_eq!(hk.to_string(), "ctrl+shift+A");
    }

    #[test]
    fn test_empty_hotkey() {
        let hk = Hotkey::from_bytes(0x00, 0x00);
        assert!(hk.is_empty());
        assert_eq!(hk.to_string(), "");
    }

    #[test]
    fn test_modifier_order_is_ctrl_shift_alt() {
        let hk = Hotkey::from_bytes(0x00, 0x07);
        assert_eq!(hk.to_string(), "ctrl+shift+alt");
    }

    #[test]
    fn test_unrecognised_key_has_no_name() {
        // 0x01 is VK_LBUTTON, never a valid hotkey key
        let hk = Hotkey::from_bytes(0x01, HOTKEYF_ALT);
        assert_eq!(hk.key, None);
        assert_eq!(hk.to_string(), "alt");

        assert_eq!(Hotkey::from_bytes(0xFF, 0x00).to_string(), "");
    }

    #[test]
    fn test_key_without_modifiers() {
        assert_eq!(Hotkey::from_bytes(0x7B, 0x00).to_string(), "F12");
        assert_eq!(Hotkey::from_bytes(0x35, 0x00).to_string(), "5");
        assert_eq!(Hotkey::from_bytes(0x63, 0x00).to_string(), "NumPad3");
    }

    #[test]
    fn test_unknown_modifier_bits_ignored() {
        let mods = HotkeyModifiers::from_bits(0xF8);
        assert!(mods.is_empty());
        assert_eq!(HotkeyModifiers::from_bits(0xFA).names(), vec!["ctrl"]);
    }

    #[test]
    fn test_code_matches_table() {
        for code in 0u8..=255 {
            if let Some(key) = VirtualKey::from_code(code) {
                assert_eq!(key.code(), code, "code mismatch for {}", key);
            }
        }
    }

    #[test]
    fn test_modifier_bits() {
        let mods = HotkeyModifiers {
            ctrl: true,
            shift: false,
            alt: true,
        };
        assert_eq!(mods.bits(), HOTKEYF_CONTROL | HOTKEYF_ALT);
    }
}
