//! Terminal color support.
//!
//! A small 16-color palette with ANSI escape rendering. Whether color is
//! actually emitted is decided by a [`ColorConfig`] value that the driver
//! constructs once and passes wherever colored output is produced; there is
//! no global enable flag.

use std::fmt;

/// Standard text color codes
///
/// The palette mirrors the classic 16-color console set.
///
/// # Examples
///
/// ```
/// use selc_util::color::Color;
///
/// assert_eq!(Color::Red.ansi_code(), "31");
/// assert_eq!(Color::LightRed.ansi_code(), "91");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Black
    Black,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Cyan
    Cyan,
    /// Red
    Red,
    /// Magenta
    Magenta,
    /// Brown (rendered as dark yellow)
    Brown,
    /// Light gray
    LightGray,
    /// Dark gray
    DarkGray,
    /// Light blue
    LightBlue,
    /// Light green
    LightGreen,
    /// Light cyan
    LightCyan,
    /// Light red
    LightRed,
    /// Light magenta
    LightMagenta,
    /// Yellow
    Yellow,
    /// White
    White,
}

impl Color {
    /// The ANSI SGR code for this color
    pub const fn ansi_code(&self) -> &'static str {
        match self {
            Color::Black => "30",
            Color::Red => "31",
            Color::Green => "32",
            Color::Brown => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
            Color::LightGray => "37",
            Color::DarkGray => "90",
            Color::LightRed => "91",
            Color::LightGreen => "92",
            Color::Yellow => "93",
            Color::LightBlue => "94",
            Color::LightMagenta => "95",
            Color::LightCyan => "96",
            Color::White => "97",
        }
    }
}

/// Decides whether output gets ANSI color codes
///
/// # Examples
///
/// ```
/// use selc_util::color::{Color, ColorConfig};
///
/// let colors = ColorConfig::new(true);
/// assert_eq!(colors.paint(Color::Red, "bad"), "\x1b[31mbad\x1b[0m");
///
/// let plain = ColorConfig::new(false);
/// assert_eq!(plain.paint(Color::Red, "bad"), "bad");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a config with color explicitly enabled or disabled
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a config that never emits color
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Returns true if color output is enabled
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the escape sequence for `color` when enabled
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", color.ansi_code(), text)
        } else {
            text.to_string()
        }
    }

    /// Like [`paint`](Self::paint), with bold emphasis
    pub fn paint_bold(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("\x1b[1;{}m{}\x1b[0m", color.ansi_code(), text)
        } else {
            text.to_string()
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.ansi_code())
    }
}
