use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);

    /// Parses `#rrggbb` or one of the eight ANSI color names.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim();
        if let Some(hex) = v.strip_prefix('#') {
            if hex.len() != 6 {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::Rgb(r, g, b));
        }
        match v.to_ascii_lowercase().as_str() {
            "reset" | "default" => Some(Self::Reset),
            "black" => Some(Self::BLACK),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "yellow" => Some(Self::YELLOW),
            "blue" => Some(Self::BLUE),
            "magenta" => Some(Self::MAGENTA),
            "cyan" => Some(Self::CYAN),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const REVERSE: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }
}

/// The handful of colors a screen paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Cursor row of a highlighted region.
    pub highlight: Style,
    pub border: Style,
    pub title: Style,
    pub text: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: Style::default().fg(Color::MAGENTA),
            border: Style::default(),
            title: Style::default().add_mod(Mod::BOLD),
            text: Style::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
