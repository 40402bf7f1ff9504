/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CHARCOAL: Self = Self::rgb8(0x1a, 0x1a, 0x1a);
    pub const GRAPHITE: Self = Self::rgb8(0x2d, 0x2d, 0x2d);
    pub const SLATE:    Self = Self::rgb8(0x3d, 0x3d, 0x3d);
    pub const WHITE:    Self = Self::rgb8(0xff, 0xff, 0xff);
    pub const BLUE:     Self = Self::rgb8(0x00, 0x78, 0xd4);
    pub const RED:      Self = Self::rgb8(0xff, 0x44, 0x44);
    pub const ORANGE:   Self = Self::rgb8(0xff, 0xaa, 0x00);
    pub const GREEN:    Self = Self::rgb8(0x00, 0xcc, 0x44);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };

        let alpha = match hex.len() {
            6 => 255,
            8 => byte(6)?,
            _ => return None,
        };

        Some(Self::rgb8(byte(0)?, byte(2)?, byte(4)?).with_alpha(alpha as f32 / 255.0))
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}
