pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::LevelBand;

use batmon_config::{ThemeConfig, ThresholdConfig};

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to the built-in dark palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:      Color,
    pub surface:         Color,
    pub border:          Color,
    pub foreground:      Color,
    pub accent:          Color,
    pub warning:         Color,
    pub caution:         Color,
    pub nominal:         Color,
    pub font_size:       f32,
    pub title_size:      f32,
    pub percentage_size: f32,
    pub border_radius:   f32,
    pub padding:         u16,
    pub spacing:         u16,
    /// `strftime` format string for the "last updated" footer.
    pub time_format:     String,
    /// Percentage bands for [`Theme::level_color`].
    pub thresholds:      ThresholdConfig,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` and `[thresholds]`
    /// sections.
    pub fn from_config(cfg: &ThemeConfig, thresholds: ThresholdConfig) -> Self {
        Self {
            background:      parse_or(&cfg.background, Color::CHARCOAL),
            surface:         parse_or(&cfg.surface, Color::GRAPHITE),
            border:          parse_or(&cfg.border, Color::SLATE),
            foreground:      parse_or(&cfg.foreground, Color::WHITE),
            accent:          parse_or(&cfg.accent, Color::BLUE),
            warning:         parse_or(&cfg.warning, Color::RED),
            caution:         parse_or(&cfg.caution, Color::ORANGE),
            nominal:         parse_or(&cfg.nominal, Color::GREEN),
            font_size:       cfg.font_size,
            title_size:      cfg.title_size,
            percentage_size: cfg.percentage_size,
            border_radius:   cfg.border_radius,
            padding:         cfg.padding,
            spacing:         cfg.spacing,
            time_format:     cfg.time_format.clone(),
            thresholds:      thresholds.normalized(),
        }
    }

    /// Color for a charge percentage.
    pub fn level_color(&self, pct: u8) -> Color {
        self.band_color(LevelBand::for_percentage(pct, self.thresholds))
    }

    pub fn band_color(&self, band: LevelBand) -> Color {
        match band {
            LevelBand::Warning => self.warning,
            LevelBand::Caution => self.caution,
            LevelBand::Nominal => self.nominal,
        }
    }

    /// Color used for the error state.
    pub fn error_color(&self) -> Color {
        self.warning
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), ThresholdConfig::default())
    }
}

fn parse_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("invalid color '{hex}' in theme; using default");
        fallback
    })
}
