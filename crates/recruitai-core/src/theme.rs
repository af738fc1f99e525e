use crate::{score::ScoreBucket, settings::ThemeMode};

/// Colour palette for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    // UI element colors
    pub title: Color,
    pub subtitle: Color,
    pub selected: Color,
    pub selected_bg: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,

    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub chip: Color,

    // Match score buckets
    pub score_good: Color,
    pub score_warn: Color,
    pub score_bad: Color,
}

/// RGB color, converted to the terminal's colour type at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Dark slate with the emerald/yellow/red score scale
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            colors: ThemeColors {
                background: Color::rgb(0x0f172a),
                foreground: Color::rgb(0xe2e8f0),
                border: Color::rgb(0x334155),
                border_focused: Color::rgb(0x3b82f6),

                success: Color::rgb(0x34d399),
                error: Color::rgb(0xf87171),
                info: Color::rgb(0x60a5fa),

                title: Color::rgb(0xffffff),
                subtitle: Color::rgb(0x9ca3af),
                selected: Color::rgb(0x60a5fa),
                selected_bg: Color::rgb(0x1e293b),
                tab_active: Color::rgb(0x3b82f6),
                tab_inactive: Color::rgb(0x6b7280),

                primary: Color::rgb(0x3b82f6),
                accent: Color::rgb(0xa855f7),
                muted: Color::rgb(0x6b7280),
                chip: Color::rgb(0x93c5fd),

                score_good: Color::rgb(0x34d399),
                score_warn: Color::rgb(0xfacc15),
                score_bad: Color::rgb(0xf87171),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            colors: ThemeColors {
                background: Color::rgb(0xf8fafc),
                foreground: Color::rgb(0x1e293b),
                border: Color::rgb(0xcbd5e1),
                border_focused: Color::rgb(0x2563eb),

                success: Color::rgb(0x059669),
                error: Color::rgb(0xdc2626),
                info: Color::rgb(0x2563eb),

                title: Color::rgb(0x0f172a),
                subtitle: Color::rgb(0x475569),
                selected: Color::rgb(0x1d4ed8),
                selected_bg: Color::rgb(0xe2e8f0),
                tab_active: Color::rgb(0x2563eb),
                tab_inactive: Color::rgb(0x94a3b8),

                primary: Color::rgb(0x2563eb),
                accent: Color::rgb(0x9333ea),
                muted: Color::rgb(0x64748b),
                chip: Color::rgb(0x1d4ed8),

                score_good: Color::rgb(0x059669),
                score_warn: Color::rgb(0xca8a04),
                score_bad: Color::rgb(0xdc2626),
            },
        }
    }

    /// System has no reliable terminal probe, so it follows the dark palette
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark | ThemeMode::System => Self::dark(),
        }
    }

    pub fn score_color(&self, bucket: ScoreBucket) -> Color {
        match bucket {
            ScoreBucket::Good => self.colors.score_good,
            ScoreBucket::Warn => self.colors.score_warn,
            ScoreBucket::Bad => self.colors.score_bad,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
