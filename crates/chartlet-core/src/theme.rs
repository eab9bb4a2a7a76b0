// File: crates/chartlet-core/src/theme.rs
// Summary: Light/Dark theming for chart backgrounds, frames, labels and series colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub frame: Color,
    pub label: Color,
    /// Colors handed out to series in order by `series_color`.
    pub palette: [Color; 4],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            frame: Color::from_argb(255, 180, 180, 190),
            label: Color::from_argb(255, 235, 235, 245),
            palette: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 230, 70),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            frame: Color::from_argb(255, 60, 60, 70),
            label: Color::from_argb(255, 20, 20, 30),
            palette: [
                Color::from_argb(255, 32, 120, 200),
                Color::from_argb(255, 20, 160, 90),
                Color::from_argb(255, 200, 60, 60),
                Color::from_argb(255, 200, 140, 0),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            frame: Color::from_argb(255, 0xff, 0xff, 0xff),
            label: Color::from_argb(255, 0xff, 0xff, 0xff),
            palette: [
                Color::from_argb(255, 0x00, 0xff, 0xff),
                Color::from_argb(255, 0x00, 0xff, 0x00),
                Color::from_argb(255, 0xff, 0x00, 0x00),
                Color::from_argb(255, 0xff, 0xff, 0x00),
            ],
        }
    }

    /// Palette entry `index`, wrapping around.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
