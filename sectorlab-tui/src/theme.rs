//! Parrot/neon theme tokens for the figure viewer
//!
//! Same palette as the rest of the terminal tooling, plus a fixed cycle of
//! series colors so each fund keeps its color across figures.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Steel blue (axes, unfocused borders)
    pub muted: Color,
    /// Grey (axis titles, placeholder text)
    pub text_secondary: Color,
}

const SERIES_COLORS: [Color; 12] = [
    Color::Rgb(255, 255, 255),
    Color::Rgb(0, 255, 255),
    Color::Rgb(0, 255, 128),
    Color::Rgb(255, 20, 147),
    Color::Rgb(255, 140, 0),
    Color::Rgb(147, 112, 219),
    Color::Rgb(255, 215, 0),
    Color::Rgb(100, 149, 237),
    Color::Rgb(255, 99, 71),
    Color::Rgb(127, 255, 212),
    Color::Rgb(218, 112, 214),
    Color::Rgb(173, 255, 47),
];

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            muted: Color::Rgb(100, 149, 237),
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for the `index`-th series; wraps after twelve.
    pub fn series_color(&self, index: usize) -> Color {
        SERIES_COLORS[index % SERIES_COLORS.len()]
    }
}
