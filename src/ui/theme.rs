//! Visual theme and styling.

use console::Style;

/// asdf-doctor's visual theme.
///
/// Probe result lines stay unstyled so their literal text survives log
/// scraping; only structural elements get color.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for section banners (bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without styling (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            dim: Style::new(),
        }
    }
}
