//! Terminal output vocabulary: status icons and styling.

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::DoctorTheme;
