//! Terminal presentation: environment detection, badges, tables and the
//! unlock spinner.

pub mod context;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use progress::Spinner;
pub use theme::Badge;
