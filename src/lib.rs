//! Text-formatting helpers for Starbound game data.

pub mod color;
pub mod display;
pub mod planet;
pub mod playtime;

pub use color::strip_colors;
pub use display::join_list;
pub use planet::strip_planet_suffix;
pub use playtime::format_playtime;
