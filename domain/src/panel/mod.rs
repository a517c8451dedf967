//! Panel definition
//!
//! A panel is static data: an ordered list of [`ReviewerSpec`] values plus a
//! display title. The six- and twelve-reviewer variants are the same concept
//! at two sizes; see [`PanelPreset`].

pub mod definition;
pub mod personas;
pub mod preset;
pub mod reviewer;

pub use definition::Panel;
pub use preset::PanelPreset;
pub use reviewer::ReviewerSpec;
