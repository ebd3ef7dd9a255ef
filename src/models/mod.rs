//! Records returned by the API.
//!
//! These types only reshape fields the dispatch layer already validated.

mod collapsed;
mod history;
mod profile;
mod statistics;
mod texture;

pub use collapsed::Collapsed;
pub use history::HistoryEntry;
pub use profile::{DefaultSkin, ProfileRecord};
pub use statistics::{Metric, Statistics};
pub use texture::{SkinModel, Texture, TextureKind};
