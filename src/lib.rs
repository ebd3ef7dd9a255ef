//! mojang_client library: Mojang account API client
//!
//! This library resolves usernames to account ids, fetches profiles and their
//! textures, reads sales statistics and the blocked-server list, and runs the
//! Microsoft / Xbox Live login chain to obtain a Minecraft services session.
//!
//! Every response goes through one classifier that sorts it into a JSON object,
//! a JSON array, a raw body, or an unrecognized status, and raises on 5xx
//! statuses and on `error` fields in successful responses.
//!
//! # Example
//!
//! ```no_run
//! use mojang_client::{Collapsed, Config, MojangApi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MojangApi::new(Config::default())?;
//!
//! if let Some(uuid) = api.resolve_uuid("Notch").await? {
//!     println!("Notch is {uuid}");
//! }
//!
//! match api.get_profile(vec!["Notch", "jeb_"]).await? {
//!     Collapsed::Empty => println!("nobody found"),
//!     Collapsed::Single(profile) => println!("one profile: {profile}"),
//!     Collapsed::Many(profiles) => println!("{} profiles", profiles.len()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Calls within one operation are
//! awaited strictly in sequence.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod dispatch;
mod error_handling;
pub mod initialization;
pub mod models;
pub mod validation;

// Re-export public API
pub use api::{MojangApi, ProfileQuery};
pub use auth::{Authenticator, LoginOutcome, LoginRequest, Session};
pub use config::{Config, LogFormat, LogLevel};
pub use dispatch::{ClassifiedResponse, Dispatcher, RawResponse};
pub use error_handling::{ApiError, ApiResult, InitializationError};
pub use models::{
    Collapsed, DefaultSkin, HistoryEntry, Metric, ProfileRecord, SkinModel, Statistics, Texture,
    TextureKind,
};
pub use validation::{is_valid_json, is_valid_name, is_valid_uuid};
