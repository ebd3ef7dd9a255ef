//! Sales statistics.

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Metric keys accepted by `POST /orders/statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    /// Minecraft copies sold
    ItemSoldMinecraft,
    /// Minecraft prepaid cards redeemed
    PrepaidCardRedeemedMinecraft,
    /// Cobalt copies sold
    ItemSoldCobalt,
    /// Scrolls copies sold
    ItemSoldScrolls,
    /// Cobalt prepaid cards redeemed
    PrepaidCardRedeemedCobalt,
    /// Minecraft Dungeons copies sold
    ItemSoldDungeons,
}

/// Aggregated sales figures for the requested metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statistics {
    /// Total sold across all requested metrics
    pub total: u64,
    /// Sold in the last 24 hours
    #[serde(rename = "last24h")]
    pub last_24h: u64,
    /// Average sales per second over the last 24 hours
    #[serde(rename = "saleVelocityPerSeconds")]
    pub sale_velocity: f64,
}
