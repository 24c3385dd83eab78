use std::fmt::Display;

use lpg_common::Won;
use lunch_pool_engine::db_types::NewOrderLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub eater_name: String,
    pub store_id: i64,
    pub menu_id: i64,
    /// The unit price captured at order time. Clients send the price of the menu item as they saw it; later menu
    /// edits don't retroactively change the pooled total.
    pub price: Won,
    pub quantity: i64,
}

impl From<NewOrderRequest> for NewOrderLine {
    fn from(req: NewOrderRequest) -> Self {
        NewOrderLine::new(req.eater_name, req.store_id, req.menu_id, req.price, req.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOrdersRequest {
    pub ids: Vec<i64>,
}

/// The tuple fallback for retraction when no line id is at hand. Matches exactly one row at most.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetractMatchRequest {
    pub eater_name: String,
    pub store_name: String,
    pub menu_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPostRequest {
    pub username: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatWindowParams {
    /// Overrides the configured display window for this read only.
    pub window_secs: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteRequest {
    pub store_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}
