use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use lpg_common::Won;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);

//--------------------------------------   StoreCategory   -----------------------------------------------------------
/// The closed set of cuisine categories a store can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StoreCategory {
    FastFood,
    CafeDessert,
    Korean,
    Stew,
    SnackBar,
    Chinese,
    CutletSashimi,
    Pizza,
    Chicken,
    Western,
    Bbq,
    Asian,
    JokbalBossam,
}

impl StoreCategory {
    pub const ALL: [StoreCategory; 13] = [
        StoreCategory::FastFood,
        StoreCategory::CafeDessert,
        StoreCategory::Korean,
        StoreCategory::Stew,
        StoreCategory::SnackBar,
        StoreCategory::Chinese,
        StoreCategory::CutletSashimi,
        StoreCategory::Pizza,
        StoreCategory::Chicken,
        StoreCategory::Western,
        StoreCategory::Bbq,
        StoreCategory::Asian,
        StoreCategory::JokbalBossam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::FastFood => "fast_food",
            StoreCategory::CafeDessert => "cafe_dessert",
            StoreCategory::Korean => "korean",
            StoreCategory::Stew => "stew",
            StoreCategory::SnackBar => "snack_bar",
            StoreCategory::Chinese => "chinese",
            StoreCategory::CutletSashimi => "cutlet_sashimi",
            StoreCategory::Pizza => "pizza",
            StoreCategory::Chicken => "chicken",
            StoreCategory::Western => "western",
            StoreCategory::Bbq => "bbq",
            StoreCategory::Asian => "asian",
            StoreCategory::JokbalBossam => "jokbal_bossam",
        }
    }
}

impl Display for StoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StoreCategory {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| ConversionError(format!("Invalid store category: {s}")))
    }
}

//--------------------------------------   WorkingDays    ------------------------------------------------------------
/// The days of the week a store is open, stored as a comma-separated list of short day names ("Mon,Tue,…").
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct WorkingDays(String);

impl Default for WorkingDays {
    fn default() -> Self {
        Self::from_days(&[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri])
    }
}

impl WorkingDays {
    pub fn from_days(days: &[Weekday]) -> Self {
        let csv = days.iter().map(|d| d.to_string()).collect::<Vec<String>>().join(",");
        Self(csv)
    }

    pub fn days(&self) -> Vec<Weekday> {
        self.0.split(',').filter_map(|token| token.trim().parse::<Weekday>().ok()).collect()
    }

    pub fn includes(&self, day: Weekday) -> bool {
        self.days().contains(&day)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WorkingDays {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut days = Vec::new();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let day = token.parse::<Weekday>().map_err(|_| ConversionError(format!("Invalid working day: {token}")))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(Self::from_days(&days))
    }
}

impl Display for WorkingDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------      Store       ------------------------------------------------------------
/// A registered restaurant. Stores are created via the registration surface and are read-only inputs to the
/// order-pool core thereafter.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub category: StoreCategory,
    pub rating: f64,
    pub min_order_amount: Won,
    pub working_days: WorkingDays,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------     NewStore     ------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub category: StoreCategory,
    pub rating: f64,
    /// The store will not accept the pooled order until the pooled total reaches this amount.
    pub min_order_amount: Won,
    pub working_days: WorkingDays,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

//--------------------------------------   StoreSummary   ------------------------------------------------------------
/// The store fields the browsing surface needs: just enough to pick a store and know its threshold.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StoreSummary {
    pub id: i64,
    pub name: String,
    pub min_order_amount: Won,
}

//--------------------------------------     MenuItem     ------------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub store_id: i64,
    #[sqlx(rename = "menu_name")]
    pub name: String,
    pub price: Won,
}

//--------------------------------------    NewMenuItem   ------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub store_id: i64,
    pub name: String,
    pub price: Won,
}

//--------------------------------------     OrderLine    ------------------------------------------------------------
/// One line item in the shared order pool, exactly as stored.
///
/// `price` is the unit price captured at order time; it may diverge from the menu's current price if the menu is
/// edited later. The line total is always `price × quantity`, recomputed from the current row on every read.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub eater_name: String,
    pub store_id: i64,
    pub menu_id: i64,
    pub price: Won,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl OrderLine {
    pub fn total(&self) -> Won {
        self.price * self.quantity
    }
}

//--------------------------------------   NewOrderLine   ------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub eater_name: String,
    pub store_id: i64,
    pub menu_id: i64,
    pub price: Won,
    pub quantity: i64,
}

impl NewOrderLine {
    pub fn new<S: Into<String>>(eater_name: S, store_id: i64, menu_id: i64, price: Won, quantity: i64) -> Self {
        Self { eater_name: eater_name.into(), store_id, menu_id, price, quantity }
    }
}

//-------------------------------------- OrderLineDetail  ------------------------------------------------------------
/// An order line joined with its store and menu names, as presented to viewers and to the conflict detector.
///
/// Lines whose store or menu has been deleted from the catalog do not appear in this view. That exclusion is
/// deliberate: an orphaned reference degrades to absence rather than failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrderLineDetail {
    pub id: i64,
    pub eater_name: String,
    pub store_name: String,
    pub menu_name: String,
    pub price: Won,
    pub quantity: i64,
    pub total: Won,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------  StoreTotalRow   ------------------------------------------------------------
/// One row of the per-store aggregation query: the store, its current pooled total and its threshold.
#[derive(Debug, Clone, FromRow)]
pub struct StoreTotalRow {
    pub store_name: String,
    pub total: Won,
    pub min_order_amount: Won,
}

//-------------------------------------- StorePopularity  ------------------------------------------------------------
/// Order-count ranking for the "popular stores" widget.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StorePopularity {
    pub store_name: String,
    pub order_count: i64,
}

//--------------------------------------   ChatMessage    ------------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

//-------------------------------------- NewChatMessage   ------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub username: String,
    pub message: String,
}

impl NewChatMessage {
    pub fn new<S: Into<String>, T: Into<String>>(username: S, message: T) -> Self {
        Self { username: username.into(), message: message.into() }
    }
}
