//! The engine public API.
//!
//! The pure logic of the core lives in three small modules ([`aggregation`], [`conflict`] and [`roulette`]) and is
//! exercised by the stateful API structs ([`OrderPoolApi`], [`CatalogApi`], [`ChatApi`], [`RouletteApi`]) that bind
//! it to a backend.
pub mod aggregation;
mod catalog_api;
mod chat_api;
pub mod conflict;
mod errors;
pub mod objects;
mod order_pool_api;
pub mod roulette;
mod roulette_api;

pub use catalog_api::CatalogApi;
pub use chat_api::ChatApi;
pub use errors::RouletteError;
pub use order_pool_api::OrderPoolApi;
pub use roulette_api::RouletteApi;
