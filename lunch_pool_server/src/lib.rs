//! # Lunch Pool Server
//! This crate hosts the HTTP service for the lunch pool gateway. It is responsible for:
//! * Serving the shared order pool: status, aggregation, conflict reports, line retraction and session reset.
//! * The store/menu catalog browse and registration surface.
//! * The shared chat, including the nickname denylist.
//! * The pickup-duty roulette.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! `/health` is unauthenticated and unscoped; everything else lives under `/api`. There is no authentication
//! anywhere; the product's only identity control is the chat nickname denylist, enforced in the engine.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod refresh_worker;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
