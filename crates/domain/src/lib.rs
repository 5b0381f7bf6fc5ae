//! Domain layer for the sales portal backend.
//!
//! This crate contains:
//! - Domain models (Tenant, Branding, Features, presets, reports)
//! - Business logic services (credential derivation, report rendering)
//! - The built-in demo catalog backing the dashboard

pub mod fixtures;
pub mod models;
pub mod services;
