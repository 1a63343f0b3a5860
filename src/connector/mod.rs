//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion service (Groq over HTTP, scripted mock)
//! - Session mirror (JSON file)
//! - HTTP API (axum) and CLI controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Router};
