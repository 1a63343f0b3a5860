//! # Application Layer
//!
//! Use cases and orchestration logic coordinating domain and connector layers.

pub mod interfaces;
pub mod use_cases;
mod view_model_store;

pub use interfaces::*;
pub use use_cases::*;
pub use view_model_store::*;
