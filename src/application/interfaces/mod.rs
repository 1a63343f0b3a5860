mod completion_service;
mod result_repository;

pub use completion_service::*;
pub use result_repository::*;
