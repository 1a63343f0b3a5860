mod groq_client;
pub mod http;
mod json_file_result_repository;
mod mock_completion;

pub use groq_client::*;
pub use json_file_result_repository::*;
pub use mock_completion::*;
