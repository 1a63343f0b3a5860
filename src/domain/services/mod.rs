//! Pure transformations at either end of the completion call.

mod prompt_template;
mod response_parser;

pub use prompt_template::*;
pub use response_parser::*;
