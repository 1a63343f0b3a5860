mod generate_reviews;
mod submit_query;

pub use generate_reviews::*;
pub use submit_query::*;
