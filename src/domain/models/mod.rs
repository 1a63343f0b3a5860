mod completion;
mod query;
mod review_result;
mod sample_data;
mod view_state;

pub use completion::*;
pub use query::*;
pub use review_result::*;
pub use sample_data::*;
pub use view_state::*;
