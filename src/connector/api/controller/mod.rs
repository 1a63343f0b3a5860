pub mod query_controller;
pub mod reset_controller;
pub mod result_controller;
pub mod sample_controller;

pub use query_controller::QueryController;
pub use reset_controller::ResetController;
pub use result_controller::ResultController;
pub use sample_controller::SampleController;
