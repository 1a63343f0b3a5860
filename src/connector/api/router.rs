use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;
use super::controller::{QueryController, ResetController, ResultController, SampleController};

pub struct Router<'a> {
    query_controller: QueryController<'a>,
    result_controller: ResultController<'a>,
    reset_controller: ResetController<'a>,
    sample_controller: SampleController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            query_controller: QueryController::new(container),
            result_controller: ResultController::new(container),
            reset_controller: ResetController::new(container),
            sample_controller: SampleController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Query {
                company_name,
                company_address,
                extra_info,
                review_type,
                format,
            } => {
                self.query_controller
                    .query(company_name, company_address, extra_info, review_type, format)
                    .await
            }
            Commands::Result { format } => self.result_controller.result(format).await,
            Commands::Reset => self.reset_controller.reset().await,
            Commands::Sample { format } => self.sample_controller.sample(format),
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
