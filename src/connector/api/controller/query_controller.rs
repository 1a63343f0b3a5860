use anyhow::{anyhow, Result};
use tracing::warn;

use crate::application::ResultView;
use crate::cli::OutputFormat;
use crate::domain::QueryForm;

use super::super::presenter::{format_result, NO_DATA_NOTICE};
use super::super::Container;

pub struct QueryController<'a> {
    container: &'a Container,
}

impl<'a> QueryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn query(
        &self,
        company_name: String,
        company_address: String,
        extra_info: Option<String>,
        review_type: Option<String>,
        format: OutputFormat,
    ) -> Result<String> {
        let mut form = QueryForm::new(company_name, company_address);
        if let Some(info) = extra_info {
            form = form.with_extra_info(info);
        }
        if let Some(review_type) = review_type {
            form = form.with_review_type(review_type);
        }

        let mut store = self.container.view_model_store().await?;
        let use_case = self.container.submit_use_case();

        if let Err(e) = use_case.execute(&mut store, form, None).await {
            warn!("Query failed: {}", e);
            return Err(anyhow!(e.user_message()));
        }

        match ResultView::enter(&store) {
            ResultView::Render(result) => format_result(result, format),
            ResultView::RedirectToForm => Ok(NO_DATA_NOTICE.to_string()),
        }
    }
}
