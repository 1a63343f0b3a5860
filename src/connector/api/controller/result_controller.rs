use anyhow::Result;

use crate::application::ResultView;
use crate::cli::OutputFormat;

use super::super::presenter::{format_result, NO_DATA_NOTICE};
use super::super::Container;

pub struct ResultController<'a> {
    container: &'a Container,
}

impl<'a> ResultController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Enter the result view directly. Without a stored result the user is
    /// sent back to the form and nothing is rendered.
    pub async fn result(&self, format: OutputFormat) -> Result<String> {
        let store = self.container.view_model_store().await?;

        match ResultView::enter(&store) {
            ResultView::Render(result) => format_result(result, format),
            ResultView::RedirectToForm => Ok(NO_DATA_NOTICE.to_string()),
        }
    }
}
