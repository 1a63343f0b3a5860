use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::sample_result;

use super::super::presenter::format_result;
use super::super::Container;

pub struct SampleController<'a> {
    container: &'a Container,
}

impl<'a> SampleController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn sample(&self, format: OutputFormat) -> Result<String> {
        format_result(&sample_result(self.container.mode()), format)
    }
}
