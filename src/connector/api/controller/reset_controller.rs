use anyhow::Result;

use super::super::Container;

pub struct ResetController<'a> {
    container: &'a Container,
}

impl<'a> ResetController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn reset(&self) -> Result<String> {
        let mut store = self.container.view_model_store().await?;
        self.container.submit_use_case().reset(&mut store).await?;

        Ok(match self.container.session_file() {
            Some(path) => format!("Cleared stored result in {}", path.display()),
            None => "Nothing stored: no session file configured.".to_string(),
        })
    }
}
