//! Server-rendered pages.

use askama::Template;

use crate::config::PageConfig;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("missing page data: {0}")]
    MissingField(&'static str),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// The informational page served at `/hello/`.
#[derive(Template)]
#[template(path = "hello_world.html")]
pub struct HelloPage<'a> {
    company_name: &'a str,
    challenge_description: &'a str,
}

impl<'a> HelloPage<'a> {
    /// Builds the page context. Every field is required.
    pub fn from_config(page: &'a PageConfig) -> Result<Self, PageError> {
        let company_name = page.company_name.trim();
        if company_name.is_empty() {
            return Err(PageError::MissingField("company_name"));
        }
        let challenge_description = page.challenge_description.trim();
        if challenge_description.is_empty() {
            return Err(PageError::MissingField("challenge_description"));
        }
        Ok(HelloPage {
            company_name,
            challenge_description,
        })
    }

    pub fn render_html(&self) -> Result<String, PageError> {
        Ok(self.render()?)
    }
}

/// Renders the `/hello/` page for the given content.
pub fn render_hello_page(page: &PageConfig) -> Result<String, PageError> {
    HelloPage::from_config(page)?.render_html()
}
