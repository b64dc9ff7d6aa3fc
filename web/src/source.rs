use gloo::net::http::Request;
use jeopardy_core::{CategoryId, CategoryPayload, CategorySource};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] gloo::net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Reads categories from the jService-style `category?id=` endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpCategorySource {
    api_base: String,
}

impl HttpCategorySource {
    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        if !api_base.ends_with('/') {
            api_base.push('/');
        }
        Self { api_base }
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}category?id={}", self.api_base, id)
    }
}

impl CategorySource for HttpCategorySource {
    type Error = FetchError;

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, Self::Error> {
        let url = self.category_url(id);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
