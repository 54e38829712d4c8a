use trivia_core::{Result, TriviaError, TriviaSource};
use trivia_protocol::{ApiEndpoint, CategoryId, CategoryRecord, ClueRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// [`TriviaSource`] backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    endpoint: ApiEndpoint,
}

impl HttpSource {
    pub(crate) fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let window = gloo::utils::window();

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(unavailable)?;
        let response: web_sys::Response = response.dyn_into().map_err(unavailable)?;
        check_status(url, response.status())?;

        let body = JsFuture::from(response.text().map_err(unavailable)?)
            .await
            .map_err(unavailable)?;
        body.as_string()
            .ok_or_else(|| TriviaError::MalformedRecord(format!("{url} returned a non-text body")))
    }
}

impl TriviaSource for HttpSource {
    async fn list_categories(&self, count: u32) -> Result<Vec<CategoryRecord>> {
        let body = self.get_text(&self.endpoint.categories_url(count)).await?;
        decoded(trivia_protocol::decode_categories(&body))
    }

    async fn list_clues(&self, category: CategoryId) -> Result<Vec<ClueRecord>> {
        let body = self.get_text(&self.endpoint.clues_url(category)).await?;
        decoded(trivia_protocol::decode_clues(&body))
    }
}

fn unavailable(err: JsValue) -> TriviaError {
    TriviaError::SourceUnavailable(format!("{err:?}"))
}

fn check_status(url: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TriviaError::SourceUnavailable(format!(
            "{url} answered with HTTP {status}"
        )))
    }
}

fn decoded<T>(result: serde_json::Result<T>) -> Result<T> {
    result.map_err(|err| TriviaError::MalformedRecord(err.to_string()))
}
