//! EmailJS relay over the browser `fetch` API.

use portfolio_core::config::RelayConfig;
use portfolio_core::error::RelayError;
use portfolio_core::relay::{EmailRelay, TemplateParams, encode_request};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::dom::describe_js_error;

/// Posts contact messages to the EmailJS REST endpoint.
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let body = encode_request(&self.config, params)?;
        let response = post_json(&self.config.endpoint, &body)
            .await
            .map_err(|e| RelayError::Network(describe_js_error(&e)))?;

        if response.ok() {
            return Ok(());
        }
        Err(RelayError::Rejected {
            status: response.status(),
            body: response_text(&response).await,
        })
    }
}

async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await?;
    value.dyn_into::<Response>()
}

/// Response body for the log; empty if it cannot be read.
async fn response_text(response: &Response) -> String {
    let Ok(promise) = response.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}
