use gloo_console::error;
use gloo_file::{Blob, ObjectUrl};
use gloo_net::http::Request;
use shared::{FashAiRequest, FashAiResponse};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::error::AppError;

pub const GENERATE_ENDPOINT: &str = "/api/fash-ai";
pub const DOWNLOAD_FILENAME: &str = "fash-ai-look.png";

/// One round trip to the generation endpoint. Resolves to the URL of the
/// generated look or to the failure the caller should surface.
pub async fn generate_look(request: &FashAiRequest) -> Result<String, AppError> {
    let response = Request::post(GENERATE_ENDPOINT)
        .json(request)
        .map_err(|err| AppError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_failure(status, &body));
    }

    let payload = response
        .json::<FashAiResponse>()
        .await
        .map_err(|err| AppError::Network(format!("Failed to parse response: {}", err)))?;

    log::info!(
        "Fash AI response: success={} creation_id={:?}",
        payload.success,
        payload.creation_id
    );
    resolve_outcome(payload)
}

/// Non-2xx responses surface the body text when the server sent one.
fn http_failure(status: u16, body: &str) -> AppError {
    let body = body.trim();
    if body.is_empty() {
        AppError::Http(format!("Request failed with status {}", status))
    } else {
        AppError::Http(body.to_string())
    }
}

/// Classifies a decoded 2xx response: application failure, missing URL,
/// or a usable image URL.
fn resolve_outcome(response: FashAiResponse) -> Result<String, AppError> {
    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| "Generation failed. Please try again.".to_string());
        return Err(AppError::Generation(message));
    }
    response
        .primary_url()
        .map(str::to_string)
        .ok_or(AppError::MissingImageUrl)
}

/// Fetches the generated look and hands it to the browser as a save-as
/// download. The object URL backing the blob is revoked when it drops at
/// the end of the scope.
pub async fn download_look(url: &str) -> Result<(), AppError> {
    let response = Request::get(url).send().await.map_err(|err| {
        error!(format!("Download request failed: {}", err));
        AppError::Download
    })?;

    if !response.ok() {
        error!(format!("Download failed with status {}", response.status()));
        return Err(AppError::Download);
    }

    let bytes = response.binary().await.map_err(|err| {
        error!(format!("Download body read failed: {}", err));
        AppError::Download
    })?;

    trigger_save(&bytes).map_err(|err| {
        error!("Failed to trigger download:", err);
        AppError::Download
    })
}

fn trigger_save(bytes: &[u8]) -> Result<(), JsValue> {
    let blob = Blob::new_with_options(bytes, Some("image/png"));
    let object_url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&object_url);
    anchor.set_download(DOWNLOAD_FILENAME);

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GeneratedItem;

    fn success_with(item: GeneratedItem) -> FashAiResponse {
        FashAiResponse {
            success: true,
            result: Some(vec![item]),
            ..FashAiResponse::default()
        }
    }

    #[test]
    fn success_with_result_url_resolves() {
        let response = success_with(GeneratedItem {
            result_url: Some("X".into()),
            ..GeneratedItem::default()
        });
        assert_eq!(resolve_outcome(response).unwrap(), "X");
    }

    #[test]
    fn media_urls_are_used_when_result_url_is_absent() {
        let response = success_with(GeneratedItem {
            media_urls: Some(vec!["Y".into()]),
            ..GeneratedItem::default()
        });
        assert_eq!(resolve_outcome(response).unwrap(), "Y");
    }

    #[test]
    fn application_failure_keeps_the_server_message() {
        let response = FashAiResponse {
            success: false,
            error: Some("bad input".into()),
            ..FashAiResponse::default()
        };
        assert_eq!(
            resolve_outcome(response).unwrap_err(),
            AppError::Generation("bad input".to_string())
        );
    }

    #[test]
    fn application_failure_without_message_gets_the_fallback() {
        let response = FashAiResponse {
            success: false,
            ..FashAiResponse::default()
        };
        assert_eq!(
            resolve_outcome(response).unwrap_err(),
            AppError::Generation("Generation failed. Please try again.".to_string())
        );
    }

    #[test]
    fn success_without_any_url_is_a_missing_image_failure() {
        let response = success_with(GeneratedItem::default());
        assert_eq!(resolve_outcome(response).unwrap_err(), AppError::MissingImageUrl);
    }

    #[test]
    fn http_failure_prefers_the_body_text() {
        assert_eq!(
            http_failure(422, "occasion not recognized").to_string(),
            "occasion not recognized"
        );
        assert_eq!(
            http_failure(502, "  ").to_string(),
            "Request failed with status 502"
        );
    }
}
