use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortSignal, RequestCredentials};

use super::error::ApiError;
use crate::shared::api_utils::api_url;

fn with_session(builder: RequestBuilder, signal: Option<&AbortSignal>) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .abort_signal(signal)
}

/// Отправка с учётом отмены: прерванный запрос даёт `Cancelled`, а не сетевую ошибку
async fn send(request: Request, signal: Option<&AbortSignal>) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    log::debug!("{:?} {}", method, url);

    let response = request.send().await.map_err(|e| {
        if signal.is_some_and(|s| s.aborted()) {
            ApiError::Cancelled
        } else {
            log::warn!("{:?} {} failed: {}", method, url, e);
            ApiError::from(e)
        }
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{:?} {} -> HTTP {}", method, url, status);
    Err(ApiError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// GET с разбором JSON-тела в `T`
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let request = with_session(Request::get(&api_url(path)), signal)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(send(request, signal).await?).await
}

/// POST с JSON-телом; ответ разбирается в `T`
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = with_session(Request::post(&api_url(path)), None)
        .json(body)
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    decode(send(request, None).await?).await
}

/// POST без тела ответа; важен только статус
pub async fn post_empty<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), ApiError> {
    let builder = with_session(Request::post(&api_url(path)), None);
    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Malformed(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    send(request, None).await.map(|_| ())
}

/// PUT с JSON-телом; тело ответа не используется
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_session(Request::put(&api_url(path)), None)
        .json(body)
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    send(request, None).await.map(|_| ())
}
