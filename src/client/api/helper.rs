use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON success body, or turns an error status into an [`ApiError`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(error_from(status, response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Like [`parse_response`] for endpoints that answer without a body.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

/// Prefers the server's `{ "error": ... }` body, then the raw text.
async fn error_from(status: u64, response: Response) -> ApiError {
    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorDto>(&text) {
            Ok(dto) => dto.error,
            Err(_) if text.is_empty() => format!("Request failed with status {}", status),
            Err(_) => text,
        },
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
