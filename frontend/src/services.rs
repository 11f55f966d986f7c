// API service layer for the customer backend
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

const API_BASE_URL: &str = "/api/v1";
const AUTH_TOKEN_KEY: &str = "salescrm_auth_token";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    // The token is written by the surrounding application's sign-in flow.
    fn get_auth_token() -> Option<String> {
        LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok()
    }

    fn builder(method: &str, endpoint: &str) -> ApiResult<RequestBuilder> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PATCH" => Request::patch(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(ApiError { message: "Invalid method".to_string(), code: None }),
        };

        Ok(match Self::get_auth_token() {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        })
    }

    async fn read_response<T: DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> ApiResult<T> {
        if !response.ok() {
            let error = response.json::<ApiError>().await.unwrap_or(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            });
            return Err(error);
        }

        let body = response.text().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;
        parse_body(&body)
    }

    async fn request<T: DeserializeOwned>(method: &str, endpoint: &str) -> ApiResult<T> {
        let response = Self::builder(method, endpoint)?
            .send()
            .await
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("NETWORK_ERROR".to_string()),
            })?;

        Self::read_response(response).await
    }

    async fn request_with_body<T: DeserializeOwned, B: Serialize + Debug>(
        method: &str,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        log::debug!("{} {} {:?}", method, endpoint, body);

        let response = Self::builder(method, endpoint)?
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("NETWORK_ERROR".to_string()),
            })?;

        Self::read_response(response).await
    }

    // GET request
    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request("GET", endpoint).await
    }

    // POST request
    pub async fn post<T: DeserializeOwned, B: Serialize + Debug>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("POST", endpoint, body).await
    }

    // PATCH request
    pub async fn patch<T: DeserializeOwned, B: Serialize + Debug>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("PATCH", endpoint, body).await
    }

    // DELETE request
    pub async fn delete<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request("DELETE", endpoint).await
    }
}

/// Decode a success body. An empty body (204, or a bare 200/201) reads as
/// JSON `null`.
fn parse_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError {
        message: e.to_string(),
        code: Some("PARSE_ERROR".to_string()),
    })
}

// ============================================
// COMMON TYPES
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

// ============================================
// CUSTOMERS SERVICE
// ============================================

pub mod customers {
    use super::*;
    use salescrm_shared::Customer;

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaveNoteRequest {
        pub text: String,
        pub date: String,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateTaskRequest {
        pub completed: bool,
    }

    pub async fn list(page: u32, per_page: u32) -> ApiResult<PaginatedResponse<Customer>> {
        ApiClient::get(&format!("/customers?page={}&per_page={}", page, per_page)).await
    }

    // Mutations only need the status; whatever the backend echoes back is
    // read as a `Value` and dropped.

    pub async fn save_note(customer_id: &str, note: &SaveNoteRequest) -> ApiResult<()> {
        ApiClient::post::<serde_json::Value, _>(&format!("/customers/{}/notes", customer_id), note)
            .await
            .map(|_| ())
    }

    pub async fn update_task(
        customer_id: &str,
        task_id: &str,
        update: &UpdateTaskRequest,
    ) -> ApiResult<()> {
        ApiClient::patch::<serde_json::Value, _>(
            &format!("/customers/{}/tasks/{}", customer_id, task_id),
            update,
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_task(customer_id: &str, task_id: &str) -> ApiResult<()> {
        ApiClient::delete::<serde_json::Value>(&format!("/customers/{}/tasks/{}", customer_id, task_id))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code() {
        let err = ApiError { message: "HTTP Error: 503".into(), code: Some("HTTP_503".into()) };
        assert_eq!(err.to_string(), "HTTP Error: 503 (HTTP_503)");

        let err = ApiError { message: "Invalid method".into(), code: None };
        assert_eq!(err.to_string(), "Invalid method");
    }

    #[test]
    fn mutation_bodies_are_accepted_whatever_they_hold() {
        let created: serde_json::Value =
            parse_body(r#"{"id":"note-1","text":"Call back"}"#).unwrap();
        assert_eq!(created["id"], "note-1");

        let empty: serde_json::Value = parse_body("").unwrap();
        assert!(empty.is_null());

        assert!(parse_body::<()>("  ").is_ok());
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = parse_body::<PaginationMeta>("{not json").unwrap_err();
        assert_eq!(err.code.as_deref(), Some("PARSE_ERROR"));
    }

    #[test]
    fn paginated_customers_deserialize() {
        let page: PaginatedResponse<salescrm_shared::Customer> = serde_json::from_value(serde_json::json!({
            "data": [{
                "id": "c-1", "name": "Kim", "avatar": "K", "product": "Annuity",
                "stage": "customer", "email": "kim@example.com", "phone": "010"
            }],
            "meta": { "page": 1, "per_page": 100, "total": 1, "total_pages": 1 }
        }))
        .unwrap();

        assert_eq!(page.data[0].stage, salescrm_shared::Stage::Customer);
        assert_eq!(page.meta.total, 1);
    }
}
