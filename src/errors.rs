use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};
use serde_json::json;

#[derive(Debug, Display, Error, PartialEq)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    Validation(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    Conflict(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    Auth(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    NotFound(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    Store(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    Internal(#[error(not(source))] String),
}

impl ApiError {
    pub fn validation(msg: &str) -> Self {
        ApiError::Validation(msg.to_string())
    }

    pub fn store(msg: &str) -> Self {
        ApiError::Store(msg.to_string())
    }

    /// Generic credential failure shared by user and admin login.
    pub fn invalid_credentials() -> Self {
        ApiError::Auth("Invalid email or password".to_string())
    }
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(json!({ "error": self.to_string() }).to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ApiError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Conflict("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::invalid_credentials().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::store("x").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Internal("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_rt::test]
    async fn error_body_is_json_with_error_field() {
        let resp = ApiError::NotFound("Event not found".into()).error_response();
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Event not found" }));
    }
}
