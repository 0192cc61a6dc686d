/*
 * Responsibility
 * - アプリ共通の ApiError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 予期しないエラーは 500 + 固定メッセージに変換、詳細はログのみ
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    //#[error("unauthorized")]
    //Unauthorized,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// 任意の status / message の組。status は StatusCode 型なので常に有効値。
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Status { status, message } => (status, message),
            ApiError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(source) => {
                // クライアントには詳細を返さない。原因はログ側にだけ残す。
                tracing::error!(error = ?source, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn status_variant_keeps_code_and_message() {
        let (status, body) =
            render(ApiError::new(StatusCode::UNAUTHORIZED, "missing token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"message": "missing token"}));
    }

    #[tokio::test]
    async fn not_found_is_fixed_to_404() {
        let (status, body) = render(ApiError::not_found("teste")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"message": "teste"}));
    }

    #[tokio::test]
    async fn internal_never_leaks_the_source() {
        let source = anyhow::anyhow!("connection refused: db password=hunter2");
        let (status, body) = render(ApiError::Internal(source)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"message": "Internal Server Error"}));
        assert!(!body.to_string().contains("hunter2"));
    }
}
