/*
 * Responsibility
 * - GET / : エラー変換経路の smoke 用 route
 * - 常に NotFound("teste") を投げて 404 {"message":"teste"} になることを確認する
 */
use crate::error::ApiError;

pub async fn root() -> Result<&'static str, ApiError> {
    // 成功レスポンス ("The service is working.") には意図的に到達しない
    Err(ApiError::not_found("teste"))
}
