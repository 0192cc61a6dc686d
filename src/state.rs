/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - db: PgPool を保持、Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}
