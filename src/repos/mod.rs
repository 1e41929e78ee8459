/*
 * Responsibility
 * - データアクセス層の公開ポイント
 * - このサービスは in-memory (DB なし)。セッションも永続化しない
 */
pub mod order_repo;
