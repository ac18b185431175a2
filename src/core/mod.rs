// Core Domain
// スキーマスナップショットの表現と、モデル構築時のエラー型

pub mod error;
pub mod schema;
