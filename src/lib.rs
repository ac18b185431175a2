// Pgdiffライブラリのエントリーポイント
//
// モジュール構造:
// - core: コアドメインモデル（スキーマスナップショット、制約、エラー型）
// - services: 差分検出サービス（制約とクラスタリングの比較ロジック）
// - adapters: DDL文の生成と出力シンク

pub mod adapters;
pub mod core;
pub mod services;
