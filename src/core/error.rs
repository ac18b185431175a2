// エラー型定義
//
// スキーマモデル構築時のカスタムエラー型を提供します。
// thiserrorを使用して SchemaError を定義します。
// 差分検出そのものは整形済みのスナップショットに対して失敗しないため、
// エラーはモデル構築の不変条件違反に限定されます。

use thiserror::Error;

/// スキーマモデルエラー
///
/// スナップショット構築時の不変条件違反を表現します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// 同名のテーブルが既に存在する
    #[error("Duplicate table: {table}")]
    DuplicateTable {
        /// テーブル名
        table: String,
    },

    /// 同名の制約が既にテーブル内に存在する
    #[error("Duplicate constraint on table {table}: {constraint}")]
    DuplicateConstraint {
        /// テーブル名
        table: String,
        /// 制約名
        constraint: String,
    },
}

impl SchemaError {
    /// テーブル重複エラーかどうか
    pub fn is_duplicate_table(&self) -> bool {
        matches!(self, SchemaError::DuplicateTable { .. })
    }

    /// 制約重複エラーかどうか
    pub fn is_duplicate_constraint(&self) -> bool {
        matches!(self, SchemaError::DuplicateConstraint { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_table_display() {
        let error = SchemaError::DuplicateTable {
            table: "users".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate table: users");
        assert!(error.is_duplicate_table());
        assert!(!error.is_duplicate_constraint());
    }

    #[test]
    fn test_duplicate_constraint_display() {
        let error = SchemaError::DuplicateConstraint {
            table: "orders".to_string(),
            constraint: "pk_orders".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate constraint on table orders: pk_orders"
        );
        assert!(error.is_duplicate_constraint());
    }
}
