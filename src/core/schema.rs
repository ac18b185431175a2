// スキーマドメインモデル
//
// データベーススキーマのスナップショットを表現する型システム。
// Schema, Table, Constraint の構造体を提供します。
// スナップショットは比較の間、読み取り専用として扱われます。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::SchemaError;

/// スキーマスナップショット
///
/// ある時点のデータベーススキーマ全体を表現します。
/// テーブル名からテーブル定義への順序付きマッピングを保持します。
/// BTreeMapを使用するため、反復順序は決定的です。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// テーブル定義のマップ（テーブル名 -> Table）
    pub tables: BTreeMap<String, Table>,
}

impl Schema {
    /// 新しい空のスキーマを作成
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// テーブルを追加
    ///
    /// 同名のテーブルが既に存在する場合はエラーを返します。
    /// テーブル名は識別子であり、暗黙の上書きはパーサーのバグを隠すためです。
    pub fn add_table(&mut self, table: Table) -> Result<(), SchemaError> {
        if self.tables.contains_key(&table.name) {
            return Err(SchemaError::DuplicateTable {
                table: table.name.clone(),
            });
        }
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// 指定されたテーブルが存在するか確認
    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.contains_key(table_name)
    }

    /// 指定されたテーブルを取得
    pub fn get_table(&self, table_name: &str) -> Option<&Table> {
        self.tables.get(table_name)
    }

    /// テーブル数を取得
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

/// テーブル定義
///
/// 単一のテーブルの制約とクラスタリング指定を表現します。
/// 制約は名前をキーとするマップで保持します（名前はテーブル内で一意）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// テーブル名
    pub name: String,

    /// 制約定義のマップ（制約名 -> Constraint）
    pub constraints: BTreeMap<String, Constraint>,

    /// クラスタリング対象のインデックス名
    ///
    /// Noneはテーブルがクラスタリングされていないことを意味します。
    /// 指定されたインデックスの存在確認は上流のスキーマモデルの責務です。
    pub cluster_index_name: Option<String>,
}

impl Table {
    /// 新しいテーブルを作成
    pub fn new(name: String) -> Self {
        Self {
            name,
            constraints: BTreeMap::new(),
            cluster_index_name: None,
        }
    }

    /// 制約を追加
    ///
    /// 同名の制約が既に存在する場合はエラーを返します。
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), SchemaError> {
        if self.constraints.contains_key(&constraint.name) {
            return Err(SchemaError::DuplicateConstraint {
                table: self.name.clone(),
                constraint: constraint.name.clone(),
            });
        }
        self.constraints.insert(constraint.name.clone(), constraint);
        Ok(())
    }

    /// 指定された制約が存在するか確認
    pub fn has_constraint(&self, constraint_name: &str) -> bool {
        self.constraints.contains_key(constraint_name)
    }

    /// 指定された制約を取得
    pub fn get_constraint(&self, constraint_name: &str) -> Option<&Constraint> {
        self.constraints.get(constraint_name)
    }

    /// 制約数を取得
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// 制約定義
///
/// テーブルに付与された名前付きの制約（PRIMARY KEY, FOREIGN KEY,
/// UNIQUE, CHECK）を表現します。定義本体は不透明な文字列として保持し、
/// 2つの制約は定義文字列が等しい場合にのみ同一の効果とみなします。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// 制約名（テーブル内で一意）
    pub name: String,

    /// プライマリキー制約かどうか
    pub primary_key: bool,

    /// 制約の定義句（例: "PRIMARY KEY (id)", "CHECK (price > 0)"）
    pub definition: String,
}

impl Constraint {
    /// 新しい制約を作成
    pub fn new(name: String, primary_key: bool, definition: String) -> Self {
        Self {
            name,
            primary_key,
            definition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_new() {
        let schema = Schema::new();
        assert_eq!(schema.table_count(), 0);
        assert!(!schema.has_table("users"));
    }

    #[test]
    fn test_schema_add_table() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("users".to_string())).unwrap();

        assert_eq!(schema.table_count(), 1);
        assert!(schema.has_table("users"));
        assert_eq!(schema.get_table("users").unwrap().name, "users");
    }

    #[test]
    fn test_schema_duplicate_table() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("users".to_string())).unwrap();

        let result = schema.add_table(Table::new("users".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_table_new() {
        let table = Table::new("users".to_string());
        assert_eq!(table.name, "users");
        assert_eq!(table.constraint_count(), 0);
        assert!(table.cluster_index_name.is_none());
    }

    #[test]
    fn test_table_add_constraint() {
        let mut table = Table::new("users".to_string());
        table
            .add_constraint(Constraint::new(
                "pk_users".to_string(),
                true,
                "PRIMARY KEY (id)".to_string(),
            ))
            .unwrap();

        assert_eq!(table.constraint_count(), 1);
        assert!(table.has_constraint("pk_users"));

        let constraint = table.get_constraint("pk_users").unwrap();
        assert!(constraint.primary_key);
        assert_eq!(constraint.definition, "PRIMARY KEY (id)");
    }

    #[test]
    fn test_table_duplicate_constraint() {
        let mut table = Table::new("users".to_string());
        table
            .add_constraint(Constraint::new(
                "uq_email".to_string(),
                false,
                "UNIQUE (email)".to_string(),
            ))
            .unwrap();

        // 定義が異なっても名前が同じなら拒否される
        let result = table.add_constraint(Constraint::new(
            "uq_email".to_string(),
            false,
            "UNIQUE (email, tenant)".to_string(),
        ));
        assert!(result.is_err());
        assert_eq!(table.constraint_count(), 1);
    }

    #[test]
    fn test_constraint_equality_by_definition() {
        let a = Constraint::new("c1".to_string(), false, "CHECK (x > 0)".to_string());
        let b = Constraint::new("c1".to_string(), false, "CHECK (x > 0)".to_string());
        let c = Constraint::new("c1".to_string(), false, "CHECK (x > 1)".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tables_iterate_in_name_order() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("orders".to_string())).unwrap();
        schema.add_table(Table::new("customers".to_string())).unwrap();

        let names: Vec<&str> = schema.tables.keys().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["customers", "orders"]);
    }
}
