// 制約DDLジェネレーター
//
// 制約差分とクラスタリング差分からALTER TABLE文を生成します。
// 識別子はそのまま埋め込みます。クォートやエスケープは上流の
// 識別子モデルの責務であり、このレイヤーでは行いません。

use crate::core::schema::Constraint;

/// 制約DDLジェネレーター
#[derive(Debug, Clone)]
pub struct ConstraintSqlGenerator {}

impl ConstraintSqlGenerator {
    /// 新しいConstraintSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }

    /// DROP CONSTRAINT文を生成
    pub fn generate_drop_constraint(&self, table_name: &str, constraint: &Constraint) -> String {
        format!(
            "ALTER TABLE {} DROP CONSTRAINT {};",
            table_name, constraint.name
        )
    }

    /// ADD CONSTRAINT文を生成
    pub fn generate_add_constraint(&self, table_name: &str, constraint: &Constraint) -> String {
        format!(
            "ALTER TABLE {} ADD CONSTRAINT {} {};",
            table_name, constraint.name, constraint.definition
        )
    }

    /// CLUSTER ON文を生成
    ///
    /// クラスタリングの開始と切り替えの両方で使用されます。
    pub fn generate_cluster_on(&self, table_name: &str, index_name: &str) -> String {
        format!("ALTER TABLE {} CLUSTER ON {};", table_name, index_name)
    }

    /// SET WITHOUT CLUSTER文を生成
    pub fn generate_set_without_cluster(&self, table_name: &str) -> String {
        format!("ALTER TABLE {} SET WITHOUT CLUSTER;", table_name)
    }
}

impl Default for ConstraintSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}
