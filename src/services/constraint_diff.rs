// 制約差分検出サービス
//
// 2つのスキーマスナップショット間で、制約定義とクラスタリング指定の
// 差分に対応するALTER TABLE文を導出するサービス。
// 新スナップショットのテーブル順に走査し、テーブルごとに
// DROP文、ADD文、クラスタリング文の順で出力します。

use crate::adapters::script_writer::ScriptWriter;
use crate::adapters::sql_generator::ConstraintSqlGenerator;
use crate::core::schema::{Constraint, Schema, Table};

/// 制約差分検出サービス
#[derive(Debug, Clone)]
pub struct ConstraintDiffService {}

impl ConstraintDiffService {
    /// 新しいConstraintDiffServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 制約差分を検出してDDL文を出力
    ///
    /// 新スキーマの各テーブルについて、旧スキーマの同名テーブルと
    /// 制約を比較し、必要なDROP/ADD文をライターに追記します。
    /// 非プライマリキーパスでは、旧テーブルが存在する場合に限り
    /// クラスタリング差分も出力します。
    /// 旧スキーマにのみ存在するテーブルは対象外です（テーブル削除は
    /// テーブル差分側で処理されます）。
    ///
    /// # Arguments
    ///
    /// * `writer` - DDL文の出力先
    /// * `old_schema` - 変更前のスキーマ
    /// * `new_schema` - 変更後のスキーマ
    /// * `primary_key` - trueならプライマリキー制約のみ、falseならそれ以外を処理
    pub fn diff_constraints(
        &self,
        writer: &mut ScriptWriter,
        old_schema: &Schema,
        new_schema: &Schema,
        primary_key: bool,
    ) {
        let generator = ConstraintSqlGenerator::new();

        for (table_name, new_table) in &new_schema.tables {
            let old_table = old_schema.get_table(table_name);

            // 新スキーマに存在しない、または再定義された制約を削除
            for constraint in Self::drop_constraints(old_table, Some(new_table), primary_key) {
                writer.append_statement(generator.generate_drop_constraint(table_name, constraint));
            }

            // 追加された、または再定義された制約を追加
            // 再定義された制約は同名でDROP済みのため、ADDが後になる順序が必須
            for constraint in Self::added_constraints(old_table, Some(new_table), primary_key) {
                writer.append_statement(generator.generate_add_constraint(table_name, constraint));
            }

            // クラスタリング差分は新規テーブルには適用せず、1パスでのみ処理する
            match old_table {
                Some(old_table) if !primary_key => {
                    self.diff_cluster(writer, &generator, old_table, new_table);
                }
                _ => {}
            }
        }
    }

    /// 削除すべき制約のリストを返す
    ///
    /// 旧テーブルの制約のうち、分類がフィルタに一致し、かつ
    /// 新テーブルに同名の制約がないか、同名でも定義が異なるものを返します。
    /// どちらかのテーブルが存在しない場合は空を返します（テーブルの
    /// 新規作成・削除はここでは扱いません）。
    pub fn drop_constraints<'a>(
        old_table: Option<&'a Table>,
        new_table: Option<&Table>,
        primary_key: bool,
    ) -> Vec<&'a Constraint> {
        match (old_table, new_table) {
            (Some(old_table), Some(new_table)) => old_table
                .constraints
                .values()
                .filter(|constraint| constraint.primary_key == primary_key)
                .filter(|constraint| match new_table.get_constraint(&constraint.name) {
                    None => true,
                    Some(counterpart) => counterpart.definition != constraint.definition,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// 追加すべき制約のリストを返す
    ///
    /// 新テーブルの制約のうち、分類がフィルタに一致し、かつ
    /// 旧テーブルに同名の制約がないか、同名でも定義が異なるものを返します。
    /// 旧テーブルが存在しない場合（テーブル新規作成）はフィルタに一致する
    /// 全制約を返します。新テーブルが存在しない場合は空を返します。
    pub fn added_constraints<'a>(
        old_table: Option<&Table>,
        new_table: Option<&'a Table>,
        primary_key: bool,
    ) -> Vec<&'a Constraint> {
        match (old_table, new_table) {
            (_, None) => Vec::new(),
            (None, Some(new_table)) => new_table
                .constraints
                .values()
                .filter(|constraint| constraint.primary_key == primary_key)
                .collect(),
            (Some(old_table), Some(new_table)) => new_table
                .constraints
                .values()
                .filter(|constraint| constraint.primary_key == primary_key)
                .filter(|constraint| match old_table.get_constraint(&constraint.name) {
                    None => true,
                    Some(counterpart) => counterpart.definition != constraint.definition,
                })
                .collect(),
        }
    }

    /// クラスタリング差分を出力
    ///
    /// 両テーブルのクラスタリングインデックス名を比較し、
    /// 開始・停止・切り替えのいずれかの文を最大1つ出力します。
    /// 比較は正確な文字列比較で、大文字小文字の正規化は行いません。
    fn diff_cluster(
        &self,
        writer: &mut ScriptWriter,
        generator: &ConstraintSqlGenerator,
        old_table: &Table,
        new_table: &Table,
    ) {
        match (
            old_table.cluster_index_name.as_deref(),
            new_table.cluster_index_name.as_deref(),
        ) {
            (None, Some(new_cluster)) => {
                writer.append_statement(generator.generate_cluster_on(&new_table.name, new_cluster));
            }
            (Some(_), None) => {
                writer.append_statement(generator.generate_set_without_cluster(&new_table.name));
            }
            (Some(old_cluster), Some(new_cluster)) if old_cluster != new_cluster => {
                writer.append_statement(generator.generate_cluster_on(&new_table.name, new_cluster));
            }
            _ => {}
        }
    }
}

impl Default for ConstraintDiffService {
    fn default() -> Self {
        Self::new()
    }
}
