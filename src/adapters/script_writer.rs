// マイグレーションスクリプト出力シンク
//
// 差分検出サービスが生成したDDL文を追記順に蓄積するシンク。
// 1回の比較実行の間、呼び出し側が排他的に所有することを前提とします。

/// スクリプトライター
///
/// 追記専用の文シンク。蓄積された文は追記された順序で保持され、
/// レンダリング時には各文の前に空行が1つ挿入されます。
#[derive(Debug, Clone, Default)]
pub struct ScriptWriter {
    /// 蓄積されたDDL文（追記順）
    statements: Vec<String>,
}

impl ScriptWriter {
    /// 新しい空のスクリプトライターを作成
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// 文を追記
    pub fn append_statement(&mut self, statement: String) {
        self.statements.push(statement);
    }

    /// 蓄積された文のスライスを取得
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// 文が1つも追記されていないかどうか
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// スクリプト全体をレンダリング
    ///
    /// 各文の前に空行を1つ置いた形式で全文を連結します。
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        for statement in &self.statements {
            sql.push('\n');
            sql.push_str(statement);
            sql.push('\n');
        }
        sql
    }
}
