// Adapters
// DDL文の生成と、マイグレーションスクリプト組み立て用の出力シンク

pub mod script_writer;
pub mod sql_generator;
