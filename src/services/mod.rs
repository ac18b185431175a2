// Services
// 制約とクラスタリングの差分検出ロジック

pub mod constraint_diff;
