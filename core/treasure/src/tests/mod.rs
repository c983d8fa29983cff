//! 結合テスト（記録スタブでユースケースを検証する）

mod support;
