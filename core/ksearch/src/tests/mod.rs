//! 結合テスト（スタブアダプタで usecase を通す）

mod fetch_all_tests;
