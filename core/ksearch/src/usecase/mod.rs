//! ユースケース層

pub mod app;
pub mod fetch_all;
pub mod search;
