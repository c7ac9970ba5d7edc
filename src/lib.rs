//! AgriAI CLI
//!
//! 共通ライブラリの画面データと疑似スキャンを端末から使う。

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
