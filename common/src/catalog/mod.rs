//! 画面表示用の固定データ
//!
//! すべて読み取り専用の参照テーブル。選択キーでレコードを引き、
//! 存在しないキーは宣言済みのデフォルトレコードになる。

pub mod crops;
pub mod dashboard;
pub mod disease;
pub mod insights;
pub mod soil;
pub mod weather;

/// デフォルト付きの静的テーブル
#[derive(Debug)]
pub struct Catalog<V: 'static> {
    entries: &'static [(&'static str, V)],
    default_key: &'static str,
    default: &'static V,
}

impl<V> Catalog<V> {
    pub const fn new(
        entries: &'static [(&'static str, V)],
        default_key: &'static str,
        default: &'static V,
    ) -> Self {
        Self {
            entries,
            default_key,
            default,
        }
    }

    /// キーに一致するレコード（フォールバックなし）
    pub fn lookup(&self, key: &str) -> Option<&'static V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// キーに一致するレコード。なければデフォルト
    pub fn get(&self, key: &str) -> &'static V {
        self.lookup(key).unwrap_or_else(|| {
            tracing::debug!(key, default = self.default_key, "catalog miss, using default");
            self.default
        })
    }

    /// 実際に使われるキー
    pub fn resolve_key(&self, key: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(k, _)| *k)
            .unwrap_or(self.default_key)
    }

    pub fn default_key(&self) -> &'static str {
        self.default_key
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 選択肢（IDと表示名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SelectOption {
    pub id: &'static str,
    pub label: &'static str,
}
