//! Offset-based pagination utilities.

use serde::Deserialize;

/// Default number of records per page.
pub const DEFAULT_LIMIT: u32 = 10;

/// Window over a table's insertion order: skip `skip` rows, return up to `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Caps `limit` at `max_limit`.
    pub fn clamped(self, max_limit: u32) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.min(max_limit),
        }
    }

    /// Offset as a SQL bind value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// Limit as a SQL bind value.
    pub fn fetch(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Applies the window to an in-memory iterator.
    pub fn apply<I: IntoIterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let page = PageRequest::default();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let page: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(page, PageRequest::default());

        let page: PageRequest = serde_json::from_str(r#"{"skip": 5}"#).unwrap();
        assert_eq!(page, PageRequest::new(5, 10));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<PageRequest, _> = serde_json::from_str(r#"{"skip": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_clamped_caps_limit_only() {
        let page = PageRequest::new(20, 5000).clamped(100);
        assert_eq!(page.skip, 20);
        assert_eq!(page.limit, 100);

        let page = PageRequest::new(0, 7).clamped(100);
        assert_eq!(page.limit, 7);
    }

    #[test]
    fn test_sql_binds() {
        let page = PageRequest::new(u32::MAX, 3);
        assert_eq!(page.offset(), u32::MAX as i64);
        assert_eq!(page.fetch(), 3);
    }

    #[test]
    fn test_apply_windows_iterator() {
        let page = PageRequest::new(2, 3);
        let window: Vec<_> = page.apply(1..=10).collect();
        assert_eq!(window, vec![3, 4, 5]);
    }

    #[test]
    fn test_apply_past_end_is_empty() {
        let page = PageRequest::new(50, 10);
        assert_eq!(page.apply(0..10).count(), 0);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.apply(0..10).count(), 0);
    }
}
