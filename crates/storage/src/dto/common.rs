use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitOffsetParams {
    /// Maximum number of items in the page
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of matching items to skip
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for LimitOffsetParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl LimitOffsetParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    pub fn validate(&self, max_limit: u32) -> Result<(), String> {
        if self.limit < 1 || self.limit > max_limit {
            return Err(format!("limit must be between 1 and {}", max_limit));
        }
        Ok(())
    }
}

/// A page of results plus the limit/offset used and the total number of
/// matching items before pagination.
#[derive(Debug, Serialize, ToSchema)]
pub struct LimitOffsetPage<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    pub total: i64,
}

impl<T> LimitOffsetPage<T> {
    pub fn new(items: Vec<T>, params: LimitOffsetParams, total: i64) -> Self {
        Self {
            items,
            limit: params.limit,
            offset: params.offset,
            total,
        }
    }

    /// Slices a complete result sequence.
    pub fn paginate(all: Vec<T>, params: LimitOffsetParams) -> Self {
        let total = all.len() as i64;
        let items = all
            .into_iter()
            .skip(params.offset as usize)
            .take(params.limit as usize)
            .collect();
        Self::new(items, params, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: LimitOffsetParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, LimitOffsetParams::new(20, 0));
    }

    #[test]
    fn test_limit_bounds() {
        assert!(LimitOffsetParams::new(0, 0).validate(100).is_err());
        assert!(LimitOffsetParams::new(101, 0).validate(100).is_err());
        assert!(LimitOffsetParams::new(1, 0).validate(100).is_ok());
        assert!(LimitOffsetParams::new(100, 5000).validate(100).is_ok());
    }

    #[test]
    fn test_paginate_reports_total_before_slicing() {
        let page = LimitOffsetPage::paginate(vec!["a", "b", "c"], LimitOffsetParams::new(1, 0));
        assert_eq!(page.items, vec!["a"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset, 0);

        let page = LimitOffsetPage::paginate(vec!["a", "b", "c"], LimitOffsetParams::new(2, 2));
        assert_eq!(page.items, vec!["c"]);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let page = LimitOffsetPage::paginate(vec![1, 2, 3], LimitOffsetParams::new(10, 7));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
