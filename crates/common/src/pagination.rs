//! Paging input shared by the service and server layers.
//!
//! `PageRequest` is what a caller asks for; the `Pagination` block in
//! [`crate::network`] is what comes back.

use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Paging parameters, as received from `?page=&size=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    #[serde(default)]
    pub page: u64,
    /// items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self { Self { page, size } }

    /// Clamp the page size into `1..=MAX_PAGE_SIZE`.
    pub fn normalize(self) -> Self {
        Self { page: self.page, size: self.size.clamp(1, MAX_PAGE_SIZE) }
    }

    /// Number of rows to skip for this page. Only meaningful after `normalize`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn normalize_clamps_zero_size() {
        let req = PageRequest { page: 0, size: 0 }.normalize();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let req = PageRequest { page: 4, size: 1000 }.normalize();
        assert_eq!(req.page, 4);
        assert_eq!(req.size, 100);
        assert_eq!(req.offset(), 400);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 20);
    }

    #[test]
    fn missing_query_fields_use_defaults() {
        let req: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, PageRequest::default());
        let req: PageRequest = serde_json::from_str(r#"{"page":3}"#).unwrap();
        assert_eq!(req, PageRequest::new(3, 20));
    }
}
