//! Pagination: `page` and `limit`

/// Maximum items per page
const MAX_LIMIT: u32 = 100;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub limit: u32,
    /// Client asked for a specific page; an out-of-range page is then an error
    pub page_requested: bool,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Limit is clamped to 1..=100
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
            page_requested: false,
        }
    }

    /// Build from raw query values. Unparsable or zero values fall back to defaults.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
        };

        let mut pagination = Self::new(
            parse(page).unwrap_or(1),
            parse(limit).unwrap_or(DEFAULT_LIMIT),
        );
        pagination.page_requested = page.is_some();
        pagination
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            page_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn offset_does_not_overflow_u32() {
        let p = Pagination::new(u32::MAX, 100);
        assert_eq!(p.offset(), (u32::MAX as u64 - 1) * 100);
    }

    #[test]
    fn clamps() {
        assert_eq!(Pagination::new(0, 10).page, 1);
        assert_eq!(Pagination::new(1, 0).limit, 1);
        assert_eq!(Pagination::new(1, 999).limit, 100);
    }

    #[test]
    fn raw_defaults() {
        let p = Pagination::from_raw(None, None);
        assert_eq!(p, Pagination::default());

        let p = Pagination::from_raw(Some("abc"), Some("0"));
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert!(p.page_requested);
    }

    #[test]
    fn raw_values() {
        let p = Pagination::from_raw(Some("3"), Some("5"));
        assert_eq!((p.page, p.limit, p.offset()), (3, 5, 10));
    }
}
