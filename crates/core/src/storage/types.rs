/// A pagination window over an ordered (or store-ordered) result set.
///
/// `skip`/`limit` are unsigned so negativity is rejected at the type level.
/// `limit` is deliberately uncapped, matching the service's loose contract:
/// callers may request unbounded result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    /// Default window size when the caller does not specify one.
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let page = Page::default();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_new() {
        let page = Page::new(20, 10);
        assert_eq!(page, Page { skip: 20, limit: 10 });
    }
}
