use crate::params::Params;

pub const MAX_LOG_COUNT: u32 = 20;

/// Page of the system log to fetch with `getLog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    /// Index of the first entry.
    pub offset: u32,
    /// Entries to return. 0 means the default page size and anything above 20
    /// is clamped to 20.
    pub count: u32,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            count: MAX_LOG_COUNT,
        }
    }
}

impl From<LogQuery> for Params {
    fn from(q: LogQuery) -> Self {
        let count = match q.count {
            0 => MAX_LOG_COUNT,
            n => n.min(MAX_LOG_COUNT),
        };
        Params::new().with("offset", q.offset).with("count", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_means_full_page() {
        let params: Params = LogQuery { offset: 40, count: 0 }.into();
        assert_eq!(params.get("offset"), Some("40"));
        assert_eq!(params.get("count"), Some("20"));
    }

    #[test]
    fn test_count_is_clamped_to_page_size() {
        let params: Params = LogQuery { offset: 0, count: 50 }.into();
        assert_eq!(params.get("count"), Some("20"));

        let params: Params = LogQuery { offset: 0, count: 5 }.into();
        assert_eq!(params.get("count"), Some("5"));
    }
}
