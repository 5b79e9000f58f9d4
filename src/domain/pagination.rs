//! Limit/offset windows over ordered collections.

/// Number of records returned when the client does not ask for a limit.
pub const DEFAULT_LIMIT: u64 = 10;

/// One page of an ordered collection: skip `offset` records, take `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

impl Window {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Returns the records of `items` that fall inside the window.
    ///
    /// Offsets past the end yield an empty slice.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.offset.min(len);
        let end = self.offset.saturating_add(self.limit).min(len);
        // Both bounds are clipped to `len`, which came from a usize.
        &items[start as usize..end as usize]
    }

    /// `LIMIT` value for SQLite, which binds integers as `i64`.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// `OFFSET` value for SQLite.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
