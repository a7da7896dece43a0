use chrono::{DateTime, Duration, Utc};

/// Cached result of a remote query, stamped with its fetch time.
///
/// The caching discipline is invalidate-and-refetch: mutations never
/// patch the cached value, they drop it so the next read goes back to
/// the API. While a value is held, reads are served from it without a
/// network call; freshness windows only matter to callers that opt in
/// via [`CachedQuery::get_fresh`].
#[derive(Debug, Clone)]
pub struct CachedQuery<T> {
    entry: Option<(T, DateTime<Utc>)>,
}

impl<T> CachedQuery<T> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Store a freshly fetched value, stamping it with the current time.
    pub fn store(&mut self, value: T) {
        self.entry = Some((value, Utc::now()));
    }

    /// The cached value regardless of age, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.entry.as_ref().map(|(value, _)| value)
    }

    /// The cached value only if it was fetched within `ttl`.
    #[must_use]
    pub fn get_fresh(&self, ttl: Duration) -> Option<&T> {
        self.entry.as_ref().and_then(|(value, fetched_at)| {
            if Utc::now().signed_duration_since(*fetched_at) <= ttl {
                Some(value)
            } else {
                None
            }
        })
    }

    /// Drop the cached value; the next read must refetch.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// True when a value is held, fresh or stale.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }

    /// When the held value was fetched.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|(_, fetched_at)| *fetched_at)
    }
}

impl<T> Default for CachedQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}
