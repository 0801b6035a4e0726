//! Filtering pipeline shared by every record collection.
//!
//! All list endpoints reduce to the same shape: AND-combined equality
//! predicates, an optional time-window cutoff, a newest-first sort on the
//! record timestamp and a result limit. [`Query`] captures that shape once so
//! each service only supplies its predicates.

use jiff::{SignedDuration, Timestamp};

/// Records that carry an event instant.
pub trait Timestamped {
    /// The instant used for window filtering and newest-first ordering.
    fn timestamp(&self) -> Timestamp;
}

/// A filter -> sort -> limit pipeline over one collection.
pub struct Query<T> {
    filters: Vec<Box<dyn Fn(&T) -> bool + Send + Sync>>,
    since: Option<Timestamp>,
    limit: Option<i64>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Query<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            since: None,
            limit: None,
        }
    }

    /// Add a predicate; all predicates combine with logical AND.
    #[must_use]
    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Add an equality predicate only when the filter value is present.
    #[must_use]
    pub fn filter_eq<V: PartialEq + Send + Sync + 'static>(
        self,
        wanted: Option<V>,
        key: impl Fn(&T) -> &V + Send + Sync + 'static,
    ) -> Self {
        match wanted {
            Some(wanted) => self.filter(move |record| *key(record) == wanted),
            None => self,
        }
    }

    /// Keep only records whose timestamp is at or after the cutoff.
    #[must_use]
    pub fn since(mut self, cutoff: Timestamp) -> Self {
        self.since = Some(cutoff);
        self
    }

    /// Truncate the sorted result. A limit of zero or below yields no
    /// records rather than being ignored.
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, record: &T) -> bool {
        self.filters.iter().all(|filter| filter(record))
    }
}

impl<T: Clone> Query<T> {
    /// Run the predicates over a collection, preserving input order.
    ///
    /// Used by collections without an event timestamp (organizations).
    #[must_use]
    pub fn matching(&self, records: &[T]) -> Vec<T> {
        if matches!(self.limit, Some(limit) if limit <= 0) {
            return Vec::new();
        }

        let mut out: Vec<T> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        if let Some(limit) = self.limit {
            out.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        out
    }
}

impl<T: Clone + Timestamped> Query<T> {
    /// Run the full pipeline: predicates, window cutoff, newest-first sort,
    /// then the limit.
    #[must_use]
    pub fn newest_first(&self, records: &[T]) -> Vec<T> {
        if matches!(self.limit, Some(limit) if limit <= 0) {
            return Vec::new();
        }

        let mut out: Vec<T> = records
            .iter()
            .filter(|record| self.matches(record))
            .filter(|record| match self.since {
                Some(cutoff) => record.timestamp() >= cutoff,
                None => true,
            })
            .cloned()
            .collect();

        // Compare parsed instants, not their textual form: timestamps with
        // differing zone suffixes would break a lexicographic order.
        out.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        if let Some(limit) = self.limit {
            out.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        out
    }
}

/// Cutoff instant for a look-back window of whole days.
#[must_use]
pub fn days_ago(days: i64) -> Timestamp {
    hours_ago(days.saturating_mul(24))
}

/// Cutoff instant for a look-back window of whole hours.
#[must_use]
pub fn hours_ago(hours: i64) -> Timestamp {
    Timestamp::now()
        .saturating_sub(SignedDuration::from_hours(hours))
        .expect("absolute-duration arithmetic is infallible")
}
