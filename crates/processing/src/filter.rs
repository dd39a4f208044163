use model::records::raw::{CloudPatternRecord, RawRecord};

/// Decides whether a raw record contributes to the report.
pub trait Filter<R: ?Sized> {
    fn should_keep(&self, record: &R) -> bool;
}

/// Drops records with no occurrences.
pub struct ZeroOccurrenceFilter;

impl<R: RawRecord + ?Sized> Filter<R> for ZeroOccurrenceFilter {
    fn should_keep(&self, record: &R) -> bool {
        record.occurrences() > 0
    }
}

/// Drops cloud patterns not attached to any application.
pub struct UnattachedPatternFilter;

impl Filter<CloudPatternRecord> for UnattachedPatternFilter {
    fn should_keep(&self, record: &CloudPatternRecord) -> bool {
        !record.applications.is_empty()
    }
}

/// Keeps a record only if every filter keeps it.
pub struct FilterChain<'a, R: ?Sized> {
    filters: Vec<&'a dyn Filter<R>>,
}

impl<'a, R: ?Sized> FilterChain<'a, R> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn with(mut self, filter: &'a dyn Filter<R>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn should_keep(&self, record: &R) -> bool {
        self.filters.iter().all(|f| f.should_keep(record))
    }
}

impl<R: ?Sized> Default for FilterChain<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}
