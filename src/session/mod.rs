//! The running list of generated scrambles.
//!
//! Each generation appends a batch to the list; nothing is replaced until
//! the list is cleared. The list is immutable: every operation returns a
//! new list, following the same pure-core approach as the generator.

mod error;

pub use error::SessionError;

use crate::builder::BatchRequest;
use crate::core::Scramble;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One generated scramble and where it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrambleEntry {
    pub scramble: Scramble,
    /// When the batch containing this scramble was generated
    pub generated_at: DateTime<Utc>,
    /// Seed of the batch, if it was seeded
    pub seed: Option<u64>,
}

/// Ordered list of generated scrambles.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use scrambler::builder::BatchRequestBuilder;
/// use scrambler::generator::generate_batch;
/// use scrambler::session::ScrambleList;
///
/// let request = BatchRequestBuilder::new().count(3).seed(1).build().unwrap();
///
/// let list = ScrambleList::new();
/// let list = list.record_batch(&request, generate_batch(&request), Utc::now());
/// let list = list.record_batch(&request, generate_batch(&request), Utc::now());
///
/// assert_eq!(list.len(), 6);
/// assert!(list.clear().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrambleList {
    entries: Vec<ScrambleEntry>,
}

impl ScrambleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated batch, returning a new list.
    ///
    /// The original list is left untouched.
    pub fn record_batch(
        &self,
        request: &BatchRequest,
        scrambles: Vec<Scramble>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(scrambles.into_iter().map(|scramble| ScrambleEntry {
            scramble,
            generated_at,
            seed: request.seed,
        }));
        Self { entries }
    }

    /// An empty list.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScrambleEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Scramble> {
        self.entries.get(index).map(|entry| &entry.scramble)
    }

    /// All scrambles in list order.
    pub fn scrambles(&self) -> impl Iterator<Item = &Scramble> {
        self.entries.iter().map(|entry| &entry.scramble)
    }

    /// Pick scrambles by index, in list order.
    ///
    /// Duplicate indices are collapsed. Fails on an empty selection or on
    /// any index past the end of the list.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<&Scramble>, SessionError> {
        if indices.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        sorted
            .into_iter()
            .map(|index| {
                self.get(index).ok_or(SessionError::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
            })
            .collect()
    }

    /// Time between the first and last generated batch.
    ///
    /// Returns `None` for an empty list.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.generated_at
            .signed_duration_since(first.generated_at)
            .to_std()
            .ok()
    }
}

/// Status line shown after a batch is generated.
pub fn batch_summary(request: &BatchRequest, list: &ScrambleList) -> String {
    format!(
        "Generated {} (length {}). Total: {}.",
        request.count,
        request.length,
        list.len()
    )
}
