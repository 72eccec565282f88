//! Ordered in-memory record storage shared by the player and team collections.

use serde::Deserialize;
use tokio::sync::RwLock;

/// Behaviour a record needs in order to live inside a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Validated input used to build a brand-new record.
    type Draft: Send;
    /// Partial update applied in place to an existing record.
    type Patch: Send;

    /// Identifier assigned by the store at creation time.
    fn id(&self) -> u64;

    /// Build a record from its draft once the store picked an identifier.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    fn apply(&mut self, patch: Self::Patch);
}

/// Strategy used to pick the identifier of a newly created record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `id = number of stored records + 1`. Identifiers can be handed out
    /// again after a delete.
    #[default]
    CountPlusOne,
    /// `id = highest identifier ever issued + 1`. Identifiers are never reused.
    Monotonic,
}

struct Records<T> {
    items: Vec<T>,
    last_issued: u64,
}

/// Insertion-ordered collection of records guarded by an async lock.
///
/// The underlying sequence is never handed out; callers only get clones.
pub struct RecordStore<T: Record> {
    inner: RwLock<Records<T>>,
    policy: IdPolicy,
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store assigning identifiers with `policy`.
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            inner: RwLock::new(Records {
                items: Vec::new(),
                last_issued: 0,
            }),
            policy,
        }
    }

    /// Snapshot every record in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.items.clone()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    /// Whether the store holds no record.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }

    /// Append a new record built from `draft` and return it.
    pub async fn insert(&self, draft: T::Draft) -> T {
        let mut guard = self.inner.write().await;
        let id = match self.policy {
            IdPolicy::CountPlusOne => guard.items.len() as u64 + 1,
            IdPolicy::Monotonic => guard.last_issued + 1,
        };
        guard.last_issued = guard.last_issued.max(id);

        let record = T::from_draft(id, draft);
        guard.items.push(record.clone());
        record
    }

    /// First record whose identifier equals `id`.
    pub async fn get(&self, id: u64) -> Option<T> {
        let guard = self.inner.read().await;
        guard.items.iter().find(|record| record.id() == id).cloned()
    }

    /// Apply `patch` to the first record matching `id`, returning the updated record.
    pub async fn update(&self, id: u64, patch: T::Patch) -> Option<T> {
        let mut guard = self.inner.write().await;
        let record = guard.items.iter_mut().find(|record| record.id() == id)?;
        record.apply(patch);
        Some(record.clone())
    }

    /// Remove the first record matching `id`, returning it.
    ///
    /// Remaining records keep their identifiers and relative order.
    pub async fn remove(&self, id: u64) -> Option<T> {
        let mut guard = self.inner.write().await;
        let index = guard.items.iter().position(|record| record.id() == id)?;
        Some(guard.items.remove(index))
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
