//! Store contracts the pipeline persists through.
//!
//! The batch coordinator only ever talks to these two traits; the real
//! application wires in whatever persistence it has. [`MemoryStore`] is the
//! reference implementation used by tests and the CLI's dry runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use quiz_model::{AuthorId, AuthorRef, NewQuestion, QuestionId, QuestionRecord};

/// Lookup and bookkeeping for question authors.
pub trait AccountStore {
    /// Find an author by id; `Ok(None)` when no such account exists.
    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRef>>;

    /// Bump the author's created-questions counter by one.
    fn increment_question_count(&self, id: AuthorId) -> Result<()>;
}

/// Persistence for validated questions.
pub trait QuestionStore {
    /// Persist one question, returning its assigned id.
    fn save(&self, question: NewQuestion) -> Result<QuestionId>;
}

#[derive(Default)]
struct MemoryInner {
    authors: BTreeMap<AuthorId, AuthorRef>,
    questions: BTreeMap<QuestionId, QuestionRecord>,
    next_question_id: i64,
}

/// In-memory store backing tests and CLI dry runs.
///
/// Interior mutability behind a mutex so one instance can serve both trait
/// objects at once.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor seeding a single author.
    pub fn with_author(author: AuthorRef) -> Self {
        let store = Self::new();
        store.add_author(author);
        store
    }

    pub fn add_author(&self, author: AuthorRef) {
        let mut inner = self.lock();
        inner.authors.insert(author.id, author);
    }

    pub fn question_count(&self) -> usize {
        self.lock().questions.len()
    }

    pub fn questions(&self) -> Vec<QuestionRecord> {
        self.lock().questions.values().cloned().collect()
    }

    pub fn author(&self, id: AuthorId) -> Option<AuthorRef> {
        self.lock().authors.get(&id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // Poisoned only after a panic elsewhere; the data is still usable.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AccountStore for MemoryStore {
    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRef>> {
        Ok(self.lock().authors.get(&id).cloned())
    }

    fn increment_question_count(&self, id: AuthorId) -> Result<()> {
        let mut inner = self.lock();
        let author = inner
            .authors
            .get_mut(&id)
            .ok_or_else(|| anyhow!("unknown author: {id}"))?;
        author.total_questions_created += 1;
        Ok(())
    }
}

impl QuestionStore for MemoryStore {
    fn save(&self, question: NewQuestion) -> Result<QuestionId> {
        let mut inner = self.lock();
        inner.next_question_id += 1;
        let id = QuestionId(inner.next_question_id);
        inner.questions.insert(
            id,
            QuestionRecord {
                id,
                question,
                created_at: chrono::Utc::now(),
            },
        );
        Ok(id)
    }
}
