//! Flat-file store for standalone CLI use.
//!
//! Authors and questions live in two JSON files under the store directory.
//! Every operation reads and rewrites the whole file; uploads are small and
//! the CLI runs one batch at a time.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use quiz_core::{AccountStore, QuestionStore};
use quiz_model::{AuthorId, AuthorRef, NewQuestion, QuestionId, QuestionRecord};

const AUTHORS_FILE: &str = "authors.json";
const QUESTIONS_FILE: &str = "questions.json";

pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create store directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn add_author(&self, author: AuthorRef) -> Result<()> {
        let mut authors = self.load_authors()?;
        authors.retain(|existing| existing.id != author.id);
        authors.push(author);
        self.write_json(AUTHORS_FILE, &authors)
    }

    pub fn questions(&self) -> Result<Vec<QuestionRecord>> {
        self.load_json(QUESTIONS_FILE)
    }

    fn load_authors(&self) -> Result<Vec<AuthorRef>> {
        self.load_json(AUTHORS_FILE)
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read store file: {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse store file: {}", path.display()))
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, values: &[T]) -> Result<()> {
        let path = self.dir.join(name);
        let text = serde_json::to_string_pretty(values).context("serialize store file")?;
        fs::write(&path, text).with_context(|| format!("write store file: {}", path.display()))
    }
}

impl AccountStore for JsonStore {
    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRef>> {
        Ok(self
            .load_authors()?
            .into_iter()
            .find(|author| author.id == id))
    }

    fn increment_question_count(&self, id: AuthorId) -> Result<()> {
        let mut authors = self.load_authors()?;
        let author = authors
            .iter_mut()
            .find(|author| author.id == id)
            .ok_or_else(|| anyhow!("unknown author: {id}"))?;
        author.total_questions_created += 1;
        self.write_json(AUTHORS_FILE, &authors)
    }
}

impl QuestionStore for JsonStore {
    fn save(&self, question: NewQuestion) -> Result<QuestionId> {
        let mut questions: Vec<QuestionRecord> = self.questions()?;
        let next_id = questions
            .iter()
            .map(|record| record.id.0)
            .max()
            .unwrap_or(0)
            + 1;
        let id = QuestionId(next_id);
        questions.push(QuestionRecord {
            id,
            question,
            created_at: chrono::Utc::now(),
        });
        self.write_json(QUESTIONS_FILE, &questions)?;
        Ok(id)
    }
}
