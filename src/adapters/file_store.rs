use crate::adapters::document::DocumentCollection;
use crate::core::{Result, Student, StudentStore};
use crate::utils::error::StudentError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Student store persisted as a single JSON document file.
///
/// The whole collection is loaded on open and rewritten after every
/// mutation, while the collection lock is held. A mutation only becomes
/// visible in memory once the file has been replaced on disk.
#[derive(Debug)]
pub struct FileStudentStore {
    path: PathBuf,
    docs: Mutex<DocumentCollection>,
}

impl FileStudentStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let docs = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => DocumentCollection::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StudentError::store(format!("corrupt student file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DocumentCollection::new(),
            Err(e) => {
                return Err(StudentError::store(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::info!(
            "Opened student file {} with {} records",
            path.display(),
            docs.len()
        );

        Ok(Self {
            path,
            docs: Mutex::new(docs),
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    /// Writes `docs` to a sibling temp file, then renames it over the data file.
    async fn persist(&self, docs: &DocumentCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    StudentError::store(format!("failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let data = serde_json::to_vec_pretty(docs)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, data).await.map_err(|e| {
            StudentError::store(format!("failed to write {}: {}", tmp.display(), e))
        })?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StudentError::store(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::debug!("Wrote {} records to {}", docs.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl StudentStore for FileStudentStore {
    async fn save(&self, student: Student) -> Result<Student> {
        let mut docs = self.docs.lock().await;
        let mut next = docs.clone();
        let saved = next.upsert(student);
        self.persist(&next).await?;
        *docs = next;
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.docs.lock().await.all())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.docs.lock().await.by_id(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Student>> {
        Ok(self.docs.lock().await.by_name(name))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut docs = self.docs.lock().await;
        let mut next = docs.clone();
        if next.remove(id) {
            self.persist(&next).await?;
            *docs = next;
        }
        Ok(())
    }

    async fn find_by_college_id(&self, college_id: &str) -> Result<Vec<Student>> {
        Ok(self.docs.lock().await.by_college_id(college_id))
    }
}
