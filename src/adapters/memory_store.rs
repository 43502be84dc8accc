use crate::adapters::document::DocumentCollection;
use crate::core::{Result, Student, StudentStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Student store kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    docs: RwLock<DocumentCollection>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn save(&self, student: Student) -> Result<Student> {
        Ok(self.docs.write().await.upsert(student))
    }

    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.docs.read().await.all())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.docs.read().await.by_id(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Student>> {
        Ok(self.docs.read().await.by_name(name))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.docs.write().await.remove(id);
        Ok(())
    }

    async fn find_by_college_id(&self, college_id: &str) -> Result<Vec<Student>> {
        Ok(self.docs.read().await.by_college_id(college_id))
    }
}
