use crate::core::{Result, Student, StudentStore};
use std::sync::Arc;

/// Plain CRUD over the student store.
#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn save_student(&self, student: Student) -> Result<Student> {
        let saved = self.store.save(student).await?;
        tracing::debug!("Saved student {:?}", saved.id);
        Ok(saved)
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>> {
        self.store.find_all().await
    }

    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.store.delete_by_id(id).await
    }

    pub async fn get_student_by_name(&self, name: &str) -> Result<Option<Student>> {
        self.store.find_by_name(name).await
    }

    /// Looks the student up by name. No field is changed.
    // TODO: accept a replacement body once clients agree on partial-update semantics.
    pub async fn update_student_by_name(&self, name: &str) -> Result<Option<Student>> {
        let student = self.store.find_by_name(name).await?;
        match &student {
            Some(_) => tracing::info!("Student record found for update: {}", name),
            None => tracing::info!("Student record not found: {}", name),
        }
        Ok(student)
    }
}
