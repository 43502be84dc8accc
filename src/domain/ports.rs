use crate::domain::model::{College, Student};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Document store holding student records, keyed by an opaque string id.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Inserts or replaces by id. Assigns an id when the student has none.
    async fn save(&self, student: Student) -> Result<Student>;
    async fn find_all(&self) -> Result<Vec<Student>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>>;
    /// First student with this exact name, in store order.
    async fn find_by_name(&self, name: &str) -> Result<Option<Student>>;
    /// Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
    async fn find_by_college_id(&self, college_id: &str) -> Result<Vec<Student>>;
}

/// Remote lookup of college details by id.
#[async_trait]
pub trait CollegeClient: Send + Sync {
    async fn fetch_college(&self, college_id: &str) -> Result<College>;
}
