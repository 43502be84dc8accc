use crate::core::{College, CollegeClient, Result, Student, StudentStore, StudentWithCollege};
use std::sync::Arc;

/// Pairs stored students with their college details from the college service.
///
/// A failed college lookup never fails the request: the student is paired
/// with [`College::placeholder`] instead. Only store errors propagate.
#[derive(Clone)]
pub struct EnrichmentService {
    store: Arc<dyn StudentStore>,
    colleges: Arc<dyn CollegeClient>,
}

impl EnrichmentService {
    pub fn new(store: Arc<dyn StudentStore>, colleges: Arc<dyn CollegeClient>) -> Self {
        Self { store, colleges }
    }

    pub async fn enrich_students_for_college(
        &self,
        college_id: &str,
    ) -> Result<Vec<StudentWithCollege>> {
        let students = self.store.find_by_college_id(college_id).await?;
        tracing::debug!(
            "Enriching {} students for college id '{}'",
            students.len(),
            college_id
        );

        let mut enriched = Vec::with_capacity(students.len());
        // One lookup per student, in order; no sharing between students of the same college.
        for student in students {
            let college = self.college_for(&student).await;
            enriched.push(StudentWithCollege { student, college });
        }

        Ok(enriched)
    }

    /// Students of a college without contacting the college service.
    pub async fn students_by_college_id_only(&self, college_id: &str) -> Result<Vec<Student>> {
        self.store.find_by_college_id(college_id).await
    }

    async fn college_for(&self, student: &Student) -> College {
        match self.colleges.fetch_college(&student.college_id).await {
            Ok(college) => college,
            Err(e) => {
                tracing::warn!(
                    college_id = %student.college_id,
                    error = %e,
                    "College service unavailable, using placeholder college"
                );
                College::placeholder(&student.college_id)
            }
        }
    }
}
