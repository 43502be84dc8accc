//! Storage representation of students and the in-process collection both
//! store backends are built on.

use crate::domain::model::Student;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student as it is laid out in the `students` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub age: String,
    pub college_id: String,
}

impl StudentDocument {
    /// Maps a student to its document, generating an id when it has none.
    pub fn from_student(student: Student) -> Self {
        let id = match student.id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().simple().to_string(),
        };
        Self {
            id,
            name: student.name,
            address: student.address,
            age: student.age,
            college_id: student.college_id,
        }
    }
}

impl From<StudentDocument> for Student {
    fn from(doc: StudentDocument) -> Self {
        Student {
            id: Some(doc.id),
            name: doc.name,
            address: doc.address,
            age: doc.age,
            college_id: doc.college_id,
        }
    }
}

impl From<&StudentDocument> for Student {
    fn from(doc: &StudentDocument) -> Self {
        doc.clone().into()
    }
}

/// Ordered set of documents. Replacing a document keeps its position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentCollection {
    docs: Vec<StudentDocument>,
}

impl DocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, student: Student) -> Student {
        let doc = StudentDocument::from_student(student);
        let saved = Student::from(&doc);
        match self.docs.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc,
            None => self.docs.push(doc),
        }
        saved
    }

    pub fn all(&self) -> Vec<Student> {
        self.docs.iter().map(Student::from).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<Student> {
        self.docs.iter().find(|d| d.id == id).map(Student::from)
    }

    pub fn by_name(&self, name: &str) -> Option<Student> {
        self.docs.iter().find(|d| d.name == name).map(Student::from)
    }

    pub fn by_college_id(&self, college_id: &str) -> Vec<Student> {
        self.docs
            .iter()
            .filter(|d| d.college_id == college_id)
            .map(Student::from)
            .collect()
    }

    /// Returns whether a document was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.docs.len();
        self.docs.retain(|d| d.id != id);
        self.docs.len() != before
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
