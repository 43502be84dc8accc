pub mod enrichment;
pub mod students;

pub use crate::domain::model::{College, Student, StudentWithCollege};
pub use crate::domain::ports::{CollegeClient, StudentStore};
pub use crate::utils::error::Result;
