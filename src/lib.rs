pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{
    college_client::HttpCollegeClient, file_store::FileStudentStore,
    memory_store::MemoryStudentStore,
};
pub use app::Application;
pub use config::{CliConfig, ConfigProvider};
pub use crate::core::{enrichment::EnrichmentService, students::StudentService};
pub use domain::model::{College, Student, StudentWithCollege};
pub use utils::error::{Result, StudentError};
