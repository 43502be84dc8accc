//! Composition root: builds every collaborator explicitly from configuration
//! and owns their lifetime.

use crate::adapters::college_client::HttpCollegeClient;
use crate::adapters::file_store::FileStudentStore;
use crate::adapters::memory_store::MemoryStudentStore;
use crate::api::{self, AppState};
use crate::config::ConfigProvider;
use crate::core::enrichment::EnrichmentService;
use crate::core::students::StudentService;
use crate::core::{CollegeClient, StudentStore};
use crate::utils::error::{Result, StudentError};
use crate::utils::validation::validate_socket_addr;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct Application {
    addr: SocketAddr,
    router: Router,
}

impl Application {
    pub async fn build(config: &dyn ConfigProvider) -> Result<Self> {
        let addr = validate_socket_addr("bind", config.bind_address())?;

        let store: Arc<dyn StudentStore> = match config.data_file() {
            Some(path) => Arc::new(FileStudentStore::open(path).await?),
            None => {
                tracing::warn!("No data file configured, students are kept in memory only");
                Arc::new(MemoryStudentStore::new())
            }
        };

        // One client for the whole process; its connection pool is shared by every request.
        let http = reqwest::Client::builder().build()?;
        let colleges: Arc<dyn CollegeClient> = Arc::new(
            HttpCollegeClient::new(http, config.college_service_url())?
                .with_timeout(config.college_timeout()),
        );

        tracing::info!(
            "College service at {} (timeout: {:?})",
            config.college_service_url(),
            config.college_timeout()
        );

        Ok(Self::from_parts(addr, store, colleges))
    }

    pub fn from_parts(
        addr: SocketAddr,
        store: Arc<dyn StudentStore>,
        colleges: Arc<dyn CollegeClient>,
    ) -> Self {
        let state = AppState {
            students: StudentService::new(store.clone()),
            enrichment: EnrichmentService::new(store, colleges),
        };
        Self {
            addr,
            router: api::router(state),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Listening on http://{}", local_addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(StudentError::Io)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
