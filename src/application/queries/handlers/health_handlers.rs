//! Health Query Handler

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VoiceCatalogPort;
use crate::application::queries::CheckHealth;

/// CheckHealth Handler
pub struct CheckHealthHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
}

impl CheckHealthHandler {
    pub fn new(catalog: Arc<dyn VoiceCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: CheckHealth) -> Result<(), ApplicationError> {
        self.catalog.ping().await.map_err(ApplicationError::Unhealthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ErrorKind;
    use crate::infrastructure::memory::{CatalogOperation, InMemoryVoiceCatalog, InjectedFailure};

    #[tokio::test]
    async fn test_healthy_store() {
        let handler = CheckHealthHandler::new(Arc::new(InMemoryVoiceCatalog::new()));
        assert!(handler.handle(CheckHealth).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let catalog = Arc::new(InMemoryVoiceCatalog::new());
        catalog.fail_on(CatalogOperation::Ping, InjectedFailure::Unavailable);
        let handler = CheckHealthHandler::new(catalog);

        let err = handler.handle(CheckHealth).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
    }
}
