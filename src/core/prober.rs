use crate::domain::model::ConnectionStatus;
use crate::domain::ports::ContactEndpoint;

/// One best-effort reachability check against the contact endpoint. No retry.
pub async fn probe_connectivity<E: ContactEndpoint + ?Sized>(endpoint: &E) -> ConnectionStatus {
    tracing::debug!("Probing contact endpoint");

    match endpoint.probe().await {
        Ok(()) => {
            tracing::info!("🔌 Contact endpoint reachable");
            ConnectionStatus::Connected
        }
        Err(failure) => {
            tracing::error!("❌ Contact endpoint probe failed: {}", failure);
            ConnectionStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ContactMessage, SubmitFailure};
    use async_trait::async_trait;

    struct FixedEndpoint(Option<SubmitFailure>);

    #[async_trait]
    impl ContactEndpoint for FixedEndpoint {
        async fn probe(&self) -> Result<(), SubmitFailure> {
            match &self.0 {
                None => Ok(()),
                Some(f) => Err(f.clone()),
            }
        }

        async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitFailure> {
            unreachable!("probe never submits")
        }
    }

    #[test]
    fn test_probe_success_means_connected() {
        let status = tokio_test::block_on(probe_connectivity(&FixedEndpoint(None)));
        assert_eq!(status, ConnectionStatus::Connected);
    }

    #[test]
    fn test_any_probe_failure_means_error() {
        let failures = [
            SubmitFailure::Network("connection refused".to_string()),
            SubmitFailure::Authentication { status: 401 },
            SubmitFailure::Remote { status: 500 },
        ];
        for failure in failures {
            let status = tokio_test::block_on(probe_connectivity(&FixedEndpoint(Some(failure))));
            assert_eq!(status, ConnectionStatus::Error);
        }
    }
}
