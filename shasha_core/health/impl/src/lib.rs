use std::{sync::Arc, time::Duration};

use shasha_core_health_contracts::{HealthFeatureService, HealthStatus};
use shasha_email_contracts::EmailService;
use tokio::{sync::RwLock, time::Instant};
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Email> {
    email: Email,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Email> HealthFeatureServiceImpl<Email> {
    pub fn new(email: Email, config: HealthFeatureConfig) -> Self {
        Self {
            email,
            config,
            state: Default::default(),
        }
    }

    fn fresh(&self, cached: &Option<CachedStatus>, now: Instant) -> Option<HealthStatus> {
        cached
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
            .map(|c| c.status)
    }
}

impl<Email> HealthFeatureService for HealthFeatureServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = Instant::now();
        if let Some(status) = self.fresh(&*self.state.cache.read().await, now) {
            return status;
        }

        let mut cache_guard = self.state.cache.write().await;
        if let Some(status) = self.fresh(&cache_guard, now) {
            return status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping email transport: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        *cache_guard = Some(CachedStatus {
            status,
            timestamp: now,
        });

        status
    }
}

#[cfg(test)]
mod tests {
    use shasha_email_contracts::MockEmailService;

    use super::*;

    fn sut(email: MockEmailService) -> HealthFeatureServiceImpl<MockEmailService> {
        HealthFeatureServiceImpl::new(
            email,
            HealthFeatureConfig {
                cache_ttl: Duration::from_secs(2),
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn healthy_and_cached() {
        // Arrange
        let sut = sut(MockEmailService::new().with_ping(true));

        // Act
        let first = sut.get_status().await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: true });
        assert_eq!(second, first);
    }

    #[tokio::test(start_paused = true)]
    async fn unhealthy_then_recovered() {
        // Arrange
        let mut email = MockEmailService::new();
        let mut seq = mockall::Sequence::new();
        email
            .expect_ping()
            .once()
            .in_sequence(&mut seq)
            .return_once(|| Box::pin(std::future::ready(Err(anyhow::anyhow!("timeout")))));
        email
            .expect_ping()
            .once()
            .in_sequence(&mut seq)
            .return_once(|| Box::pin(std::future::ready(Ok(()))));
        let sut = sut(email);

        // Act
        let first = sut.get_status().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: false });
        assert_eq!(second, HealthStatus { email: true });
    }
}
