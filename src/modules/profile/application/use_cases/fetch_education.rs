use async_trait::async_trait;

use crate::gateway::application::ports::outgoing::HttpGateway;
use crate::profile::domain::entities::EducationEntry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchEducationError {
    #[error("Unable to load education. Please try again shortly.")]
    Unavailable,
}

#[async_trait]
pub trait IFetchEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationEntry>, FetchEducationError>;
}

pub struct FetchEducationUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchEducationUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchEducationUseCase for FetchEducationUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self) -> Result<Vec<EducationEntry>, FetchEducationError> {
        let body = self.gateway.get("/education/").await.map_err(|err| {
            tracing::error!("Error fetching education: {err}");
            FetchEducationError::Unavailable
        })?;

        serde_json::from_str(&body).map_err(|err| {
            tracing::error!("Error decoding education payload: {err}");
            FetchEducationError::Unavailable
        })
    }
}
