use async_trait::async_trait;

use crate::gateway::application::ports::outgoing::HttpGateway;
use crate::profile::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchHomeSkillsError {
    #[error("Unable to load skills from the API. Please try again shortly.")]
    Unavailable,
}

/// Curated subset for the home page strip; the backend picks roughly five
/// representative skills. Surfacing contract, same as the full skills read.
#[async_trait]
pub trait IFetchHomeSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, FetchHomeSkillsError>;
}

pub struct FetchHomeSkillsUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchHomeSkillsUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchHomeSkillsUseCase for FetchHomeSkillsUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self) -> Result<Vec<Skill>, FetchHomeSkillsError> {
        let body = self.gateway.get("/skills/home/").await.map_err(|err| {
            tracing::error!("Error fetching home skills: {err}");
            FetchHomeSkillsError::Unavailable
        })?;

        serde_json::from_str(&body).map_err(|err| {
            tracing::error!("Error decoding home skills payload: {err}");
            FetchHomeSkillsError::Unavailable
        })
    }
}
