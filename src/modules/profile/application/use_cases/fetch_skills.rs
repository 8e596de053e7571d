use async_trait::async_trait;

use crate::gateway::application::ports::outgoing::HttpGateway;
use crate::profile::domain::entities::Skill;

/// Surfacing read: unlike the project/blog wrappers, the about view shows an
/// inline message when skills cannot load, so the failure propagates with
/// user-displayable copy. The diagnostic is logged here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSkillsError {
    #[error("Unable to load skills. Please try again shortly.")]
    Unavailable,
}

#[async_trait]
pub trait IFetchSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, FetchSkillsError>;
}

pub struct FetchSkillsUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchSkillsUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchSkillsUseCase for FetchSkillsUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self) -> Result<Vec<Skill>, FetchSkillsError> {
        let body = self.gateway.get("/skills/").await.map_err(|err| {
            tracing::error!("Error fetching skills: {err}");
            FetchSkillsError::Unavailable
        })?;

        serde_json::from_str(&body).map_err(|err| {
            tracing::error!("Error decoding skills payload: {err}");
            FetchSkillsError::Unavailable
        })
    }
}
