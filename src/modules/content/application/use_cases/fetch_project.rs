use async_trait::async_trait;

use crate::content::domain::entities::Project;
use crate::gateway::application::ports::outgoing::HttpGateway;

/// Normalizing single-item read: an absent project is an expected outcome
/// (the detail view redirects to the list), so failures resolve to `None`
/// instead of raising.
#[async_trait]
pub trait IFetchProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Option<Project>;
}

pub struct FetchProjectUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchProjectUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchProjectUseCase for FetchProjectUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self, slug: &str) -> Option<Project> {
        match self.gateway.get(&format!("/projects/{slug}/")).await {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(project) => Some(project),
                Err(err) => {
                    tracing::error!("Error decoding project {slug}: {err}");
                    None
                }
            },
            Err(err) => {
                if err.is_not_found() {
                    tracing::debug!("Project {slug} not found");
                } else {
                    tracing::error!("Error fetching project {slug}: {err}");
                }
                None
            }
        }
    }
}
