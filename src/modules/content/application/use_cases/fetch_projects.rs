use async_trait::async_trait;

use crate::content::domain::entities::Project;
use crate::gateway::application::ports::outgoing::HttpGateway;

/// Normalizing read: the project list view never distinguishes "network
/// failure" from "no projects yet", so every failure collapses to an empty
/// list and the diagnostic goes to the log instead of the user.
#[async_trait]
pub trait IFetchProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}

pub struct FetchProjectsUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchProjectsUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchProjectsUseCase for FetchProjectsUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self) -> Vec<Project> {
        match self.gateway.get("/projects/").await {
            Ok(body) => serde_json::from_str(&body).unwrap_or_else(|err| {
                tracing::error!("Error decoding projects payload: {err}");
                Vec::new()
            }),
            Err(err) => {
                tracing::error!("Error fetching projects: {err}");
                Vec::new()
            }
        }
    }
}
