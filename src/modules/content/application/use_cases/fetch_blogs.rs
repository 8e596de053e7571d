use async_trait::async_trait;

use crate::content::domain::entities::BlogPost;
use crate::gateway::application::ports::outgoing::HttpGateway;

/// Normalizing read, same contract as the project list: failures collapse to
/// an empty list and are logged, never surfaced.
#[async_trait]
pub trait IFetchBlogsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<BlogPost>;
}

pub struct FetchBlogsUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchBlogsUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchBlogsUseCase for FetchBlogsUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self) -> Vec<BlogPost> {
        match self.gateway.get("/blogs/").await {
            Ok(body) => serde_json::from_str(&body).unwrap_or_else(|err| {
                tracing::error!("Error decoding blogs payload: {err}");
                Vec::new()
            }),
            Err(err) => {
                tracing::error!("Error fetching blogs: {err}");
                Vec::new()
            }
        }
    }
}
