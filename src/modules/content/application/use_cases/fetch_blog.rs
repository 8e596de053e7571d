use async_trait::async_trait;

use crate::content::domain::entities::BlogPost;
use crate::gateway::application::ports::outgoing::HttpGateway;

#[async_trait]
pub trait IFetchBlogUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Option<BlogPost>;
}

pub struct FetchBlogUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> FetchBlogUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IFetchBlogUseCase for FetchBlogUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self, slug: &str) -> Option<BlogPost> {
        match self.gateway.get(&format!("/blogs/{slug}/")).await {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(post) => Some(post),
                Err(err) => {
                    tracing::error!("Error decoding blog {slug}: {err}");
                    None
                }
            },
            Err(err) => {
                if err.is_not_found() {
                    tracing::debug!("Blog {slug} not found");
                } else {
                    tracing::error!("Error fetching blog {slug}: {err}");
                }
                None
            }
        }
    }
}
