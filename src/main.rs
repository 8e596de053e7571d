use std::sync::{Arc, Mutex};

use anyhow::Context;
use reqwest::cookie::Jar;
use reqwest::Url;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::contact::application::use_cases::submit_contact::{
    ISubmitContactUseCase, SubmitContactUseCase,
};
use portfolio_client::contact::domain::entities::ContactSubmission;
use portfolio_client::content::application::use_cases::{
    fetch_blog::{FetchBlogUseCase, IFetchBlogUseCase},
    fetch_blogs::{FetchBlogsUseCase, IFetchBlogsUseCase},
    fetch_project::{FetchProjectUseCase, IFetchProjectUseCase},
    fetch_projects::{FetchProjectsUseCase, IFetchProjectsUseCase},
};
use portfolio_client::gateway::adapter::outgoing::cookie_credentials::CookieJarCredentials;
use portfolio_client::gateway::adapter::outgoing::reqwest_gateway::ReqwestGateway;
use portfolio_client::gateway::config::GatewayConfig;
use portfolio_client::profile::application::services::skill_grouping::group_by_category;
use portfolio_client::profile::application::use_cases::{
    fetch_education::{FetchEducationUseCase, IFetchEducationUseCase},
    fetch_home_skills::{FetchHomeSkillsUseCase, IFetchHomeSkillsUseCase},
    fetch_skills::{FetchSkillsUseCase, IFetchSkillsUseCase},
};
use portfolio_client::rotator::autoplay::Autoplay;
use portfolio_client::rotator::ticker::{SkillTicker, TICK_INTERVAL};
use portfolio_client::view::detail::{DetailOutcome, DetailView};

/// Every typed API operation the site's views pull from, behind one handle.
#[derive(Clone)]
pub struct ClientState {
    pub fetch_projects_use_case: Arc<dyn IFetchProjectsUseCase + Send + Sync>,
    pub fetch_project_use_case: Arc<dyn IFetchProjectUseCase + Send + Sync>,
    pub fetch_blogs_use_case: Arc<dyn IFetchBlogsUseCase + Send + Sync>,
    pub fetch_blog_use_case: Arc<dyn IFetchBlogUseCase + Send + Sync>,
    pub fetch_skills_use_case: Arc<dyn IFetchSkillsUseCase + Send + Sync>,
    pub fetch_home_skills_use_case: Arc<dyn IFetchHomeSkillsUseCase + Send + Sync>,
    pub fetch_education_use_case: Arc<dyn IFetchEducationUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn ISubmitContactUseCase + Send + Sync>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env();
    info!("API base resolved to {}", config.base_url);

    // The demo runs outside a browser, so the base must be a full origin.
    let origin: Url = config
        .base_url
        .parse()
        .context("API base URL must be absolute, set PORTFOLIO_API_BASE_URL")?;

    let jar = Arc::new(Jar::default());
    let credentials = Arc::new(CookieJarCredentials::new(Arc::clone(&jar), origin));
    let gateway = Arc::new(ReqwestGateway::new(config, jar, credentials)?);

    let state = ClientState {
        fetch_projects_use_case: Arc::new(FetchProjectsUseCase::new(Arc::clone(&gateway))),
        fetch_project_use_case: Arc::new(FetchProjectUseCase::new(Arc::clone(&gateway))),
        fetch_blogs_use_case: Arc::new(FetchBlogsUseCase::new(Arc::clone(&gateway))),
        fetch_blog_use_case: Arc::new(FetchBlogUseCase::new(Arc::clone(&gateway))),
        fetch_skills_use_case: Arc::new(FetchSkillsUseCase::new(Arc::clone(&gateway))),
        fetch_home_skills_use_case: Arc::new(FetchHomeSkillsUseCase::new(Arc::clone(&gateway))),
        fetch_education_use_case: Arc::new(FetchEducationUseCase::new(Arc::clone(&gateway))),
        submit_contact_use_case: Arc::new(SubmitContactUseCase::new(gateway)),
    };

    // Pull the home page's data the way the views do, in parallel.
    let (projects, home_skills) = futures::join!(
        state.fetch_projects_use_case.execute(),
        state.fetch_home_skills_use_case.execute(),
    );

    info!("Fetched {} projects", projects.len());
    for project in projects.iter().take(3) {
        info!("  {} ({})", project.title, project.slug);
    }

    if let Some(first) = projects.first() {
        let mut detail = DetailView::new();
        detail.begin(first.slug.clone());
        detail.resolve(state.fetch_project_use_case.execute(&first.slug).await);
        match detail.outcome() {
            DetailOutcome::Found(project) => info!("Detail view ready: {}", project.title),
            DetailOutcome::RedirectToList => info!("Detail absent, redirecting to the list"),
            DetailOutcome::Loading => {}
        }
    }

    let blogs = state.fetch_blogs_use_case.execute().await;
    info!("Fetched {} blog posts", blogs.len());
    if let Some(first) = blogs.first() {
        if let Some(post) = state.fetch_blog_use_case.execute(&first.slug).await {
            info!(
                "  {} has {} gallery images",
                post.title,
                post.gallery_images().len()
            );
        }
    }

    // The about view's data, concurrently like the home fetches.
    let (skills, education) = futures::join!(
        state.fetch_skills_use_case.execute(),
        state.fetch_education_use_case.execute(),
    );
    match skills {
        Ok(skills) => info!("About view groups: {}", group_by_category(&skills).len()),
        Err(err) => info!("{err}"),
    }
    match education {
        Ok(entries) => {
            for entry in entries.iter().take(3) {
                info!("  {} ({})", entry.degree, entry.period_label());
            }
        }
        Err(err) => info!("{err}"),
    }

    // An empty submission stops at validation, nothing leaves the client.
    if let Err(err) = state
        .submit_contact_use_case
        .execute(ContactSubmission::default())
        .await
    {
        info!("Contact dry run rejected as expected: {err}");
    }

    match home_skills {
        Ok(skills) => {
            info!("Fetched {} home skills", skills.len());
            for group in group_by_category(&skills) {
                info!("  {}: {} skills", group.title, group.skills.len());
            }

            let ticker = Arc::new(Mutex::new(SkillTicker::new(skills)));
            if let Some(autoplay) = Autoplay::start_ticker(Arc::clone(&ticker), TICK_INTERVAL) {
                tokio::time::sleep(TICK_INTERVAL * 2).await;
                if let Ok(ticker) = ticker.lock() {
                    let names: Vec<&str> =
                        ticker.visible().iter().map(|s| s.name.as_str()).collect();
                    info!("Ticker now showing: {}", names.join(", "));
                }
                autoplay.cancel();
            }
        }
        Err(err) => info!("{err}"),
    }

    Ok(())
}
