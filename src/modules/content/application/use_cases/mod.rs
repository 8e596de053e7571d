pub mod fetch_blog;
pub mod fetch_blogs;
pub mod fetch_project;
pub mod fetch_projects;

pub use fetch_blog::{FetchBlogUseCase, IFetchBlogUseCase};
pub use fetch_blogs::{FetchBlogsUseCase, IFetchBlogsUseCase};
pub use fetch_project::{FetchProjectUseCase, IFetchProjectUseCase};
pub use fetch_projects::{FetchProjectsUseCase, IFetchProjectsUseCase};
