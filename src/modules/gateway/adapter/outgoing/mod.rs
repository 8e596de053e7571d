pub mod cookie_credentials;
pub mod reqwest_gateway;

pub use cookie_credentials::{CookieJarCredentials, CSRF_COOKIE};
pub use reqwest_gateway::{ReqwestGateway, CSRF_HEADER};
