pub mod credential_provider;
pub mod http_gateway;

pub use credential_provider::CredentialProvider;
pub use http_gateway::{GatewayError, HttpGateway};
