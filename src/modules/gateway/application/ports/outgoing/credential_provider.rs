/// Source of the anti-forgery token attached to state-changing requests.
///
/// The token lives in an ambient, process-wide cookie store; modeling the
/// read as a port lets tests substitute a double instead of a real jar.
pub trait CredentialProvider: Send + Sync {
    /// Current value of the CSRF cookie, if one is set and non-empty.
    fn csrf_token(&self) -> Option<String>;
}
