use thiserror::Error;

/// Failures of the lookup services.
///
/// The display text is what the screens show. Underlying transport and decode
/// causes are logged where they happen rather than carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Input could not be turned into a request URL; nothing was sent.
    #[error("Invalid URL")]
    InvalidUrl,

    /// Transport failure, unexpected status code, or undecodable body.
    #[error("Invalid response from server")]
    InvalidResponse,

    /// The server answered 404 for a user lookup.
    #[error("User not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_screen_text() {
        assert_eq!(ServiceError::InvalidUrl.to_string(), "Invalid URL");
        assert_eq!(
            ServiceError::InvalidResponse.to_string(),
            "Invalid response from server"
        );
        assert_eq!(ServiceError::NotFound.to_string(), "User not found");
    }
}
