use thiserror::Error;

/// Client-side login form errors. Never sent to the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unable to reach the server: {0}")]
    Transport(String),

    #[error("{0}")]
    Server(String),
}
