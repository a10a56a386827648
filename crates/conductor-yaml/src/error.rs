use thiserror::Error;

/// Failures raised while turning an authored step into a command.
///
/// All of these are authoring errors: none is retryable and none yields a
/// partial command.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unknown navigation target: {0}")]
    UnrecognizedAction(String),

    #[error("No mapping provided for {0}")]
    NoMapping(String),

    #[error("No start point configured for swipe action")]
    MissingStartPoint,

    #[error("No end point configured for swipe action")]
    MissingEndPoint,

    #[error("Malformed point '{0}': expected two comma-separated integers")]
    MalformedPoint(String),

    #[error("Unknown selector type: {0}")]
    UnknownSelectorType(String),

    #[error("Failed to decode step: {0}")]
    Decode(#[from] serde_yaml::Error),
}
