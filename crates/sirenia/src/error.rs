#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {edge}")]
    MissingEndpoint { edge: String },

    #[error("graph contains a duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("placement refers to a vertex that is not in the graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("placement position for {vertex} is not finite")]
    NonFinitePosition { vertex: String },

    #[error("mass of {vertex} must be finite and positive")]
    InvalidMass { vertex: String },

    #[error("invalid layout option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: &'static str,
    },

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
