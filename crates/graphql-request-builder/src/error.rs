/// Reasons a request could not be built.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No operation produced any content
    #[error("the request is empty, no operation produced any content")]
    EmptyRequest,
    /// The input nests deeper than [`BuilderConfig::max_depth`](crate::BuilderConfig::max_depth)
    #[error("the request nests deeper than the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
    /// Writing into the request buffer failed
    #[error("writing the request: {0}")]
    Fmt(#[from] std::fmt::Error),
}
