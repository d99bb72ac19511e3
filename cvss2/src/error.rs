#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid {metric} code: {code:?}")]
    InvalidCode { metric: &'static str, code: String },
}

impl Error {
    pub fn invalid_code(metric: &'static str, code: impl Into<String>) -> Self {
        Self::InvalidCode {
            metric,
            code: code.into(),
        }
    }
}
