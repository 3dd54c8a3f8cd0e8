use crate::role::ColorRole;

/// A theme color configuration that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing main color for {role}")]
    MissingMain { role: ColorRole },
}

impl ConfigurationError {
    /// The role at fault.
    pub fn role(&self) -> ColorRole {
        match self {
            Self::MissingMain { role } => *role,
        }
    }
}

/// Failure anywhere in the load-then-resolve pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme colors JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
