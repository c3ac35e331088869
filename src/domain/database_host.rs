/// Environment variable holding the MongoDB host name.
const HOST_ENV_VAR: &str = "MONGO_URL";

pub const DEFAULT_HOST: &str = "localhost";

/// The network address of the MongoDB server, without port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseHost(String);

impl DatabaseHost {
    /// Unset and empty values both fall back to [`DEFAULT_HOST`].
    /// Anything else is taken verbatim.
    pub fn parse(value: Option<String>) -> DatabaseHost {
        match value {
            Some(host) if !host.is_empty() => Self(host),
            _ => Self::default(),
        }
    }

    /// Non-unicode values are treated as unset.
    pub fn from_env() -> DatabaseHost {
        Self::parse(std::env::var(HOST_ENV_VAR).ok())
    }
}

impl Default for DatabaseHost {
    fn default() -> Self {
        Self(DEFAULT_HOST.to_string())
    }
}

impl AsRef<str> for DatabaseHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatabaseHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
