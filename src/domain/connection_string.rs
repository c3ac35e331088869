use super::DatabaseHost;

pub const PORT: u16 = 27017;
pub const SERVER_SELECTION_TIMEOUT_MS: u64 = 2000;
pub const AUTH_SOURCE: &str = "admin";

/// The descriptor handed to the MongoDB driver.
///
/// Rendered once from the host as
/// `mongodb://<host>:27017?serverSelectionTimeoutMS=2000&authSource=admin`
/// and never mutated afterwards. The host is taken verbatim, so it may carry
/// `user:password@`; log it through [`ConnectionString::redacted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    host: DatabaseHost,
    rendered: String,
}

impl ConnectionString {
    pub fn new(host: DatabaseHost) -> ConnectionString {
        let rendered = render(host.as_ref(), "");
        Self { host, rendered }
    }

    pub fn host(&self) -> &DatabaseHost {
        &self.host
    }

    pub fn auth_source(&self) -> &str {
        AUTH_SOURCE
    }

    /// The same descriptor with the `/` the Rust driver requires between the
    /// host list and the options.
    pub fn driver_uri(&self) -> String {
        render(self.host.as_ref(), "/")
    }

    /// Masks any userinfo in the host.
    pub fn redacted(&self) -> String {
        match self.host.as_ref().rsplit_once('@') {
            Some((_, hosts)) => render(&format!("***@{}", hosts), ""),
            None => self.rendered.clone(),
        }
    }
}

fn render(host: &str, path: &str) -> String {
    format!(
        "mongodb://{}:{}{}?serverSelectionTimeoutMS={}&authSource={}",
        host, PORT, path, SERVER_SELECTION_TIMEOUT_MS, AUTH_SOURCE
    )
}

impl AsRef<str> for ConnectionString {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rendered.fmt(f)
    }
}
