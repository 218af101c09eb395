//! Service identity resolved from build packaging metadata.

/// Name and version identifying the running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Package name.
    pub name: &'static str,
    /// Package version.
    pub version: &'static str,
}

impl ServiceInfo {
    /// Create an identity from explicit values.
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// Identity of this build, taken from the package manifest at compile time.
    pub const fn from_build() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Greeting returned by the root endpoint.
    pub fn greeting(&self) -> String {
        format!("{} is running!", self.name)
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::from_build()
    }
}

impl std::fmt::Display for ServiceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
