use std::env;

/// Environment variable holding the host runtime version by default
pub const RUNTIME_ENV: &str = "RUNTIME_VERSION";

/// Something that can tell which runtime version the host is running
pub trait VersionSource {
    /// Human readable name, used in error messages
    fn name(&self) -> String;
    fn read(&self) -> Option<String>;
}

/// Read the runtime version from an environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    variable: String,
}

impl EnvSource {
    pub fn new<S: Into<String>>(variable: S) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new(RUNTIME_ENV)
    }
}

impl VersionSource for EnvSource {
    fn name(&self) -> String {
        format!("${}", self.variable)
    }

    fn read(&self) -> Option<String> {
        env::var(&self.variable)
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
    }
}
