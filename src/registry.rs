use crate::cli::Profile;
use crate::domain::models::Suite;
use crate::error::RegistryError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Tokens the dispatcher claims before any suite lookup happens.
pub const RESERVED_TOKENS: &[&str] = &[
    "help", "clean", "make", "all", "d", "v", "verbose", "debug",
];

const THREADS_TABLE: &str = include_str!("../profiles/threads.toml");
const USERPROG_TABLE: &str = include_str!("../profiles/userprog.toml");

fn default_project() -> String {
    "pintos".to_string()
}

/// Fixed table of suites for one invocation, ordered by selector.
#[derive(Debug, Deserialize, Clone)]
pub struct Registry {
    #[serde(default = "default_project")]
    pub project: String,
    suites: Vec<Suite>,
}

impl Registry {
    pub fn builtin(profile: Profile) -> Result<Self, RegistryError> {
        match profile {
            Profile::Threads => Self::from_toml(THREADS_TABLE),
            Profile::Userprog => Self::from_toml(USERPROG_TABLE),
        }
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, RegistryError> {
        let registry: Registry = toml::from_str(raw)?;
        registry.validated()
    }

    fn validated(mut self) -> Result<Self, RegistryError> {
        let mut selectors = HashSet::new();
        let mut aliases = HashSet::new();
        for suite in &mut self.suites {
            if suite.selector == 0 {
                return Err(RegistryError::ZeroSelector(suite.name.clone()));
            }
            if !selectors.insert(suite.selector) {
                return Err(RegistryError::DuplicateSelector(suite.selector));
            }
            if suite.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(suite.selector));
            }
            for alias in &suite.aliases {
                if RESERVED_TOKENS.contains(&alias.as_str()) || alias.parse::<i64>().is_ok() {
                    return Err(RegistryError::ReservedAlias(alias.clone()));
                }
                if !aliases.insert(alias.clone()) {
                    return Err(RegistryError::DuplicateAlias(alias.clone()));
                }
            }
            if !suite.location.is_empty() && !suite.location.ends_with('/') {
                suite.location.push('/');
            }
        }
        self.suites.sort_by_key(|s| s.selector);
        Ok(self)
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Numeric tokens match by selector, anything else by alias.
    pub fn resolve(&self, token: &str) -> Option<&Suite> {
        match token.parse::<u32>() {
            Ok(selector) => self.suites.iter().find(|s| s.selector == selector),
            Err(_) => self
                .suites
                .iter()
                .find(|s| s.aliases.iter().any(|a| a == token)),
        }
    }
}
