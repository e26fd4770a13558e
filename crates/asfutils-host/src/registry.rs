//! Session registry with host-style name patterns.

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use tracing::{debug, warn};

use asfutils_protocols::{HostError, Session, SessionRegistry};

use crate::host::GLOBAL_CONFIG_FILE;
use crate::session::LocalSession;

/// Keyword selecting every session.
const ALL_SESSIONS: &str = "ASF";

/// Prefix marking a regex token.
const REGEX_PREFIX: &str = "r!";

/// Separator of an inclusive name range.
const RANGE_SEPARATOR: &str = "..";

/// Registry of sessions known to the local host.
pub struct LocalRegistry {
    sessions: DashMap<String, Arc<LocalSession>>,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a session, returning the existing one if the name is taken.
    pub fn insert(&self, name: &str) -> Arc<LocalSession> {
        self.sessions
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(LocalSession::new(name)))
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<LocalSession>> {
        self.sessions.get(name).map(|s| s.clone())
    }

    /// Session names in lexical order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sessions.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Register one session per bot config (`*.json`) in `config_dir`.
    ///
    /// The host's own global config file is skipped.
    pub fn discover(&self, config_dir: &Path) -> Result<usize, HostError> {
        let mut found = 0;
        for entry in std::fs::read_dir(config_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if path.file_name().and_then(|n| n.to_str()) == Some(GLOBAL_CONFIG_FILE) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            self.insert(name);
            found += 1;
        }
        debug!(dir = %config_dir.display(), found, "Discovered bot sessions");
        Ok(found)
    }

    fn select(&self, token: &str, names: &[String]) -> Vec<String> {
        if token.eq_ignore_ascii_case(ALL_SESSIONS) {
            return names.to_vec();
        }

        if let Some(pattern) = token.strip_prefix(REGEX_PREFIX) {
            return match Regex::new(pattern) {
                Ok(re) => names.iter().filter(|n| re.is_match(n)).cloned().collect(),
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "Invalid session pattern");
                    Vec::new()
                }
            };
        }

        if let Some((first, last)) = token.split_once(RANGE_SEPARATOR) {
            if self.sessions.contains_key(first) && self.sessions.contains_key(last) {
                return names
                    .iter()
                    .filter(|n| n.as_str() >= first && n.as_str() <= last)
                    .cloned()
                    .collect();
            }
        }

        if self.sessions.contains_key(token) {
            vec![token.to_string()]
        } else {
            Vec::new()
        }
    }
}

impl Default for LocalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry for LocalRegistry {
    fn find(&self, pattern: &str) -> Vec<Arc<dyn Session>> {
        let names = self.names();
        let mut selected: Vec<String> = Vec::new();

        for token in pattern.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            for name in self.select(token, &names) {
                if !selected.contains(&name) {
                    selected.push(name);
                }
            }
        }

        selected
            .iter()
            .filter_map(|name| self.get(name))
            .map(|s| s as Arc<dyn Session>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> LocalRegistry {
        let registry = LocalRegistry::new();
        for name in ["alpha", "bravo", "charlie", "delta"] {
            registry.insert(name);
        }
        registry
    }

    fn found(registry: &LocalRegistry, pattern: &str) -> Vec<String> {
        registry
            .find(pattern)
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[test]
    fn test_exact_and_list() {
        let registry = registry();
        assert_eq!(found(&registry, "bravo"), vec!["bravo"]);
        assert_eq!(found(&registry, "delta, alpha"), vec!["delta", "alpha"]);
        assert!(found(&registry, "echo").is_empty());
    }

    #[test]
    fn test_all_keyword() {
        let registry = registry();
        assert_eq!(found(&registry, "asf").len(), 4);
    }

    #[test]
    fn test_regex_token() {
        let registry = registry();
        assert_eq!(found(&registry, "r!^[ab]"), vec!["alpha", "bravo"]);
        assert!(found(&registry, "r![unclosed").is_empty());
    }

    #[test]
    fn test_range_token() {
        let registry = registry();
        assert_eq!(found(&registry, "bravo..delta"), vec!["bravo", "charlie", "delta"]);
        assert!(found(&registry, "bravo..zulu").is_empty());
    }

    #[test]
    fn test_duplicates_removed() {
        let registry = registry();
        assert_eq!(found(&registry, "alpha,ASF").len(), 4);
        assert_eq!(found(&registry, "alpha,alpha"), vec!["alpha"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let registry = LocalRegistry::new();
        let first = registry.insert("bot");
        let second = registry.insert("bot");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_discover_bot_configs() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("ASF.json"), "{}").unwrap();
        std::fs::write(temp.path().join("bot1.json"), "{}").unwrap();
        std::fs::write(temp.path().join("bot1.db"), "").unwrap();
        std::fs::write(temp.path().join("bot2.json"), "{}").unwrap();

        let registry = LocalRegistry::new();
        assert_eq!(registry.discover(temp.path()).unwrap(), 2);
        assert_eq!(registry.names(), vec!["bot1", "bot2"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let registry = LocalRegistry::new();
        assert!(registry.discover(Path::new("/nonexistent/config")).is_err());
    }
}
