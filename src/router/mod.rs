//! Route Table
//!
//! Static route definitions and path resolution for the dashboard. The
//! table is built once at startup, never mutated, and injected through
//! context so tests can construct their own instances.

use thiserror::Error;

pub mod guard;

/// Route path constants
pub mod paths {
    pub const ROOT: &str = "/";
    pub const HOME: &str = "/home";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ALARM_RECORDS: &str = "/alarmrecords";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
}

/// A single named route and its metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    /// Navigation to this route is gated on a stored session token
    pub requires_auth: bool,
}

impl RouteEntry {
    pub const fn new(path: &'static str, name: &'static str, requires_auth: bool) -> Self {
        Self {
            path,
            name,
            requires_auth,
        }
    }
}

/// Errors detected while building a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),

    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
}

/// Immutable mapping from URL paths to named routes.
///
/// The root path is not a route of its own; it unconditionally redirects
/// to `root_redirect`.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    root_redirect: &'static str,
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths or names.
    pub fn new(
        entries: Vec<RouteEntry>,
        root_redirect: &'static str,
    ) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            for other in &entries[i + 1..] {
                if entry.path == other.path {
                    return Err(RouteTableError::DuplicatePath(other.path));
                }
                if entry.name == other.name {
                    return Err(RouteTableError::DuplicateName(other.name));
                }
            }
        }

        Ok(Self {
            entries,
            root_redirect,
        })
    }

    /// Resolve a path to its route entry, if any. A trailing slash is
    /// ignored; unmatched paths resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Redirect target for a path. Only the root path redirects.
    pub fn redirect_target(&self, path: &str) -> Option<&'static str> {
        (path == paths::ROOT).then_some(self.root_redirect)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl Default for RouteTable {
    /// The application's route table.
    fn default() -> Self {
        Self::new(
            vec![
                RouteEntry::new(paths::HOME, "Home", false),
                RouteEntry::new(paths::DASHBOARD, "Dashboard", true),
                RouteEntry::new(paths::ALARM_RECORDS, "AlarmRecords", true),
                RouteEntry::new(paths::LOGIN, "Login", false),
                RouteEntry::new(paths::REGISTER, "Register", false),
            ],
            paths::HOME,
        )
        .expect("built-in route table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        let table = RouteTable::default();

        assert_eq!(table.resolve("/home").map(|r| r.name), Some("Home"));
        assert_eq!(
            table.resolve("/dashboard").map(|r| r.name),
            Some("Dashboard")
        );
        assert_eq!(
            table.resolve("/alarmrecords").map(|r| r.name),
            Some("AlarmRecords")
        );
        assert_eq!(table.resolve("/login").map(|r| r.name), Some("Login"));
    }

    #[test]
    fn test_resolve_ignores_trailing_slash() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/dashboard/").map(|r| r.name), Some("Dashboard"));
    }

    #[test]
    fn test_unmatched_path_resolves_to_none() {
        let table = RouteTable::default();
        assert!(table.resolve("/nope").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_only_root_redirects() {
        let table = RouteTable::default();
        assert_eq!(table.redirect_target("/"), Some("/home"));
        assert_eq!(table.redirect_target("/home"), None);
        assert_eq!(table.redirect_target("/dashboard"), None);
    }

    #[test]
    fn test_paths_are_pairwise_distinct() {
        let table = RouteTable::default();
        let entries = table.entries();

        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                assert_ne!(entries[i].path, entries[j].path);
                assert_ne!(entries[i].name, entries[j].name);
            }
        }
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let result = RouteTable::new(
            vec![
                RouteEntry::new("/a", "A", false),
                RouteEntry::new("/a", "B", false),
            ],
            "/a",
        );
        assert_eq!(result, Err(RouteTableError::DuplicatePath("/a")));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let result = RouteTable::new(
            vec![
                RouteEntry::new("/a", "A", false),
                RouteEntry::new("/b", "A", false),
            ],
            "/a",
        );
        assert_eq!(result, Err(RouteTableError::DuplicateName("A")));
    }

    #[test]
    fn test_login_is_a_resolvable_route() {
        // The guard's redirect target must itself resolve, or a redirect
        // would land on the 404 fallback.
        let table = RouteTable::default();
        assert!(table.resolve(paths::LOGIN).is_some());
    }
}
