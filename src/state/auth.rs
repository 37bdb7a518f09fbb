//! Authentication State
//!
//! Credential persistence in browser localStorage. Presence of a stored
//! token is the whole client-side model: no structure, no expiry, no
//! validation. The backend validates the session on every request.

/// localStorage key the login flow writes the session token under
pub const TOKEN_KEY: &str = "token";

/// Explicit credential snapshot handed to the navigation guard.
///
/// Carrying the token as a value keeps the guard a pure function and lets
/// tests build arbitrary credential states without a storage backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Fresh read of the stored token. Absent storage or an absent key
    /// means "not authenticated", never an error.
    pub fn load() -> Self {
        let token = if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                storage.get_item(TOKEN_KEY).ok().flatten()
            } else {
                None
            }
        } else {
            None
        };
        Self::new(token)
    }

    /// A non-empty token counts as authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Persist the session token after a successful login.
pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Remove the session token on logout.
pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_token_is_not_authenticated() {
        assert!(!AuthContext::new(None).is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        assert!(!AuthContext::new(Some(String::new())).is_authenticated());
    }

    #[test]
    fn test_any_stored_token_is_authenticated() {
        let auth = AuthContext::new(Some("abc123".to_string()));
        assert!(auth.is_authenticated());
        assert_eq!(auth.token(), Some("abc123"));
    }

    #[test]
    fn test_default_is_unauthenticated() {
        assert!(!AuthContext::default().is_authenticated());
    }
}
