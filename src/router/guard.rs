//! Navigation Guard
//!
//! Decides, on every navigation, whether a route may be entered with the
//! current credential state. The decision itself is a pure function; the
//! `RequireAuth` component wires it into the router.

use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::router::{paths, RouteEntry, RouteTable};
use crate::state::auth::AuthContext;

/// Outcome of a navigation decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the router resolve the target route
    Proceed,
    /// Substitute the given path for the requested one
    Redirect(&'static str),
}

/// Decide whether navigation to `route` may proceed.
///
/// Pure function of the target route and the caller-supplied credential
/// flag. Only the route being navigated to is consulted, never the origin.
pub fn decide(route: &RouteEntry, authenticated: bool) -> Decision {
    if route.requires_auth && !authenticated {
        Decision::Redirect(paths::LOGIN)
    } else {
        Decision::Proceed
    }
}

/// Renders its children and redirects to the login page when the current
/// route requires authentication and no session token is stored.
///
/// This guard improves UX only; the backend still validates every request.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let table = use_context::<RouteTable>().unwrap_or_default();
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let path = location.pathname.get();
        if let Some(route) = table.resolve(&path) {
            // The credential is re-read on every navigation, never cached.
            let auth = AuthContext::load();
            if let Decision::Redirect(target) = decide(route, auth.is_authenticated()) {
                navigate(target, Default::default());
            }
        }
    });

    view! { {children()} }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected() -> RouteEntry {
        RouteEntry::new("/dashboard", "Dashboard", true)
    }

    fn public() -> RouteEntry {
        RouteEntry::new("/home", "Home", false)
    }

    #[test]
    fn test_protected_route_without_credential_redirects_to_login() {
        assert_eq!(
            decide(&protected(), false),
            Decision::Redirect(paths::LOGIN)
        );
    }

    #[test]
    fn test_protected_route_with_credential_proceeds() {
        assert_eq!(decide(&protected(), true), Decision::Proceed);
    }

    #[test]
    fn test_public_route_proceeds_regardless_of_credential() {
        assert_eq!(decide(&public(), false), Decision::Proceed);
        assert_eq!(decide(&public(), true), Decision::Proceed);
    }

    #[test]
    fn test_stored_token_allows_dashboard_navigation() {
        let auth = AuthContext::new(Some("abc123".to_string()));
        let table = RouteTable::default();
        let route = table.resolve("/dashboard").unwrap();

        assert_eq!(decide(route, auth.is_authenticated()), Decision::Proceed);
    }

    #[test]
    fn test_missing_token_redirects_dashboard_navigation() {
        let auth = AuthContext::new(None);
        let table = RouteTable::default();
        let route = table.resolve("/dashboard").unwrap();

        assert_eq!(
            decide(route, auth.is_authenticated()),
            Decision::Redirect("/login")
        );
    }
}
