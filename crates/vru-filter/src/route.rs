//! Navigation gate for the site routes.
//!
//! The filter page and the preview page are only rendered when the arrival
//! carries the one-time login hop flag. Anything else is sent to the login
//! page, which remembers where the visitor was heading.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Known site routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Landing,
    Description,
    Research,
    Contributors,
    Login,
    CreateAccount,
    Dataset,
    Preview,
    Loading,
}

impl Route {
    pub const ALL: [Self; 9] = [
        Self::Landing,
        Self::Description,
        Self::Research,
        Self::Contributors,
        Self::Login,
        Self::CreateAccount,
        Self::Dataset,
        Self::Preview,
        Self::Loading,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Description => "/description",
            Self::Research => "/research",
            Self::Contributors => "/contributors",
            Self::Login => "/login",
            Self::CreateAccount => "/create-account",
            Self::Dataset => "/dataset",
            Self::Preview => "/preview",
            Self::Loading => "/loading",
        }
    }

    /// Match a request path. Unknown paths fall back to [`Route::Landing`].
    ///
    /// A trailing slash and a query string are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let wanted = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .iter()
            .copied()
            .find(|route| route.path() == wanted)
            .unwrap_or(Self::Landing)
    }

    /// Routes that must be reached straight from the login page.
    pub fn requires_login_hop(&self) -> bool {
        matches!(self, Self::Dataset | Self::Preview)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the router knows about how the visitor arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arrival {
    /// Set once by the login page when it navigates onward.
    pub from_login: bool,
}

impl Arrival {
    pub fn from_login() -> Self {
        Self { from_login: true }
    }
}

/// Decision for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect {
        to: Route,
        /// Route the visitor asked for, to resume after logging in.
        return_to: Option<Route>,
    },
}

/// Decide what to show for `path`.
pub fn resolve(path: &str, arrival: Arrival) -> Navigation {
    let route = Route::from_path(path);
    if route.requires_login_hop() && !arrival.from_login {
        Navigation::Redirect {
            to: Route::Login,
            return_to: Some(route),
        }
    } else {
        Navigation::Render(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_landing() {
        assert_eq!(Route::from_path("/nowhere"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/research/"), Route::Research);
        assert_eq!(Route::from_path("/preview?id=3"), Route::Preview);
    }

    #[test]
    fn test_protected_routes_redirect_without_hop() {
        assert_eq!(
            resolve("/dataset", Arrival::default()),
            Navigation::Redirect {
                to: Route::Login,
                return_to: Some(Route::Dataset),
            }
        );
        assert_eq!(
            resolve("/dataset", Arrival::from_login()),
            Navigation::Render(Route::Dataset)
        );
    }

    #[test]
    fn test_public_routes_always_render() {
        for route in Route::ALL.iter().filter(|route| !route.requires_login_hop()) {
            assert_eq!(
                resolve(route.path(), Arrival::default()),
                Navigation::Render(*route)
            );
        }
    }
}
