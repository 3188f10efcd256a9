//! Route table

use serde::Serialize;
use url::Url;

use crate::error::RouteError;
use crate::view::View;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

const ROUTES: [Route; 7] = [
    Route {
        path: "/",
        view: View::Mission,
    },
    Route {
        path: "/backup",
        view: View::Backup,
    },
    Route {
        path: "/config",
        view: View::Config,
    },
    Route {
        path: "/mission",
        view: View::Mission,
    },
    Route {
        path: "/statistic",
        view: View::Statistic,
    },
    Route {
        path: "/procedure",
        view: View::Procedure,
    },
    Route {
        path: "/screensaver",
        view: View::Screensaver,
    },
];

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: ROUTES.to_vec(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a navigation path to its view
    ///
    /// Accepts `backup`, `/backup/`, `#/backup` and `/backup?tab=1` alike.
    pub fn resolve(&self, path: &str) -> Option<View> {
        let normalized = normalize(path);
        self.routes
            .iter()
            .find(|route| route.path == normalized)
            .map(|route| route.view)
    }

    /// Resolve a full webview location through its hash fragment
    pub fn resolve_location(&self, location: &str) -> Result<View> {
        let url = Url::parse(location)?;
        let fragment = url.fragment().unwrap_or("");

        self.resolve(fragment)
            .ok_or_else(|| RouteError::UnknownPath(normalize(fragment)))
    }

    /// All paths that lead to `view`
    pub fn paths_for(&self, view: View) -> Vec<&'static str> {
        self.routes
            .iter()
            .filter(|route| route.view == view)
            .map(|route| route.path)
            .collect()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_end_matches('/');

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
