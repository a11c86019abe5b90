//! Client-side route guard configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Navigation rules evaluated by the route guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Where unauthenticated navigation is sent.
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Safe default when a role has no home route.
    #[serde(default = "default_fallback_route")]
    pub fallback_route: String,
    /// Routes reachable without a session. A trailing `/*` allows the subtree.
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,
    /// Public routes that authenticated users are bounced away from.
    #[serde(default = "default_guest_only_routes")]
    pub guest_only_routes: Vec<String>,
    /// Role requirements by path prefix.
    #[serde(default = "default_rules")]
    pub rules: Vec<RouteRuleConfig>,
    /// Home route per role name (`candidate`, `hr`, `admin`).
    #[serde(default = "default_home_routes")]
    pub home_routes: HashMap<String, String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_route: default_login_route(),
            fallback_route: default_fallback_route(),
            public_routes: default_public_routes(),
            guest_only_routes: default_guest_only_routes(),
            rules: default_rules(),
            home_routes: default_home_routes(),
        }
    }
}

/// A single role requirement for a path prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRuleConfig {
    /// Path prefix, matched on segment boundaries.
    pub prefix: String,
    /// Role names allowed under the prefix.
    pub roles: Vec<String>,
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_fallback_route() -> String {
    "/".to_string()
}

fn default_public_routes() -> Vec<String> {
    vec![
        "/".to_string(),
        "/login".to_string(),
        "/register".to_string(),
        "/positions/*".to_string(),
    ]
}

fn default_guest_only_routes() -> Vec<String> {
    vec!["/login".to_string(), "/register".to_string()]
}

fn default_rules() -> Vec<RouteRuleConfig> {
    vec![
        RouteRuleConfig {
            prefix: "/candidate".to_string(),
            roles: vec!["candidate".to_string()],
        },
        RouteRuleConfig {
            prefix: "/hr".to_string(),
            roles: vec!["hr".to_string(), "admin".to_string()],
        },
        RouteRuleConfig {
            prefix: "/admin".to_string(),
            roles: vec!["admin".to_string()],
        },
    ]
}

fn default_home_routes() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("candidate".to_string(), "/candidate/dashboard".to_string());
    map.insert("hr".to_string(), "/hr/dashboard".to_string());
    map.insert("admin".to_string(), "/admin/dashboard".to_string());
    map
}
