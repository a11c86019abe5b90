//! Route access policy built from configuration.

use std::collections::HashMap;

use talentgate_core::config::GuardConfig;
use talentgate_core::error::AppError;
use talentgate_entity::user::UserRole;

/// Roles allowed under a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    /// Normalized path prefix, matched on segment boundaries.
    pub prefix: String,
    /// Roles allowed under the prefix.
    pub roles: Vec<UserRole>,
}

impl RouteRule {
    /// Whether `path` (normalized) falls under this rule.
    pub fn matches(&self, path: &str) -> bool {
        is_under(path, &self.prefix)
    }

    /// Whether `role` may navigate under this rule.
    pub fn allows(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }
}

/// A public allow-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PublicRoute {
    /// Only this exact path.
    Exact(String),
    /// This path and everything beneath it (`/positions/*`).
    Subtree(String),
}

impl PublicRoute {
    fn parse(entry: &str) -> Self {
        match entry.strip_suffix("/*") {
            Some(base) => Self::Subtree(normalize_path(base)),
            None => Self::Exact(normalize_path(entry)),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(route) => route == path,
            Self::Subtree(base) => is_under(path, base),
        }
    }
}

/// The complete set of navigation rules.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    login_route: String,
    fallback_route: String,
    public: Vec<PublicRoute>,
    guest_only: Vec<String>,
    rules: Vec<RouteRule>,
    home_routes: HashMap<UserRole, String>,
}

impl RoutePolicy {
    /// Builds the policy, rejecting unknown role names.
    pub fn from_config(config: &GuardConfig) -> Result<Self, AppError> {
        let parse_role = |name: &str| {
            name.parse::<UserRole>().map_err(|_| {
                AppError::configuration(format!("Unknown role '{name}' in guard configuration"))
            })
        };

        let mut rules = config
            .rules
            .iter()
            .map(|rule| {
                let roles = rule
                    .roles
                    .iter()
                    .map(|r| parse_role(r))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RouteRule {
                    prefix: normalize_path(&rule.prefix),
                    roles,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        // Longest prefix first so the first match is the most specific.
        rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        let home_routes = config
            .home_routes
            .iter()
            .map(|(role, route)| Ok((parse_role(role)?, route.clone())))
            .collect::<Result<HashMap<_, _>, AppError>>()?;

        Ok(Self {
            login_route: config.login_route.clone(),
            fallback_route: config.fallback_route.clone(),
            public: config
                .public_routes
                .iter()
                .map(|r| PublicRoute::parse(r))
                .collect(),
            guest_only: config
                .guest_only_routes
                .iter()
                .map(|r| normalize_path(r))
                .collect(),
            rules,
            home_routes,
        })
    }

    /// Login route, without query.
    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Whether `path` (normalized) is reachable without a session.
    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|route| route.matches(path))
    }

    /// Whether `path` (normalized) is meant only for signed-out visitors.
    pub fn is_guest_only(&self, path: &str) -> bool {
        self.guest_only.iter().any(|route| route == path)
    }

    /// The most specific rule covering `path` (normalized).
    pub fn rule_for(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Where a user with `role` lands by default.
    pub fn home_route(&self, role: Option<UserRole>) -> &str {
        role.and_then(|r| self.home_routes.get(&r))
            .map(String::as_str)
            .unwrap_or(&self.fallback_route)
    }

    /// Login route carrying `requested` as the post-login destination.
    pub fn login_redirect(&self, requested: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(requested.as_bytes()).collect();
        format!("{}?redirect={encoded}", self.login_route)
    }
}

/// Strips query, fragment and trailing slashes so paths compare by segment.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Whether `path` equals `prefix` or lies beneath it on a segment boundary.
fn is_under(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
