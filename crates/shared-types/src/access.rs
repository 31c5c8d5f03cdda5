/// How a route relates to the session's authentication flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable in every session state (landing, catalogue, feeds).
    Public,
    /// Only for visitors without a session (sign-in, sign-up).
    PublicOnly,
    /// Requires an authenticated session (every dashboard route).
    Protected,
}

/// Where a refused navigation is sent instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Landing,
    Dashboard,
}

/// Outcome of checking a route against the session.
///
/// A redirect is applied as a history *replace*, so the refused route never
/// enters the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allow,
    Redirect(RedirectTarget),
}

impl RouteAccess {
    /// Decide whether a route of this class may render for the given flag.
    pub fn authorize(self, is_authenticated: bool) -> Authorization {
        match (self, is_authenticated) {
            (RouteAccess::Public, _) => Authorization::Allow,
            (RouteAccess::Protected, true) => Authorization::Allow,
            (RouteAccess::Protected, false) => Authorization::Redirect(RedirectTarget::Landing),
            (RouteAccess::PublicOnly, false) => Authorization::Allow,
            (RouteAccess::PublicOnly, true) => Authorization::Redirect(RedirectTarget::Dashboard),
        }
    }
}
