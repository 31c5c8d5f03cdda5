use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Privilege class of an account, as encoded by the API's `user_type`.
///
/// The wire encoding is a single digit, sent as either a string or a number:
/// `0` admin, `1` editor, `2` author, `3` reviewer, `4` subscriber, `5` publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCode {
    Admin,
    Editor,
    Author,
    Reviewer,
    Subscriber,
    Publisher,
}

/// Every role in wire-code order.
pub const ALL_ROLES: [RoleCode; 6] = [
    RoleCode::Admin,
    RoleCode::Editor,
    RoleCode::Author,
    RoleCode::Reviewer,
    RoleCode::Subscriber,
    RoleCode::Publisher,
];

impl RoleCode {
    /// Parse a wire code. Surrounding whitespace is ignored; anything outside
    /// the closed set is `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(RoleCode::Admin),
            "1" => Some(RoleCode::Editor),
            "2" => Some(RoleCode::Author),
            "3" => Some(RoleCode::Reviewer),
            "4" => Some(RoleCode::Subscriber),
            "5" => Some(RoleCode::Publisher),
            _ => None,
        }
    }

    /// Wire code sent to the API.
    pub fn code(&self) -> &'static str {
        match self {
            RoleCode::Admin => "0",
            RoleCode::Editor => "1",
            RoleCode::Author => "2",
            RoleCode::Reviewer => "3",
            RoleCode::Subscriber => "4",
            RoleCode::Publisher => "5",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            RoleCode::Admin => "Admin",
            RoleCode::Editor => "Editor",
            RoleCode::Author => "Author",
            RoleCode::Reviewer => "Reviewer",
            RoleCode::Subscriber => "Subscriber",
            RoleCode::Publisher => "Publisher",
        }
    }

    /// Roles a visitor may pick on the public sign-up form.
    /// Staff roles are only granted by an admin.
    pub fn self_registrable(&self) -> bool {
        matches!(
            self,
            RoleCode::Author | RoleCode::Reviewer | RoleCode::Subscriber
        )
    }

    /// Reviewers must attach a resume when they sign up.
    pub fn requires_resume(&self) -> bool {
        matches!(self, RoleCode::Reviewer)
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RoleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for RoleCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = crate::wire::string_or_number(deserializer)?;
        RoleCode::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown role code {raw:?}")))
    }
}
