use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::upload::Upload;
use crate::wire;

/// Where a manuscript sits in the editorial workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManuscriptStatus {
    Submitted,
    UnderReview,
    Reviewed,
    RevisionRequested,
    Accepted,
    Rejected,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ManuscriptStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ManuscriptStatus::Submitted => "Submitted",
            ManuscriptStatus::UnderReview => "Under review",
            ManuscriptStatus::Reviewed => "Reviewed",
            ManuscriptStatus::RevisionRequested => "Revision requested",
            ManuscriptStatus::Accepted => "Accepted",
            ManuscriptStatus::Rejected => "Rejected",
            ManuscriptStatus::Unknown => "Unknown",
        }
    }

    /// Waiting on an editor: needs a reviewer, or has a review to decide on.
    pub fn awaits_editor(&self) -> bool {
        matches!(self, ManuscriptStatus::Submitted | ManuscriptStatus::Reviewed)
    }

    /// A reviewer can still submit a review.
    pub fn awaits_review(&self) -> bool {
        matches!(self, ManuscriptStatus::UnderReview)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, ManuscriptStatus::Accepted | ManuscriptStatus::Rejected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manuscript {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub summary: String,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub journal_id: Option<i64>,
    #[serde(default)]
    pub journal_title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub reviewer_id: Option<i64>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    /// Storage path of the uploaded manuscript file.
    #[serde(default)]
    pub file: Option<String>,
    pub status: ManuscriptStatus,
    #[serde(default)]
    pub review_comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Author submission, sent as multipart with the manuscript file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ManuscriptSubmission {
    pub journal_id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 5, message = "Title must be at least 5 characters"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 50, message = "Abstract must be at least 50 characters"))
    )]
    pub summary: String,
    pub keywords: Option<String>,
    pub file: Upload,
}

/// Editor assigns a reviewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewerAssignment {
    pub reviewer_id: i64,
}

/// A reviewer's recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Accept,
    Revise,
    Reject,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [
        Recommendation::Accept,
        Recommendation::Revise,
        Recommendation::Reject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Accept => "accept",
            Recommendation::Revise => "revise",
            Recommendation::Reject => "reject",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Accept => "Accept",
            Recommendation::Revise => "Request revision",
            Recommendation::Reject => "Reject",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReviewSubmission {
    pub recommendation: Recommendation,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 20, message = "Comments must be at least 20 characters"))
    )]
    pub comments: String,
}

/// Final editorial decision. Only terminal or revision states are valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorialDecision {
    pub status: ManuscriptStatus,
}

impl EditorialDecision {
    pub fn new(status: ManuscriptStatus) -> Result<Self, crate::AppError> {
        match status {
            ManuscriptStatus::Accepted
            | ManuscriptStatus::Rejected
            | ManuscriptStatus::RevisionRequested => Ok(Self { status }),
            other => Err(crate::AppError::bad_request(format!(
                "{} is not a decision",
                other.label()
            ))),
        }
    }
}
