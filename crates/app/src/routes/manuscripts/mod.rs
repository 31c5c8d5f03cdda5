pub mod detail;
pub mod list;
pub mod submit;

use shared_types::{Manuscript, ManuscriptStatus, RoleCode};

/// Workflow steps the current user may take on a manuscript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkflowActions {
    pub assign_reviewer: bool,
    pub record_decision: bool,
    pub submit_review: bool,
}

impl WorkflowActions {
    pub fn for_user(role: Option<RoleCode>, user_id: Option<i64>, manuscript: &Manuscript) -> Self {
        let editorial = matches!(role, Some(RoleCode::Admin | RoleCode::Editor));
        let assigned_here = match (manuscript.reviewer_id, user_id) {
            (Some(reviewer), Some(me)) => reviewer == me,
            // Reviewer lists are already scoped to the caller's assignments.
            (None, _) => true,
            (Some(_), None) => false,
        };
        Self {
            assign_reviewer: editorial && manuscript.status == ManuscriptStatus::Submitted,
            record_decision: editorial && manuscript.status == ManuscriptStatus::Reviewed,
            submit_review: role == Some(RoleCode::Reviewer)
                && manuscript.status.awaits_review()
                && assigned_here,
        }
    }

    pub fn any(&self) -> bool {
        self.assign_reviewer || self.record_decision || self.submit_review
    }
}
