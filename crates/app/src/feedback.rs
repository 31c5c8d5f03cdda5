use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{use_toast, ToastOptions, Toasts};

use crate::session::{use_session, SessionContext};

/// Toasts the outcome of an API call.
#[derive(Clone, Copy)]
pub struct Feedback {
    toast: Toasts,
    session: SessionContext,
}

impl Feedback {
    pub fn success(&self, message: impl Into<String>) {
        self.toast.success(message.into(), ToastOptions::new());
    }

    /// A rejected token also ends the session; the route guard then sends the
    /// user back to the landing page.
    pub fn error(&self, err: &AppError) {
        if err.is_auth_failure() && self.session.is_authenticated() {
            tracing::warn!("token rejected, signing out");
            let mut session = self.session;
            session.sign_out();
        }
        self.toast.error(err.friendly_message(), ToastOptions::new());
    }
}

pub fn use_feedback() -> Feedback {
    Feedback {
        toast: use_toast(),
        session: use_session(),
    }
}
