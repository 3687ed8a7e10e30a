use crate::{
    client::i18n::{key, Translate},
    model::inbound_route::is_valid_email,
};

use super::{
    form::{FormField, FormState},
    submission::SubmissionState,
};

impl FormState {
    /// Email format check, run when the email input loses focus
    ///
    /// An empty email is left alone; required fields are only enforced by
    /// `can_submit`.
    pub fn validate_email(&mut self, translate: &dyn Translate) {
        if self.email().is_empty() {
            return;
        }

        if is_valid_email(self.email()) {
            self.errors_mut().clear(FormField::Email);
        } else {
            let message = translate.translate(key::EMAIL_FORMAT_ERROR);
            self.errors_mut().set(FormField::Email, message);
        }
    }

    /// Whether the confirm action is enabled
    pub fn can_submit(&self) -> bool {
        !self.email().is_empty()
            && self.selected_campaign_id().is_some()
            && self.selected_queue_id().is_some()
            && !self.errors().has(FormField::Email)
            && !matches!(
                self.submission(),
                SubmissionState::Submitting | SubmissionState::Succeeded
            )
    }
}
