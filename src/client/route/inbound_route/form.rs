//! Editable state of the inbound route editor dialog.
//!
//! A `FormState` is built once when the dialog mounts, from the route handed
//! in by the parent (edit) or from nothing (create), and is dropped with the
//! dialog. It only changes through user input, validation and submission.

use std::collections::HashMap;

use crate::model::inbound_route::{find_reference, InboundRouteDto, ReferenceItemDto};

use super::submission::SubmissionState;

/// Whether the dialog creates a new route or reassigns an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Edit,
}

/// Fields that can carry an inline error message.
///
/// `Queue` and `Campaign` are reserved; nothing populates them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Queue,
    Campaign,
}

/// Inline error messages keyed by field. An empty message counts as no error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(HashMap<FormField, String>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Edit mode was requested for a route that has no id
    MissingRouteId,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRouteId => write!(f, "Cannot edit an inbound route without a route id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: Mode,
    route_id: Option<i32>,
    email: String,
    selected_campaign_id: Option<i32>,
    selected_queue_id: Option<i32>,
    errors: FormErrors,
    pub(super) submission: SubmissionState,
}

impl FormState {
    /// Empty form for a new route
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            route_id: None,
            email: String::new(),
            selected_campaign_id: None,
            selected_queue_id: None,
            errors: FormErrors::default(),
            submission: SubmissionState::Idle,
        }
    }

    /// Form pre-filled from an existing route
    ///
    /// # Returns
    /// - `Ok(FormState)` - Form in edit mode carrying the route id
    /// - `Err(FormError::MissingRouteId)` - The route has no id to send back
    pub fn edit(route: &InboundRouteDto) -> Result<Self, FormError> {
        let route_id = route.route_id.ok_or(FormError::MissingRouteId)?;

        Ok(Self {
            mode: Mode::Edit,
            route_id: Some(route_id),
            ..Self::prefilled(route)
        })
    }

    /// Form for the given mode, seeded from the parent's route if one was passed
    ///
    /// In create mode a passed route only pre-fills the fields; its id is dropped
    /// and never sent.
    pub fn from_props(mode: Mode, route: Option<&InboundRouteDto>) -> Result<Self, FormError> {
        match (mode, route) {
            (Mode::Edit, Some(route)) => Self::edit(route),
            (Mode::Edit, None) => Err(FormError::MissingRouteId),
            (Mode::Create, Some(route)) => Ok(Self::prefilled(route)),
            (Mode::Create, None) => Ok(Self::create()),
        }
    }

    fn prefilled(route: &InboundRouteDto) -> Self {
        Self {
            email: route.email.clone(),
            selected_campaign_id: route.campaign_id,
            selected_queue_id: route.queue_id,
            ..Self::create()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn route_id(&self) -> Option<i32> {
        self.route_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn selected_campaign_id(&self) -> Option<i32> {
        self.selected_campaign_id
    }

    pub fn selected_queue_id(&self) -> Option<i32> {
        self.selected_queue_id
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut FormErrors {
        &mut self.errors
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// The email is only editable while creating a route
    pub fn email_editable(&self) -> bool {
        self.mode == Mode::Create
    }

    /// Replace the email and drop any email error until it is validated again
    ///
    /// # Returns
    /// - `true` - The email was updated
    /// - `false` - The form is in edit mode, where the email is read-only
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        if !self.email_editable() {
            return false;
        }

        self.email = email.into();
        self.errors.clear(FormField::Email);
        true
    }

    /// Select a campaign from an option value
    ///
    /// `options` is the loaded campaign list, or `None` while it is still loading.
    /// Values that are not integers, or ids missing from a loaded list, are ignored.
    pub fn select_campaign(&mut self, value: &str, options: Option<&[ReferenceItemDto]>) -> bool {
        match parse_option(value, options) {
            Some(id) => {
                self.selected_campaign_id = Some(id);
                true
            }
            None => false,
        }
    }

    /// Select a queue from an option value, with the same rules as `select_campaign`
    pub fn select_queue(&mut self, value: &str, options: Option<&[ReferenceItemDto]>) -> bool {
        match parse_option(value, options) {
            Some(id) => {
                self.selected_queue_id = Some(id);
                true
            }
            None => false,
        }
    }

    /// Drop a campaign carried in from the route once the loaded list lacks it
    ///
    /// # Returns
    /// - `true` - The selection was cleared
    /// - `false` - Nothing selected, or the selected id is in `options`
    pub fn retain_known_campaign(&mut self, options: &[ReferenceItemDto]) -> bool {
        retain_known(&mut self.selected_campaign_id, options)
    }

    /// Queue counterpart of `retain_known_campaign`
    pub fn retain_known_queue(&mut self, options: &[ReferenceItemDto]) -> bool {
        retain_known(&mut self.selected_queue_id, options)
    }
}

fn retain_known(selected: &mut Option<i32>, options: &[ReferenceItemDto]) -> bool {
    if selected.is_some() && find_reference(options, *selected).is_none() {
        *selected = None;
        return true;
    }
    false
}

fn parse_option(value: &str, options: Option<&[ReferenceItemDto]>) -> Option<i32> {
    let id = value.trim().parse::<i32>().ok()?;

    match options {
        Some(options) if !options.iter().any(|option| option.id == id) => None,
        _ => Some(id),
    }
}
