//! Translation lookup for user-facing strings.
//!
//! Components never hard-code display text; they ask a [`Translate`]
//! implementation for a key. The bundled [`Catalog`] carries the English
//! strings, and any closure `Fn(&str) -> String` works as a drop-in.

use std::collections::HashMap;

use dioxus::prelude::*;

pub mod key {
    macro_rules! editor_key {
        ($name:ident, $suffix:literal) => {
            pub const $name: &str =
                concat!("admin.inbound.inbound_routes.editor_dialog.", $suffix);
        };
    }

    editor_key!(TITLE, "title");
    editor_key!(TYPE_LABEL, "type.label");
    editor_key!(EMAIL_TITLE, "email.title");
    editor_key!(EMAIL_LABEL, "email.label");
    editor_key!(EMAIL_FORMAT_ERROR, "email_format.error");
    editor_key!(DUPLICATE_EMAIL_ERROR, "duplicate_email.error");
    editor_key!(QUEUE_TITLE, "select_omni_queue.title");
    editor_key!(QUEUE_LABEL, "select_omni_queue.label");
    editor_key!(CAMPAIGN_TITLE, "select_campaign.title");
    editor_key!(CAMPAIGN_LABEL, "select_campaign.label");
    editor_key!(NO_OPTIONS, "select.no_options");
    editor_key!(NO_MATCHES, "select.no_matches");

    pub const LIST_TITLE: &str = "admin.inbound.inbound_routes.title";
    pub const LIST_EMPTY: &str = "admin.inbound.inbound_routes.empty";
    pub const ADD_ROUTE: &str = "admin.inbound.inbound_routes.add.button";
    pub const EDIT_ROUTE: &str = "admin.inbound.inbound_routes.edit.button";
    pub const COLUMN_EMAIL: &str = "admin.inbound.inbound_routes.column.email";
    pub const COLUMN_QUEUE: &str = "admin.inbound.inbound_routes.column.queue";
    pub const COLUMN_CAMPAIGN: &str = "admin.inbound.inbound_routes.column.campaign";
    pub const EMAIL_TYPE: &str = "admin.inbound.inbound_routes.type.email";

    pub const CANCEL: &str = "generic.cancel.button";
    pub const OK: &str = "button_ok";
    pub const SAVING: &str = "generic.saving";
    pub const DISMISS: &str = "generic.dismiss.button";
}

pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Key to display-string table. Unknown keys translate to themselves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn english() -> Self {
        Self::new([
            (key::TITLE, "Inbound Route"),
            (key::TYPE_LABEL, "Type"),
            (key::EMAIL_TITLE, "Email address"),
            (key::EMAIL_LABEL, "name@example.com"),
            (key::EMAIL_FORMAT_ERROR, "Please enter a valid email address"),
            (
                key::DUPLICATE_EMAIL_ERROR,
                "This email address is already routed",
            ),
            (key::QUEUE_TITLE, "Queue"),
            (key::QUEUE_LABEL, "Select a queue"),
            (key::CAMPAIGN_TITLE, "Campaign"),
            (key::CAMPAIGN_LABEL, "Select a campaign"),
            (key::NO_OPTIONS, "No options"),
            (key::NO_MATCHES, "No matches found"),
            (key::LIST_TITLE, "Inbound Routes"),
            (key::LIST_EMPTY, "No inbound routes configured"),
            (key::ADD_ROUTE, "Add Route"),
            (key::EDIT_ROUTE, "Edit"),
            (key::COLUMN_EMAIL, "Email"),
            (key::COLUMN_QUEUE, "Queue"),
            (key::COLUMN_CAMPAIGN, "Campaign"),
            (key::EMAIL_TYPE, "Email"),
            (key::CANCEL, "Cancel"),
            (key::OK, "OK"),
            (key::SAVING, "Saving..."),
            (key::DISMISS, "Dismiss"),
        ])
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .map(|value| value.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

/// App-wide translation context, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct I18n {
    inner: Signal<Catalog>,
}

impl I18n {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Signal::new(catalog),
        }
    }
}

impl Translate for I18n {
    fn translate(&self, key: &str) -> String {
        self.inner.read().translate(key)
    }
}
