// src/email.rs
//! Email template rendering
//!
//! Templates carry `[placeholder]` tokens. Optional values only replace
//! their token when set and non-empty; the sign-off, sign-up link, image
//! paths and contact address are always filled.

use chrono::{DateTime, Utc};

use crate::config::EmailConfig;
use crate::consts::{CLIENT_SIGN_OFF, EMAIL_IMAGES_PATH, STAFF_SIGN_OFF};
use crate::text::record_title;

/// Values substituted into an email template
#[derive(Debug, Clone, Default)]
pub struct EmailParams {
    pub email_base: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub entity_name: Option<String>,
    pub project_type: Option<String>,
    pub project_year: Option<String>,
    pub link_to_project: Option<String>,
    pub request_description: Option<String>,
    pub request_due_date: Option<DateTime<Utc>>,
    pub send_confirmation_email_body: Option<String>,
    pub is_client: bool,
    pub line_body: Option<String>,
    pub deliverable_title: Option<String>,
    pub approver_name: Option<String>,
    pub link_to_deliverable: Option<String>,
}

impl EmailParams {
    pub fn new(email_base: impl Into<String>) -> Self {
        Self {
            email_base: email_base.into(),
            ..Self::default()
        }
    }
}

/// Frontend URL with exactly one trailing slash appended if missing
pub fn base_url(frontend_url: &str) -> String {
    if frontend_url.ends_with('/') {
        frontend_url.to_string()
    } else {
        format!("{frontend_url}/")
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Fill every placeholder in `params.email_base`
pub fn render(params: &EmailParams, config: &EmailConfig) -> String {
    let url = base_url(&config.frontend_url);
    let mut email = params.email_base.clone();

    let mut replace = |token: &str, value: &str| {
        email = email.replace(token, value);
    };

    if let Some(v) = present(&params.first_name) {
        replace("[userFirstName]", v);
    }
    if let Some(v) = present(&params.last_name) {
        replace("[userLastName]", v);
    }
    if let Some(v) = present(&params.entity_name) {
        replace("[entityName]", v);
    }
    if let Some(v) = present(&params.project_type) {
        replace("[projectType]", &record_title(v));
    }
    if let Some(v) = present(&params.project_year) {
        replace("[projectYear]", v);
    }
    if let Some(v) = present(&params.request_description) {
        replace("[requestDescription]", v);
    }
    if let Some(due) = params.request_due_date {
        replace("[requestDueDate]", &due.format("%Y-%m-%d").to_string());
    }
    let project_link = present(&params.link_to_project).unwrap_or_default();
    if !project_link.is_empty() {
        replace("[linkToProject]", &format!("{url}Project/{project_link}"));
    }
    if let Some(v) = present(&params.send_confirmation_email_body) {
        replace("[sendConfirmationEmailBody]", v);
    }
    replace(
        "[dynamicSignOff]",
        if params.is_client {
            CLIENT_SIGN_OFF
        } else {
            STAFF_SIGN_OFF
        },
    );
    if let Some(v) = present(&params.line_body) {
        replace("[lineBody]", v);
    }
    if let Some(v) = present(&params.deliverable_title) {
        replace("[deliverableTitle]", v);
    }
    if let Some(v) = present(&params.approver_name) {
        replace("[approverName]", v);
    }
    if let Some(v) = present(&params.link_to_deliverable) {
        replace(
            "[linkToDeliverable]",
            &format!("{url}Project/{project_link}/Deliverable/{v}"),
        );
    }
    replace("[linkToSignUpPage]", &url);
    replace(EMAIL_IMAGES_PATH, &format!("{url}emailImages/"));
    replace("[placeholderEmail]", &config.contact_email);

    email
}
