use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::catalog::{Event, EventStatus, LocationType, RegistrationType, User, EVENT_CATEGORIES};
use crate::wizard::dto::DraftPatch;

/// The four ordered steps of the event-creation flow. Navigation is strictly
/// linear; there is no jumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    BasicInfo,
    Location,
    Tickets,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::BasicInfo, Step::Location, Step::Tickets, Step::Review];

    /// 1-based position, matching the progress indicator.
    pub fn index(self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Location => 2,
            Step::Tickets => 3,
            Step::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::Location => "Location",
            Step::Tickets => "Tickets",
            Step::Review => "Review",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::BasicInfo => "Event details",
            Step::Location => "Where & when",
            Step::Tickets => "Registration settings",
            Step::Review => "Confirm & deploy",
        }
    }

    fn next(self) -> Step {
        match self {
            Step::BasicInfo => Step::Location,
            Step::Location => Step::Tickets,
            Step::Tickets | Step::Review => Step::Review,
        }
    }

    fn previous(self) -> Step {
        match self {
            Step::BasicInfo | Step::Location => Step::BasicInfo,
            Step::Tickets => Step::Location,
            Step::Review => Step::Tickets,
        }
    }
}

/// The single accumulating form record. Fields survive backward navigation;
/// nothing is reset until a deploy completes.
#[derive(Debug, Clone, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub banner_url: String,
    /// As typed in the form, YYYY-MM-DD.
    pub date: String,
    pub time: String,
    pub location_type: LocationType,
    pub location: String,
    pub max_attendees: u32,
    pub registration_type: RegistrationType,
    pub price: f64,
    pub poap_enabled: bool,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            banner_url: String::new(),
            date: String::new(),
            time: String::new(),
            location_type: LocationType::Physical,
            location: String::new(),
            max_attendees: 100,
            registration_type: RegistrationType::Free,
            price: 0.0,
            poap_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

pub(crate) fn parse_draft_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

/// Required-field rules gating advancement out of each step.
pub fn validate_step(step: Step, draft: &EventDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match step {
        Step::BasicInfo => {
            if draft.title.trim().is_empty() {
                errors.push(field_error("title", "Title is required"));
            }
            if draft.description.trim().is_empty() {
                errors.push(field_error("description", "Description is required"));
            }
            if draft.category.trim().is_empty() {
                errors.push(field_error("category", "Select a category"));
            } else if !EVENT_CATEGORIES.contains(&draft.category.as_str()) {
                errors.push(field_error("category", "Pick one of the listed categories"));
            }
        }
        Step::Location => {
            if draft.location.trim().is_empty() {
                errors.push(field_error("location", "Location is required"));
            }
            if draft.date.trim().is_empty() {
                errors.push(field_error("date", "Date is required"));
            } else if parse_draft_date(&draft.date).is_err() {
                errors.push(field_error("date", "Use the YYYY-MM-DD format"));
            }
            if draft.time.trim().is_empty() {
                errors.push(field_error("time", "Time is required"));
            }
        }
        Step::Tickets => {
            if draft.max_attendees < 1 {
                errors.push(field_error("max_attendees", "Allow at least one attendee"));
            }
            if draft.registration_type == RegistrationType::Paid && draft.price <= 0.0 {
                errors.push(field_error("price", "Set a price for paid registration"));
            }
        }
        Step::Review => {}
    }
    errors
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeployError {
    #[error("Complete the review step before deploying")]
    NotAtReview,
    #[error("Deployment already in progress")]
    InProgress,
    #[error("Event draft has missing or invalid fields")]
    Invalid(Vec<FieldError>),
}

/// Ordered multi-step form controller with a terminal simulated deploy.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub step: Step,
    pub draft: EventDraft,
    deploying: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::BasicInfo,
            draft: EventDraft::default(),
            deploying: false,
        }
    }

    pub fn is_deploying(&self) -> bool {
        self.deploying
    }

    /// Merges the provided fields into the draft; absent fields are untouched.
    pub fn apply(&mut self, patch: DraftPatch) {
        let draft = &mut self.draft;
        if let Some(v) = patch.title {
            draft.title = v;
        }
        if let Some(v) = patch.description {
            draft.description = v;
        }
        if let Some(v) = patch.category {
            draft.category = v;
        }
        if let Some(v) = patch.banner_url {
            draft.banner_url = v;
        }
        if let Some(v) = patch.date {
            draft.date = v;
        }
        if let Some(v) = patch.time {
            draft.time = v;
        }
        if let Some(v) = patch.location_type {
            draft.location_type = v;
        }
        if let Some(v) = patch.location {
            draft.location = v;
        }
        if let Some(v) = patch.max_attendees {
            draft.max_attendees = v;
        }
        if let Some(v) = patch.registration_type {
            draft.registration_type = v;
        }
        if let Some(v) = patch.price {
            draft.price = v;
        }
        if let Some(v) = patch.poap_enabled {
            draft.poap_enabled = v;
        }
    }

    /// Advances one step after the current step's rules pass. Clamped at
    /// Review: advancing there is a no-op, never an error.
    pub fn next(&mut self) -> Result<Step, Vec<FieldError>> {
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Steps back, clamped at BasicInfo. Never clears entered fields.
    pub fn previous(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    fn validate_all(&self) -> Vec<FieldError> {
        Step::ALL
            .iter()
            .flat_map(|step| validate_step(*step, &self.draft))
            .collect()
    }

    /// Enters the submitting sub-state. Rejected off the Review step, while a
    /// deploy is in flight, or while any step's rules fail.
    pub fn begin_deploy(&mut self) -> Result<(), DeployError> {
        if self.deploying {
            return Err(DeployError::InProgress);
        }
        if self.step != Step::Review {
            return Err(DeployError::NotAtReview);
        }
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(DeployError::Invalid(errors));
        }
        self.deploying = true;
        Ok(())
    }

    pub fn abort_deploy(&mut self) {
        self.deploying = false;
    }

    /// Completion: the draft is discarded and the wizard starts over.
    pub fn reset(&mut self) {
        *self = Wizard::new();
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDraft {
    /// The Event-shaped payload a completed deploy produces. The contract
    /// address is synthesized; nothing is written to the catalog.
    pub fn build_event(&self, host: &User, contract_address: String) -> anyhow::Result<Event> {
        let date = parse_draft_date(&self.date).context("draft date")?;
        let price = match self.registration_type {
            RegistrationType::Paid => Some(self.price),
            _ => None,
        };
        Ok(Event {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            description: self.description.clone(),
            date: date.midnight().assume_utc(),
            time: self.time.clone(),
            location: self.location.clone(),
            location_type: self.location_type,
            banner_image: self.banner_url.clone(),
            host_id: host.id,
            host_name: host.name.clone(),
            max_attendees: self.max_attendees,
            registered_count: 0,
            registration_type: self.registration_type,
            price,
            poap_enabled: self.poap_enabled,
            status: EventStatus::Upcoming,
            contract_address: Some(contract_address),
            created_at: OffsetDateTime::now_utc(),
            category: self.category.clone(),
        })
    }
}

/// 20 hex digits, the shape the seeded events use.
pub fn synthesize_contract_address() -> String {
    let mut rng = rand::thread_rng();
    format!("0x{:016x}{:04x}", rng.gen::<u64>(), rng.gen::<u16>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.draft = EventDraft {
            title: "Rust on Chain".into(),
            description: "An evening of Move and Rust".into(),
            category: "Meetup".into(),
            banner_url: "https://example.com/banner.jpg".into(),
            date: "2026-12-01".into(),
            time: "19:00".into(),
            location_type: LocationType::Physical,
            location: "Berlin".into(),
            max_attendees: 80,
            registration_type: RegistrationType::Free,
            price: 0.0,
            poap_enabled: true,
        };
        wizard
    }

    fn host() -> User {
        crate::catalog::seed().users[1].clone()
    }

    #[test]
    fn previous_clamps_at_first_step() {
        let mut wizard = Wizard::new();
        for _ in 0..5 {
            wizard.previous();
        }
        assert_eq!(wizard.step, Step::BasicInfo);
        assert_eq!(wizard.step.index(), 1);
    }

    #[test]
    fn next_clamps_at_review() {
        let mut wizard = filled_wizard();
        for _ in 0..10 {
            wizard.next().expect("valid draft advances");
        }
        assert_eq!(wizard.step, Step::Review);
        assert_eq!(wizard.step.index(), 4);
    }

    #[test]
    fn empty_basic_info_blocks_advancement() {
        let mut wizard = Wizard::new();
        let errors = wizard.next().unwrap_err();
        assert_eq!(wizard.step, Step::BasicInfo);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"category"));
    }

    #[test]
    fn unknown_category_blocks_advancement() {
        let mut wizard = filled_wizard();
        wizard.draft.category = "Knitting".into();
        let errors = wizard.next().unwrap_err();
        assert_eq!(
            errors,
            vec![field_error("category", "Pick one of the listed categories")]
        );
    }

    #[test]
    fn malformed_date_blocks_location_step() {
        let mut wizard = filled_wizard();
        wizard.draft.date = "12/01/2026".into();
        wizard.next().expect("basic info ok");
        let errors = wizard.next().unwrap_err();
        assert_eq!(errors, vec![field_error("date", "Use the YYYY-MM-DD format")]);
        assert_eq!(wizard.step, Step::Location);
    }

    #[test]
    fn paid_registration_requires_a_price() {
        let mut wizard = filled_wizard();
        wizard.draft.registration_type = RegistrationType::Paid;
        wizard.draft.price = 0.0;
        wizard.next().expect("step 1");
        wizard.next().expect("step 2");
        let errors = wizard.next().unwrap_err();
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn fields_persist_across_navigation() {
        let mut wizard = filled_wizard();
        wizard.next().expect("to location");
        wizard.next().expect("to tickets");
        wizard.previous();
        wizard.previous();
        assert_eq!(wizard.step, Step::BasicInfo);
        assert_eq!(wizard.draft.title, "Rust on Chain");
        assert_eq!(wizard.draft.max_attendees, 80);
    }

    #[test]
    fn deploy_rejected_off_the_review_step() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.begin_deploy().unwrap_err(), DeployError::NotAtReview);
    }

    #[test]
    fn deploy_rejected_while_in_flight() {
        let mut wizard = filled_wizard();
        while wizard.step != Step::Review {
            wizard.next().expect("valid draft");
        }
        wizard.begin_deploy().expect("first deploy");
        assert_eq!(wizard.begin_deploy().unwrap_err(), DeployError::InProgress);
    }

    #[test]
    fn reset_discards_the_draft() {
        let mut wizard = filled_wizard();
        wizard.reset();
        assert_eq!(wizard.step, Step::BasicInfo);
        assert!(wizard.draft.title.is_empty());
        assert!(!wizard.is_deploying());
    }

    #[test]
    fn build_event_maps_the_draft() {
        let wizard = filled_wizard();
        let event = wizard
            .draft
            .build_event(&host(), synthesize_contract_address())
            .expect("valid date");
        assert_eq!(event.title, "Rust on Chain");
        assert_eq!(event.registered_count, 0);
        assert_eq!(event.max_attendees, 80);
        assert_eq!(event.price, None);
        assert_eq!(event.status, EventStatus::Upcoming);
        let contract = event.contract_address.expect("synthesized");
        assert!(contract.starts_with("0x"));
        assert_eq!(contract.len(), 22);
    }

    #[test]
    fn build_event_keeps_price_for_paid_events() {
        let mut wizard = filled_wizard();
        wizard.draft.registration_type = RegistrationType::Paid;
        wizard.draft.price = 25.0;
        let event = wizard
            .draft
            .build_event(&host(), synthesize_contract_address())
            .expect("valid date");
        assert_eq!(event.price, Some(25.0));
    }
}
