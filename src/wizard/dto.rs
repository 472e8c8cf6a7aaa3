use serde::{Deserialize, Serialize};

use crate::catalog::{Event, LocationType, RegistrationType};
use crate::wizard::machine::{EventDraft, FieldError, Step, Wizard};

/// Partial form update; absent fields leave the draft untouched.
#[derive(Debug, Default, Deserialize)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub banner_url: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location_type: Option<LocationType>,
    pub location: Option<String>,
    pub max_attendees: Option<u32>,
    pub registration_type: Option<RegistrationType>,
    pub price: Option<f64>,
    pub poap_enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct StepView {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct WizardView {
    pub current_step: u8,
    pub deploying: bool,
    pub steps: Vec<StepView>,
    pub draft: EventDraft,
}

impl WizardView {
    pub fn of(wizard: &Wizard) -> Self {
        Self {
            current_step: wizard.step.index(),
            deploying: wizard.is_deploying(),
            steps: Step::ALL
                .iter()
                .map(|step| StepView {
                    id: step.index(),
                    title: step.title(),
                    description: step.description(),
                    current: *step == wizard.step,
                })
                .collect(),
            draft: wizard.draft.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    pub message: &'static str,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub message: String,
    pub description: String,
    pub event: Event,
}
