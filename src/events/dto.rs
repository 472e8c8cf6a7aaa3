use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::{Event, EventStatus, LocationType, RegistrationType, Ticket};

/// Query-string facets for the events list. Absent facets default to the
/// "all" sentinel, an absent query to the empty string.
#[derive(Debug, Deserialize)]
pub struct EventFilterParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "all")]
    pub category: String,
    #[serde(rename = "type", default = "all")]
    pub registration_type: String,
}

fn all() -> String {
    super::filter::ALL.to_string()
}

/// Card-sized projection of an event for list views.
#[derive(Debug, Serialize)]
pub struct EventListItem {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub time: String,
    pub location: String,
    pub location_type: LocationType,
    pub banner_image: String,
    pub category: String,
    pub registration_type: RegistrationType,
    pub price: Option<f64>,
    pub poap_enabled: bool,
    pub status: EventStatus,
    pub registered_count: u32,
    pub max_attendees: u32,
}

impl From<&Event> for EventListItem {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            location: event.location.clone(),
            location_type: event.location_type,
            banner_image: event.banner_image.clone(),
            category: event.category.clone(),
            registration_type: event.registration_type,
            price: event.price,
            poap_enabled: event.poap_enabled,
            status: event.status,
            registered_count: event.registered_count,
            max_attendees: event.max_attendees,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub total: usize,
    pub events: Vec<EventListItem>,
    /// Facet values the filter panel offers.
    pub categories: &'static [&'static str],
}

/// Detail view: the full event plus the derived registration state the
/// sidebar renders.
#[derive(Debug, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub spots_left: i64,
    pub sold_out: bool,
    pub has_ticket: bool,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub ticket: Ticket,
}
