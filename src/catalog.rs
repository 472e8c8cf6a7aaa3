use serde::{Deserialize, Serialize};
use time::macros::datetime;
use time::OffsetDateTime;
use uuid::Uuid;

/// Categories offered in the event creation form and the list filter.
pub const EVENT_CATEGORIES: &[&str] = &[
    "Conference",
    "Hackathon",
    "Workshop",
    "Music",
    "Meetup",
    "Networking",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Attendee,
    Host,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Physical,
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationType {
    Free,
    Paid,
    InviteOnly,
}

impl RegistrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Free => "free",
            RegistrationType::Paid => "paid",
            RegistrationType::InviteOnly => "invite-only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoapRole {
    Attendee,
    Speaker,
    Volunteer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub wallet_address: String,
    pub avatar: Option<String>,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub time: String,
    pub location: String,
    pub location_type: LocationType,
    pub banner_image: String,
    pub host_id: Uuid,
    pub host_name: String,
    pub max_attendees: u32,
    pub registered_count: u32,
    pub registration_type: RegistrationType,
    pub price: Option<f64>,
    pub poap_enabled: bool,
    pub status: EventStatus,
    pub contract_address: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub category: String,
}

impl Event {
    /// maxAttendees - registeredCount. Signed because nothing enforces the
    /// `registered_count <= max_attendees` invariant on seed data.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_attendees) - i64::from(self.registered_count)
    }

    pub fn is_sold_out(&self) -> bool {
        self.spots_left() <= 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub event_location: String,
    pub event_banner: String,
    pub owner_id: Uuid,
    pub owner_wallet: String,
    pub token_id: String,
    pub is_used: bool,
    pub qr_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub minted_at: OffsetDateTime,
    pub transferable: bool,
}

/// Soulbound badge: conceptually non-transferable, tied to one user and one
/// event. Nothing in this snapshot enforces the non-transferability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poap {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub event_location: String,
    pub owner_id: Uuid,
    pub owner_wallet: String,
    pub token_id: String,
    pub role: PoapRole,
    #[serde(with = "time::serde::rfc3339")]
    pub minted_at: OffsetDateTime,
    pub image: String,
    pub host_name: String,
}

/// Defined for parity with the product model; no page logic instantiates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(dead_code)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub user_wallet: String,
    pub user_name: String,
    pub checked_in: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub checked_in_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

/// Fixed in-memory collections standing in for a backend. Shared read-only
/// across all handlers; never mutated after seeding.
pub struct Catalog {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub tickets: Vec<Ticket>,
    pub poaps: Vec<Poap>,
}

impl Catalog {
    pub fn event(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Expects the caller to have lowercased the email already.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn tickets_for(&self, owner_id: Uuid) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.owner_id == owner_id).collect()
    }

    pub fn poaps_for(&self, owner_id: Uuid) -> Vec<&Poap> {
        self.poaps.iter().filter(|p| p.owner_id == owner_id).collect()
    }

    pub fn events_hosted_by(&self, host_id: Uuid) -> Vec<&Event> {
        self.events.iter().filter(|e| e.host_id == host_id).collect()
    }

    pub fn has_ticket(&self, owner_id: Uuid, event_id: Uuid) -> bool {
        self.tickets
            .iter()
            .any(|t| t.owner_id == owner_id && t.event_id == event_id)
    }
}

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Seeded demo data. Ids are fixed so tickets and POAPs can reference their
/// events and owners, and so tests can address specific records.
pub fn seed() -> Catalog {
    let users = vec![
        User {
            id: uid(0x01),
            email: "ava@mintgate.xyz".into(),
            name: "Ava Chen".into(),
            wallet_address: "0x7f3a9c21...e4b8".into(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=ava@mintgate.xyz".into()),
            role: Role::Attendee,
            created_at: datetime!(2025-11-02 10:15 UTC),
        },
        User {
            id: uid(0x02),
            email: "leo@endlesslabs.io".into(),
            name: "Leo Martinez".into(),
            wallet_address: "0x1b44d0ef...92ac".into(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=leo@endlesslabs.io".into()),
            role: Role::Host,
            created_at: datetime!(2025-06-18 08:00 UTC),
        },
        User {
            id: uid(0x03),
            email: "mira@mintgate.xyz".into(),
            name: "Mira Okafor".into(),
            wallet_address: "0x9cc01272...77fe".into(),
            avatar: None,
            role: Role::Admin,
            created_at: datetime!(2025-01-09 17:40 UTC),
        },
    ];

    let events = vec![
        Event {
            id: uid(0x10),
            title: "Web3 Developer Summit 2026".into(),
            description: "Two days of talks and workshops on Move smart contracts, \
                          gasless UX and on-chain ticketing."
                .into(),
            date: datetime!(2026-10-12 09:00 UTC),
            time: "09:00".into(),
            location: "Moscone Center, San Francisco, CA".into(),
            location_type: LocationType::Physical,
            banner_image: "https://images.mintgate.xyz/banners/dev-summit.jpg".into(),
            host_id: uid(0x02),
            host_name: "Leo Martinez".into(),
            max_attendees: 500,
            registered_count: 342,
            registration_type: RegistrationType::Free,
            price: None,
            poap_enabled: true,
            status: EventStatus::Upcoming,
            contract_address: Some("0x4e1d09aa51b27c4fd8e2".into()),
            created_at: datetime!(2026-05-30 12:00 UTC),
            category: "Conference".into(),
        },
        Event {
            id: uid(0x11),
            title: "Move Language Hackathon".into(),
            description: "48 hours to ship a dapp on Endless Protocol. Teams of up \
                          to four, judged on-chain."
                .into(),
            date: datetime!(2026-09-20 18:00 UTC),
            time: "18:00".into(),
            location: "https://hack.endless.dev".into(),
            location_type: LocationType::Virtual,
            banner_image: "https://images.mintgate.xyz/banners/move-hack.jpg".into(),
            host_id: uid(0x02),
            host_name: "Leo Martinez".into(),
            max_attendees: 200,
            // Sold out: exactly at capacity.
            registered_count: 200,
            registration_type: RegistrationType::Free,
            price: None,
            poap_enabled: true,
            status: EventStatus::Upcoming,
            contract_address: Some("0xb7720c31f09ae85d6614".into()),
            created_at: datetime!(2026-06-11 09:30 UTC),
            category: "Hackathon".into(),
        },
        Event {
            id: uid(0x12),
            title: "On-Chain Music Festival".into(),
            description: "A full day of live sets where every ticket is an NFT and \
                          every set is a collectible."
                .into(),
            date: datetime!(2026-11-07 14:00 UTC),
            time: "14:00".into(),
            location: "Zilker Park, Austin, TX".into(),
            location_type: LocationType::Physical,
            banner_image: "https://images.mintgate.xyz/banners/onchain-fest.jpg".into(),
            host_id: uid(0x21),
            host_name: "Harmonic DAO".into(),
            max_attendees: 1000,
            registered_count: 764,
            registration_type: RegistrationType::Paid,
            price: Some(45.0),
            poap_enabled: true,
            status: EventStatus::Upcoming,
            contract_address: Some("0x52c88e04d1fb3a97cc01".into()),
            created_at: datetime!(2026-04-22 16:45 UTC),
            category: "Music".into(),
        },
        Event {
            id: uid(0x13),
            title: "NFT Art & Music Night".into(),
            description: "Gallery opening with generative art drops and an ambient \
                          live score."
                .into(),
            date: datetime!(2026-09-28 19:30 UTC),
            time: "19:30".into(),
            location: "Greenpoint Warehouse, Brooklyn, NY".into(),
            location_type: LocationType::Physical,
            banner_image: "https://images.mintgate.xyz/banners/art-night.jpg".into(),
            host_id: uid(0x22),
            host_name: "Palette Collective".into(),
            max_attendees: 150,
            registered_count: 89,
            registration_type: RegistrationType::Free,
            price: None,
            poap_enabled: false,
            status: EventStatus::Upcoming,
            contract_address: None,
            created_at: datetime!(2026-07-01 11:20 UTC),
            category: "Music".into(),
        },
        Event {
            id: uid(0x14),
            title: "DAO Governance Workshop".into(),
            description: "Hands-on session on proposal design, delegation and \
                          treasury votes."
                .into(),
            date: datetime!(2026-10-03 16:00 UTC),
            time: "16:00".into(),
            location: "https://meet.endless.dev/dao-workshop".into(),
            location_type: LocationType::Virtual,
            banner_image: "https://images.mintgate.xyz/banners/dao-workshop.jpg".into(),
            host_id: uid(0x02),
            host_name: "Leo Martinez".into(),
            max_attendees: 50,
            registered_count: 18,
            registration_type: RegistrationType::InviteOnly,
            price: None,
            poap_enabled: true,
            status: EventStatus::Upcoming,
            contract_address: Some("0x90af6c2be417d3051188".into()),
            created_at: datetime!(2026-08-14 10:00 UTC),
            category: "Workshop".into(),
        },
        Event {
            id: uid(0x15),
            title: "Founders & Builders Mixer".into(),
            description: "Evening networking for teams building on Endless Protocol. \
                          Drinks on the DAO."
                .into(),
            date: datetime!(2026-10-24 18:30 UTC),
            time: "18:30".into(),
            location: "LX Factory, Lisbon".into(),
            location_type: LocationType::Physical,
            banner_image: "https://images.mintgate.xyz/banners/builders-mixer.jpg".into(),
            host_id: uid(0x23),
            host_name: "Atlantic Builders".into(),
            max_attendees: 120,
            registered_count: 97,
            registration_type: RegistrationType::Paid,
            price: Some(20.0),
            poap_enabled: false,
            status: EventStatus::Upcoming,
            contract_address: Some("0xd30b1199ff6a24c88e52".into()),
            created_at: datetime!(2026-07-19 13:10 UTC),
            category: "Networking".into(),
        },
    ];

    let tickets = vec![
        Ticket {
            id: uid(0x30),
            event_id: uid(0x10),
            event_title: "Web3 Developer Summit 2026".into(),
            event_date: datetime!(2026-10-12 09:00 UTC),
            event_location: "Moscone Center, San Francisco, CA".into(),
            event_banner: "https://images.mintgate.xyz/banners/dev-summit.jpg".into(),
            owner_id: uid(0x01),
            owner_wallet: "0x7f3a9c21...e4b8".into(),
            token_id: "8421".into(),
            is_used: false,
            qr_code: format!("mintgate:ticket:8421:{}", uid(0x10)),
            minted_at: datetime!(2026-06-02 19:04 UTC),
            transferable: true,
        },
        Ticket {
            id: uid(0x31),
            event_id: uid(0x12),
            event_title: "On-Chain Music Festival".into(),
            event_date: datetime!(2026-11-07 14:00 UTC),
            event_location: "Zilker Park, Austin, TX".into(),
            event_banner: "https://images.mintgate.xyz/banners/onchain-fest.jpg".into(),
            owner_id: uid(0x01),
            owner_wallet: "0x7f3a9c21...e4b8".into(),
            token_id: "1287".into(),
            is_used: false,
            qr_code: format!("mintgate:ticket:1287:{}", uid(0x12)),
            minted_at: datetime!(2026-05-11 08:52 UTC),
            transferable: true,
        },
    ];

    let poaps = vec![
        Poap {
            id: uid(0x40),
            event_id: uid(0x11),
            event_title: "Move Language Hackathon".into(),
            event_date: datetime!(2026-09-20 18:00 UTC),
            event_location: "https://hack.endless.dev".into(),
            owner_id: uid(0x01),
            owner_wallet: "0x7f3a9c21...e4b8".into(),
            token_id: "77".into(),
            role: PoapRole::Attendee,
            minted_at: datetime!(2026-09-22 21:30 UTC),
            image: "https://images.mintgate.xyz/poaps/move-hack.png".into(),
            host_name: "Leo Martinez".into(),
        },
        Poap {
            id: uid(0x41),
            event_id: uid(0x14),
            event_title: "DAO Governance Workshop".into(),
            event_date: datetime!(2026-10-03 16:00 UTC),
            event_location: "https://meet.endless.dev/dao-workshop".into(),
            owner_id: uid(0x01),
            owner_wallet: "0x7f3a9c21...e4b8".into(),
            token_id: "12".into(),
            role: PoapRole::Speaker,
            minted_at: datetime!(2026-10-03 20:05 UTC),
            image: "https://images.mintgate.xyz/poaps/dao-workshop.png".into(),
            host_name: "Leo Martinez".into(),
        },
    ];

    Catalog {
        users,
        events,
        tickets,
        poaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let catalog = seed();
        let mut ids: Vec<Uuid> = catalog.events.iter().map(|e| e.id).collect();
        ids.extend(catalog.users.iter().map(|u| u.id));
        ids.extend(catalog.tickets.iter().map(|t| t.id));
        ids.extend(catalog.poaps.iter().map(|p| p.id));
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn seed_contains_a_sold_out_event() {
        let catalog = seed();
        let sold_out = catalog
            .events
            .iter()
            .find(|e| e.registered_count == e.max_attendees)
            .expect("one event must be at capacity");
        assert_eq!(sold_out.spots_left(), 0);
        assert!(sold_out.is_sold_out());
    }

    #[test]
    fn seed_references_are_consistent() {
        let catalog = seed();
        for ticket in &catalog.tickets {
            assert!(catalog.event(ticket.event_id).is_some());
            assert!(catalog.users.iter().any(|u| u.id == ticket.owner_id));
        }
        for poap in &catalog.poaps {
            assert!(catalog.event(poap.event_id).is_some());
        }
    }

    #[test]
    fn lookups_work() {
        let catalog = seed();
        assert!(catalog.user_by_email("ava@mintgate.xyz").is_some());
        assert!(catalog.user_by_email("nobody@mintgate.xyz").is_none());
        assert_eq!(catalog.tickets_for(uid(0x01)).len(), 2);
        assert_eq!(catalog.poaps_for(uid(0x01)).len(), 2);
        assert!(catalog.has_ticket(uid(0x01), uid(0x10)));
        assert!(!catalog.has_ticket(uid(0x01), uid(0x11)));
        assert_eq!(catalog.events_hosted_by(uid(0x02)).len(), 3);
    }

    #[test]
    fn registration_type_serializes_kebab_case() {
        let json = serde_json::to_string(&RegistrationType::InviteOnly).unwrap();
        assert_eq!(json, "\"invite-only\"");
    }
}
