use serde::Serialize;

use crate::catalog::{Poap, Ticket};

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub total: usize,
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Serialize)]
pub struct PoapsResponse {
    pub total: usize,
    pub poaps: Vec<Poap>,
}
