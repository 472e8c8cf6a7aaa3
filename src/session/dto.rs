use serde::{Deserialize, Serialize};

use crate::catalog::{Role, User};

/// Request body for login. Any well-formed email signs in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Request body for switching between attendee and host mode.
#[derive(Debug, Deserialize)]
pub struct SwitchRoleRequest {
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Navigation entry; which entries appear is driven by the session role.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub nav: Vec<NavLink>,
}

pub fn nav_for(role: Role) -> Vec<NavLink> {
    let mut nav = vec![
        NavLink {
            href: "/events",
            label: "Events",
        },
        NavLink {
            href: "/my-tickets",
            label: "My Tickets",
        },
        NavLink {
            href: "/my-poaps",
            label: "POAPs",
        },
    ];
    if role == Role::Host {
        nav.push(NavLink {
            href: "/create-event",
            label: "Create Event",
        });
        nav.push(NavLink {
            href: "/dashboard",
            label: "Dashboard",
        });
    }
    nav
}
