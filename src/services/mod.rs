//! Service layer for business logic
//!
//! This module provides the logic shared between the HTTP pages and the CLI:
//! the link registry, the admin gate, notifications and redirect resolution.

pub mod admin_gate;
pub mod link_registry;
pub mod notifier;
pub mod redirect;

pub use admin_gate::{AUTH_FLAG_KEY, AdminGate, AdminState, LoginError};
pub use link_registry::{LINKS_KEY, LinkRegistry};
pub use notifier::{Notification, Notifier};
pub use redirect::{
    ManualAction, Navigation, RedirectView, ViewState, auto_navigation, manual_actions,
    player_locator,
};
