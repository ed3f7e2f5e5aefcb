//! HTTP surface: the admin page and the redirect/view page

pub mod constants;
pub mod middleware;
pub mod services;
