//! Admin page handlers
//!
//! Login gate, dashboard, add and delete. Every mutation answers with a
//! `303 See Other` back to the dashboard, which empties the form and shows
//! the pending notification once.

use std::time::Instant;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::{error, trace};

use super::AppState;
use super::pages::{self, LinkRow};
use crate::api::constants::{ADMIN_PATH, MSG_LINK_ADDED, MSG_LINK_DELETED};
use crate::api::middleware::Session;
use crate::services::AdminGate;
use crate::utils::share_url;

#[derive(Deserialize, Clone, Debug)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NewLinkForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

pub struct AdminService;

impl AdminService {
    fn gate(state: &AppState, session: &Session) -> AdminGate {
        AdminGate::new(state.admin_password.clone(), session.0.store())
    }

    fn back_to_dashboard() -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header(("Location", ADMIN_PATH))
            .finish()
    }

    /// Base for share links: configured public URL, else the request origin
    fn public_base(state: &AppState, req: &HttpRequest) -> String {
        match &state.public_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => {
                let info = req.connection_info();
                format!("{}://{}", info.scheme(), info.host())
            }
        }
    }

    pub async fn index(
        req: HttpRequest,
        state: web::Data<AppState>,
        session: Session,
    ) -> impl Responder {
        if !Self::gate(&state, &session).is_logged_in() {
            trace!("Admin page requested without login");
            return pages::login_page(None);
        }

        let base = Self::public_base(&state, &req);
        let links = state.registry.list();
        let rows: Vec<LinkRow<'_>> = links
            .iter()
            .map(|link| LinkRow {
                link,
                share_url: share_url(&base, &link.id),
            })
            .collect();

        let now = Instant::now();
        let notification = session
            .0
            .notifier()
            .lock()
            .take(now)
            .map(|n| {
                let remaining = n.remaining(now);
                (n, remaining)
            });

        pages::dashboard_page(&rows, notification, state.notification_ttl)
    }

    pub async fn login(
        state: web::Data<AppState>,
        session: Session,
        form: web::Form<LoginForm>,
    ) -> impl Responder {
        match Self::gate(&state, &session).login(&form.password) {
            Ok(Ok(())) => Self::back_to_dashboard(),
            Ok(Err(e)) => pages::login_page(Some(&e.to_string())),
            Err(e) => {
                error!("Failed to store session flag: {}", e);
                pages::error_page("Could not start the admin session.")
            }
        }
    }

    pub async fn add_link(
        state: web::Data<AppState>,
        session: Session,
        form: web::Form<NewLinkForm>,
    ) -> impl Responder {
        if !Self::gate(&state, &session).is_logged_in() {
            return Self::back_to_dashboard();
        }

        match state.registry.add(&form.title, &form.url) {
            Ok(Some(_)) => {
                session
                    .0
                    .notifier()
                    .lock()
                    .show(MSG_LINK_ADDED, Instant::now());
                Self::back_to_dashboard()
            }
            Ok(None) => Self::back_to_dashboard(),
            Err(e) => {
                error!("Failed to add link: {}", e);
                pages::error_page("The link could not be saved.")
            }
        }
    }

    pub async fn delete_link(
        state: web::Data<AppState>,
        session: Session,
        path: web::Path<String>,
    ) -> impl Responder {
        if !Self::gate(&state, &session).is_logged_in() {
            return Self::back_to_dashboard();
        }

        let id = path.into_inner();
        match state.registry.delete(&id) {
            Ok(()) => {
                session
                    .0
                    .notifier()
                    .lock()
                    .show(MSG_LINK_DELETED, Instant::now());
                Self::back_to_dashboard()
            }
            Err(e) => {
                error!("Failed to delete link {}: {}", id, e);
                pages::error_page("The link could not be deleted.")
            }
        }
    }
}
