pub mod admin;
pub mod pages;
pub mod view;

use std::time::Duration;

use actix_web::middleware::from_fn;
use actix_web::{HttpResponse, web};

pub use admin::AdminService;
pub use view::ViewService;

use crate::api::constants::ADMIN_PATH;
use crate::api::middleware::session_middleware;
use crate::services::LinkRegistry;

/// Shared state handed to every handler
pub struct AppState {
    pub registry: LinkRegistry,
    pub admin_password: String,
    pub public_url: Option<String>,
    pub notification_ttl: Duration,
}

/// Admin 路由配置（挂载在会话中间件之下）
pub fn admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(AdminService::index))
        .route("", web::head().to(AdminService::index))
        .route("/login", web::post().to(AdminService::login))
        .route("/links", web::post().to(AdminService::add_link))
        .route("/links/{id}/delete", web::post().to(AdminService::delete_link));
}

/// View 路由配置
pub fn view_routes() -> actix_web::Scope {
    web::scope("/view")
        .route("/{id}", web::get().to(ViewService::handle_view))
        .route("/{id}", web::head().to(ViewService::handle_view))
}

async fn root_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", ADMIN_PATH))
        .finish()
}

/// Register every route on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(ADMIN_PATH)
            .wrap(from_fn(session_middleware))
            .configure(admin_routes),
    )
    .service(view_routes())
    .route("/", web::get().to(root_redirect));
}
