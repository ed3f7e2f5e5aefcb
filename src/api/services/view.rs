//! Share link landing page

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::trace;

use super::AppState;
use super::pages;
use crate::services::{Navigation, RedirectView, ViewState, manual_actions};
use crate::utils::{Platform, is_valid_link_id};

pub struct ViewService;

impl ViewService {
    pub async fn handle_view(
        req: HttpRequest,
        path: web::Path<String>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let id = path.into_inner();

        if !is_valid_link_id(&id) {
            // 非法 id，直接 404（不读存储）
            trace!("Invalid link id rejected: {}", id);
            return pages::not_found_page();
        }

        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();
        let platform = Platform::detect(user_agent);

        let mut view = RedirectView::new();
        let navigation = view.resolve(&id, &state.registry, platform);

        Self::render(view.state(), navigation.as_ref())
    }

    fn render(state: &ViewState, navigation: Option<&Navigation>) -> HttpResponse {
        match state {
            ViewState::Pending => pages::loading_page(),
            ViewState::Resolved(link) => {
                let actions = manual_actions(link);
                pages::view_page(link, &actions, navigation)
            }
            ViewState::NotFound => pages::not_found_page(),
        }
    }
}
