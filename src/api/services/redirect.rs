use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, trace};

use crate::api::AppState;

pub struct RedirectService;

impl RedirectService {
    /// `/{route}/{segment}` -> 307 到配置的目标地址
    ///
    /// 先按短码解析，失败后把整个路径段当作原始 ShareId，仍失败则 404。
    pub async fn handle_redirect(
        path: web::Path<(String, String)>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let (route, segment) = path.into_inner();

        match state.routes().resolve_path(&route, &segment) {
            Some((entity, resolution)) => {
                debug!(
                    "Resolved /{}/{} -> {:?} ({})",
                    route, segment, resolution, entity
                );
                let target = state.links.render_target(entity, resolution.share_id());
                Self::finish_redirect(&target)
            }
            None => {
                trace!("Unresolvable share segment: /{}/{}", route, segment);
                Self::not_found_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    fn finish_redirect(target: &str) -> HttpResponse {
        HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header(("Location", target))
            .finish()
    }
}

/// Redirect 路由配置
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route(
            "/{route}/{segment}",
            web::get().to(RedirectService::handle_redirect),
        )
        .route(
            "/{route}/{segment}",
            web::head().to(RedirectService::handle_redirect),
        )
}
