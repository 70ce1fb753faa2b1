//! 链接生成 / 短码解码 API

use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, trace};

use super::types::{
    ApiResponse, DecodedCode, ErrorCode, ErrorData, PostNewLink, SlugData, SlugQuery,
};
use crate::api::AppState;
use crate::codec::{self, CodecError};

pub struct LinkService;

impl LinkService {
    pub async fn post_link(
        state: web::Data<AppState>,
        body: web::Json<PostNewLink>,
    ) -> impl Responder {
        let PostNewLink { share_id, title } = body.into_inner();
        let title = title.unwrap_or_default();

        match state.builder.try_build(&share_id, &title) {
            Ok(link) => {
                debug!("Built {:?} link for {}: {}", link.kind, link.entity, link.url);
                HttpResponse::Ok().json(ApiResponse::ok(link))
            }
            Err(e) => {
                trace!("Cannot build link for '{}': {}", share_id, e);
                codec_error_response(ErrorCode::InvalidShareId, &e)
            }
        }
    }

    pub async fn get_code(path: web::Path<String>) -> impl Responder {
        let code = path.into_inner();

        match codec::default_codec().decode_id(&code) {
            Ok(id) => HttpResponse::Ok().json(ApiResponse::ok(DecodedCode {
                entity: id.entity(),
                share_id: id.to_string(),
            })),
            Err(e) => {
                trace!("Cannot decode '{}': {}", code, e);
                codec_error_response(ErrorCode::InvalidShareCode, &e)
            }
        }
    }

    pub async fn get_slug(query: web::Query<SlugQuery>) -> impl Responder {
        HttpResponse::Ok().json(ApiResponse::ok(SlugData {
            slug: codec::slugify(&query.title),
        }))
    }
}

fn codec_error_response(code: ErrorCode, err: &CodecError) -> HttpResponse {
    let body = ApiResponse {
        code: code as i32,
        data: ErrorData {
            message: err.to_string(),
            reason: Some(err.code().to_string()),
        },
    };

    match code {
        ErrorCode::InvalidShareCode => HttpResponse::NotFound().json(body),
        _ => HttpResponse::UnprocessableEntity().json(body),
    }
}

/// `/api/v1` 路由配置
pub fn link_routes() -> actix_web::Scope {
    web::scope("/api/v1")
        .route("/links", web::post().to(LinkService::post_link))
        .route("/codes/{code}", web::get().to(LinkService::get_code))
        .route("/slug", web::get().to(LinkService::get_slug))
}
