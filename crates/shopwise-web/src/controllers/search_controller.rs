use actix_web::{web, HttpResponse, Responder};

use shopwise_core::ProductReport;

use crate::dto::{SearchRequestDto, SearchResponseDto};
use crate::error::{AppError, Result};
use crate::server::AppState;

async fn search(
    state: web::Data<AppState>,
    body: web::Json<SearchRequestDto>,
) -> Result<HttpResponse> {
    let request = body.into_inner().into_analysis_request();

    log::info!(
        "search request: query={:?}, has_image={}",
        request.query,
        request.image.is_some()
    );

    let result = state.searcher.search(&request).await.map_err(AppError::from)?;
    let report = ProductReport::from_analysis(&result);

    Ok(HttpResponse::Ok().json(SearchResponseDto::from(report)))
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/search").route(web::post().to(search)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}
