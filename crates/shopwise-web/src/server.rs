use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use shopwise_core::Config;
use shopwise_llm::ProductSearcher;

use crate::controllers::search_controller;

pub struct AppState {
    pub searcher: Arc<ProductSearcher>,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/v1").configure(search_controller::config));
}

pub async fn run(port: u16) -> std::io::Result<()> {
    info!("Starting shopwise web service on port {}...", port);

    let config = Config::new();
    let searcher = Arc::new(ProductSearcher::from_config(&config));
    let app_state = web::Data::new(AppState { searcher });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
