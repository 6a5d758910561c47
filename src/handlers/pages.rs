use crate::{
    models::site::{self, CONTACT, IMPACT, PAGES},
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(PAGES)))
}

pub async fn show(path: web::Path<String>) -> Result<HttpResponse> {
    let slug = path.into_inner();

    match site::find_page(&slug) {
        Some(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
            "Page {} not found",
            slug
        )))),
    }
}

pub async fn contact() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(CONTACT)))
}

pub async fn impact() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(IMPACT)))
}

pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
