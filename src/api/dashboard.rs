use actix_web::{HttpResponse, Responder, web};

use crate::{
    auth::auth::AuthUser,
    state::{AppState, DashboardStats},
};

/// Headline numbers for the dashboard cards
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses((status = 200, body = DashboardStats)),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn stats(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;
    let stats = state.read()?.stats();
    Ok(HttpResponse::Ok().json(stats))
}
