use crate::auth::auth::AuthUser;
use crate::model::{
    leave_request::{LeaveRequest, LeaveStatus, NewLeave},
    notice::Notice,
};
use crate::state::AppState;
use crate::utils::pagination::Pagination;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
    #[schema(example = 1)]
    /// Pagination page number (start with 1)
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveResponse {
    pub leave: LeaveRequest,
    pub notice: Notice,
}

/* =========================
Create leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = NewLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveResponse),
        (status = 400, description = "start_date after end_date"),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn create_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    payload: web::Json<NewLeave>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let leave = state.write()?.create_leave(payload.into_inner())?;

    Ok(HttpResponse::Created().json(LeaveResponse {
        leave,
        notice: Notice::new(
            "Leave Request Submitted",
            "Your leave request has been submitted successfully",
        ),
    }))
}

/* =========================
List leave requests
========================= */
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses((status = 200, body = LeaveListResponse)),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn leave_list(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let pagination = Pagination::from_query(query.page, query.per_page, 10);
    let requests = state.read()?.leave_requests(query.status);
    let (data, total) = pagination.apply(requests);

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        data,
        page: pagination.page,
        per_page: pagination.per_page,
        total,
    }))
}

/* =========================
Approve / reject
========================= */
#[utoipa::path(
    put,
    path = "/api/leave/{id}/approve",
    params(("id", Path, description = "Leave request ID")),
    responses(
        (status = 200, body = LeaveResponse),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Already decided")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn approve_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let leave = state.write()?.approve_leave(path.into_inner())?;

    Ok(HttpResponse::Ok().json(LeaveResponse {
        leave,
        notice: Notice::on_chain(
            "Leave Approved",
            "The leave request has been approved and recorded on the blockchain",
        ),
    }))
}

#[utoipa::path(
    put,
    path = "/api/leave/{id}/reject",
    params(("id", Path, description = "Leave request ID")),
    responses(
        (status = 200, body = LeaveResponse),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Already decided")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn reject_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let leave = state.write()?.reject_leave(path.into_inner())?;

    Ok(HttpResponse::Ok().json(LeaveResponse {
        leave,
        notice: Notice::new("Leave Rejected", "The leave request has been rejected"),
    }))
}
