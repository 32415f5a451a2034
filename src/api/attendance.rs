use crate::{
    auth::auth::AuthUser,
    model::{
        attendance::{AttendanceTally, DailyStatus},
        notice::Notice,
    },
    state::AppState,
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct TallyInput {
    #[schema(example = 18)]
    pub present_days: u32,
    #[schema(example = 4)]
    pub absent_days: u32,
    #[schema(example = 0)]
    pub late_days: u32,
}

#[derive(Deserialize, ToSchema)]
pub struct MarkAttendance {
    pub status: DailyStatus,
}

#[derive(Serialize, ToSchema)]
pub struct TallyResponse {
    pub tally: AttendanceTally,
    pub notice: Notice,
}

/// Attendance tallies for the current period
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses((status = 200, body = [AttendanceTally])),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn list_tallies(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;
    let tallies = state.read()?.tallies();
    Ok(HttpResponse::Ok().json(tallies))
}

#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, body = AttendanceTally),
        (status = 404, description = "Unknown employee or no attendance yet")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn get_tally(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;
    let tally = state.read()?.tally(path.into_inner())?;
    Ok(HttpResponse::Ok().json(tally))
}

/// Replace an employee's tally; payroll is regenerated
#[utoipa::path(
    put,
    path = "/api/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    request_body = TallyInput,
    responses(
        (status = 200, body = TallyResponse),
        (status = 400, description = "More days than the 22-day reference period"),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn set_tally(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<TallyInput>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let tally = AttendanceTally {
        employee_id: path.into_inner(),
        present_days: body.present_days,
        absent_days: body.absent_days,
        late_days: body.late_days,
    };
    let tally = state.write()?.set_tally(tally)?;

    Ok(HttpResponse::Ok().json(TallyResponse {
        tally,
        notice: Notice::on_chain(
            "Attendance Recorded",
            format!(
                "Attendance for employee {} has been recorded on the blockchain",
                tally.employee_id
            ),
        ),
    }))
}

/// Mark one day for an employee
#[utoipa::path(
    post,
    path = "/api/attendance/{employee_id}/mark",
    params(("employee_id", Path, description = "Employee ID")),
    request_body = MarkAttendance,
    responses(
        (status = 200, body = TallyResponse),
        (status = 400, description = "Reference period already full"),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<MarkAttendance>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let status = body.status;
    let tally = state.write()?.mark_day(path.into_inner(), status)?;

    Ok(HttpResponse::Ok().json(TallyResponse {
        tally,
        notice: Notice::on_chain(
            "Attendance Recorded",
            format!(
                "{status} for employee {} has been recorded on the blockchain",
                tally.employee_id
            ),
        ),
    }))
}

/// Clear all tallies
#[utoipa::path(
    delete,
    path = "/api/attendance",
    responses((status = 200, description = "Attendance cleared")),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn reset_attendance(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let cleared = state.write()?.reset_attendance()?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Attendance cleared",
        "cleared": cleared
    })))
}
