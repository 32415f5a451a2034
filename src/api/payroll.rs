use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    auth::auth::AuthUser,
    model::{
        notice::Notice,
        payroll::{PayrollRecord, PayrollStatus, Period},
    },
    state::{AppState, PayrollTotals},
    utils::pagination::Pagination,
};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct PayrollQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,

    #[schema(example = 10)]
    pub per_page: Option<u32>,

    pub status: Option<PayrollStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct PaginatedPayrollResponse {
    pub data: Vec<PayrollRecord>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    #[schema(example = "June 2025")]
    pub period: String,
    pub totals: PayrollTotals,
}

#[derive(Deserialize, ToSchema)]
pub struct RecalculatePayroll {
    #[schema(example = 6)]
    pub month: u32,
    #[schema(example = 2025)]
    pub year: i32,
}

#[derive(Serialize, ToSchema)]
pub struct RecalculateResponse {
    pub period: Period,
    pub records: Vec<PayrollRecord>,
    /// Employees left out because no attendance was recorded
    pub skipped: Vec<u64>,
    pub notice: Notice,
}

#[derive(Serialize, ToSchema)]
pub struct PayrollRecordResponse {
    pub record: PayrollRecord,
    pub notice: Notice,
}

#[derive(Serialize, ToSchema)]
pub struct ProcessAllResponse {
    pub processed: Vec<PayrollRecord>,
    pub notice: Notice,
}

fn recalculated(period: Period, records: Vec<PayrollRecord>, skipped: Vec<u64>) -> RecalculateResponse {
    let notice = Notice::new(
        "Payroll recalculated",
        format!(
            "Payroll for {} has been recalculated for {} employees",
            period.label(),
            records.len()
        ),
    );
    RecalculateResponse {
        period,
        records,
        skipped,
        notice,
    }
}

#[utoipa::path(
    get,
    path = "/api/payroll",
    params(PayrollQuery),
    responses((status = 200, body = PaginatedPayrollResponse)),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn list_payrolls(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<PayrollQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let pagination = Pagination::from_query(query.page, query.per_page, 10);
    let (records, period, totals) = {
        let dashboard = state.read()?;
        (
            dashboard.payroll_records(query.status),
            dashboard.period(),
            dashboard.payroll_totals(),
        )
    };
    let (data, total) = pagination.apply(records);

    Ok(HttpResponse::Ok().json(PaginatedPayrollResponse {
        data,
        page: pagination.page,
        per_page: pagination.per_page,
        total,
        period: period.label(),
        totals,
    }))
}

/// Switch the reference period and rebuild every record
#[utoipa::path(
    post,
    path = "/api/payroll/recalculate",
    request_body = RecalculatePayroll,
    responses(
        (status = 200, body = RecalculateResponse),
        (status = 400, description = "Invalid period or attendance"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn recalculate_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
    body: web::Json<RecalculatePayroll>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let period = Period::new(body.month, body.year)?;
    let (records, skipped) = {
        let mut dashboard = state.write()?;
        let skipped = dashboard.recalculate(period)?;
        (dashboard.payroll_records(None), skipped)
    };

    Ok(HttpResponse::Ok().json(recalculated(period, records, skipped)))
}

/// Rebuild records for the current period
#[utoipa::path(
    post,
    path = "/api/payroll/sync",
    responses(
        (status = 200, body = RecalculateResponse),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn sync_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let (period, records, skipped) = {
        let mut dashboard = state.write()?;
        let skipped = dashboard.sync_payroll()?;
        (dashboard.period(), dashboard.payroll_records(None), skipped)
    };

    Ok(HttpResponse::Ok().json(recalculated(period, records, skipped)))
}

#[utoipa::path(
    post,
    path = "/api/payroll/{employee_id}/process",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, body = PayrollRecordResponse),
        (status = 404, description = "No payroll record for employee"),
        (status = 409, description = "Record is not pending")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn process_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let record = state.write()?.process_payroll(path.into_inner())?;
    let notice = Notice::on_chain(
        "Payroll Processed",
        format!(
            "Payroll for {} has been recorded on the blockchain",
            record.employee_name
        ),
    );

    Ok(HttpResponse::Ok().json(PayrollRecordResponse { record, notice }))
}

/// Process every pending record
#[utoipa::path(
    post,
    path = "/api/payroll/process",
    responses((status = 200, body = ProcessAllResponse)),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn process_all_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let processed = state.write()?.process_all_payroll();
    let notice = Notice::on_chain(
        "Payroll Processed",
        format!(
            "Payroll for {} employees has been recorded on the blockchain",
            processed.len()
        ),
    );

    Ok(HttpResponse::Ok().json(ProcessAllResponse { processed, notice }))
}

/// Mark a pending record as failed
#[utoipa::path(
    post,
    path = "/api/payroll/{employee_id}/fail",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, body = PayrollRecordResponse),
        (status = 409, description = "Record is not pending")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn fail_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let record = state.write()?.fail_payroll(path.into_inner())?;
    let notice = Notice::new(
        "Payroll Failed",
        format!("Payroll for {} could not be processed", record.employee_name),
    );

    Ok(HttpResponse::Ok().json(PayrollRecordResponse { record, notice }))
}

/// Put a failed record back to pending
#[utoipa::path(
    post,
    path = "/api/payroll/{employee_id}/retry",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, body = PayrollRecordResponse),
        (status = 409, description = "Record has not failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn retry_payroll(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let record = state.write()?.retry_payroll(path.into_inner())?;
    let notice = Notice::new(
        "Payroll Retry",
        format!("Payroll for {} is pending again", record.employee_name),
    );

    Ok(HttpResponse::Ok().json(PayrollRecordResponse { record, notice }))
}
