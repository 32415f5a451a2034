use crate::{
    auth::auth::AuthUser,
    model::{
        employee::{Employee, EmployeeUpdate, EmploymentStatus, NewEmployee},
        notice::Notice,
    },
    state::{AppState, EmployeeFilter},
    utils::pagination::Pagination,
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 20)]
    pub per_page: Option<u32>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    pub status: Option<EmploymentStatus>,
    /// Search by name or position
    #[schema(example = "engineer")]
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 5)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub employee: Employee,
    pub notice: Notice,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Invalid employee data")
    ),
    tag = "Employee",
    security(("bearer_auth" = []))
)]
pub async fn create_employee(
    auth: AuthUser,
    state: web::Data<AppState>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee = state.write()?.add_employee(payload.into_inner())?;
    let notice = Notice::on_chain(
        "Employee Added",
        format!("{} has been added to the HR registry", employee.name),
    );

    Ok(HttpResponse::Created().json(EmployeeResponse { employee, notice }))
}

#[utoipa::path(
    get,
    path = "/api/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Paginated employee list", body = EmployeeListResponse)
    ),
    tag = "Employee",
    security(("bearer_auth" = []))
)]
pub async fn list_employees(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let query = query.into_inner();
    let pagination = Pagination::from_query(query.page, query.per_page, 20);
    let filter = EmployeeFilter {
        department: query.department,
        status: query.status,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };
    debug!(?filter, ?pagination, "Listing employees");

    let employees = state.read()?.employees(&filter);
    let (data, total) = pagination.apply(employees);

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        data,
        page: pagination.page,
        per_page: pagination.per_page,
        total,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee",
    security(("bearer_auth" = []))
)]
pub async fn get_employee(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee = state.read()?.employee(path.into_inner())?.clone();
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employee/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    request_body = EmployeeUpdate,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Invalid employee data"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee",
    security(("bearer_auth" = []))
)]
pub async fn update_employee(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<EmployeeUpdate>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee = state
        .write()?
        .update_employee(path.into_inner(), body.into_inner())?;
    let notice = Notice::new(
        "Employee Updated",
        format!("Details for {} have been updated", employee.name),
    );

    Ok(HttpResponse::Ok().json(EmployeeResponse { employee, notice }))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employee/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee",
    security(("bearer_auth" = []))
)]
pub async fn delete_employee(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let removed = state.write()?.remove_employee(path.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted",
        "employee_id": removed.id
    })))
}
