use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    auth::auth::AuthUser,
    model::{
        contract::{Contract, NewContract},
        notice::Notice,
    },
    state::AppState,
};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ContractQuery {
    #[schema(example = 1)]
    pub employee_id: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct ContractResponse {
    pub contract: Contract,
    pub notice: Notice,
}

#[utoipa::path(
    post,
    path = "/api/contract",
    request_body = NewContract,
    responses(
        (status = 201, body = ContractResponse),
        (status = 400, description = "Invalid contract terms"),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Contract"
)]
pub async fn create_contract(
    auth: AuthUser,
    state: web::Data<AppState>,
    payload: web::Json<NewContract>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let contract = state.write()?.create_contract(payload.into_inner())?;

    Ok(HttpResponse::Created().json(ContractResponse {
        contract,
        notice: Notice::new(
            "Contract created",
            "New employment contract has been created and is pending signature",
        ),
    }))
}

#[utoipa::path(
    get,
    path = "/api/contract",
    params(ContractQuery),
    responses((status = 200, body = [Contract])),
    security(("bearer_auth" = [])),
    tag = "Contract"
)]
pub async fn list_contracts(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<ContractQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;
    let contracts = state.read()?.contracts(query.employee_id);
    Ok(HttpResponse::Ok().json(contracts))
}

#[utoipa::path(
    put,
    path = "/api/contract/{id}/sign",
    params(("id", Path, description = "Contract ID")),
    responses(
        (status = 200, body = ContractResponse),
        (status = 404, description = "Contract not found"),
        (status = 409, description = "Contract is not awaiting signature")
    ),
    security(("bearer_auth" = [])),
    tag = "Contract"
)]
pub async fn sign_contract(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let contract = state.write()?.sign_contract(path.into_inner())?;
    let notice = Notice::on_chain(
        "Contract Approved",
        format!(
            "Employment contract for {} was signed and recorded on the blockchain",
            contract.employee_name
        ),
    );

    Ok(HttpResponse::Ok().json(ContractResponse { contract, notice }))
}

#[utoipa::path(
    put,
    path = "/api/contract/{id}/terminate",
    params(("id", Path, description = "Contract ID")),
    responses(
        (status = 200, body = ContractResponse),
        (status = 404, description = "Contract not found"),
        (status = 409, description = "Contract already terminated")
    ),
    security(("bearer_auth" = [])),
    tag = "Contract"
)]
pub async fn terminate_contract(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let contract = state.write()?.terminate_contract(path.into_inner())?;
    let notice = Notice::new(
        "Contract Terminated",
        format!("Employment contract for {} was terminated", contract.employee_name),
    );

    Ok(HttpResponse::Ok().json(ContractResponse { contract, notice }))
}
