use crate::api::attendance::{MarkAttendance, TallyInput, TallyResponse};
use crate::api::contract::{ContractQuery, ContractResponse};
use crate::api::employee::{EmployeeListResponse, EmployeeQuery, EmployeeResponse};
use crate::api::leave_request::{LeaveFilter, LeaveListResponse, LeaveResponse};
use crate::api::payroll::{
    PaginatedPayrollResponse, PayrollQuery, PayrollRecordResponse, ProcessAllResponse,
    RecalculatePayroll, RecalculateResponse,
};
use crate::model::attendance::{AttendanceTally, DailyStatus};
use crate::model::contract::{Contract, ContractStatus, ContractType, NewContract};
use crate::model::employee::{Employee, EmployeeUpdate, EmploymentStatus, NewEmployee};
use crate::model::leave_request::{LeaveRequest, LeaveStatus, LeaveType, NewLeave};
use crate::model::notice::Notice;
use crate::model::payroll::{PayrollRecord, PayrollStatus, Period};
use crate::models::{LoginReqDto, LoginResponse, RegisterReqDto};
use crate::state::{DashboardStats, PayrollTotals};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR ChainFlow API",
        version = "1.0.0",
        description = r#"
## HR ChainFlow

This API powers an **HR and payroll dashboard** for a small organisation.
All data is held in memory for the lifetime of the server.

### 🔹 Key Features
- **Employee Management**
  - Create, update, list, filter and remove employee profiles
- **Attendance**
  - Monthly tallies of present, absent and late days over a 22-day reference period
- **Payroll**
  - Deductions of `base_salary / 22` per absent day, rounded to cents
  - Pending → Processed / Failed lifecycle with retry
- **Leave Management**
  - Submit, approve and reject leave requests
- **Contracts**
  - Draft, sign and terminate employment contracts

### 🔗 Ledger notices
Mutating endpoints return a `notice` describing what happened. Notices for
actions that would be anchored on a blockchain carry a simulated `tx_ref`.

### 🔐 Security
Endpoints under `/api` are protected using **JWT Bearer authentication**.
Sign in with `POST /auth/login`. Only **Admin** may run payroll, remove
employees or register further **HR** operators.

---
Built with **Rust**, **Actix Web**, **rust_decimal**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::register,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_tallies,
        crate::api::attendance::get_tally,
        crate::api::attendance::set_tally,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::reset_attendance,

        crate::api::payroll::list_payrolls,
        crate::api::payroll::recalculate_payroll,
        crate::api::payroll::sync_payroll,
        crate::api::payroll::process_payroll,
        crate::api::payroll::process_all_payroll,
        crate::api::payroll::fail_payroll,
        crate::api::payroll::retry_payroll,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::contract::list_contracts,
        crate::api::contract::create_contract,
        crate::api::contract::sign_contract,
        crate::api::contract::terminate_contract,

        crate::api::dashboard::stats
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            RegisterReqDto,
            Notice,
            Employee,
            EmploymentStatus,
            NewEmployee,
            EmployeeUpdate,
            EmployeeQuery,
            EmployeeResponse,
            EmployeeListResponse,
            AttendanceTally,
            DailyStatus,
            TallyInput,
            MarkAttendance,
            TallyResponse,
            Period,
            PayrollRecord,
            PayrollStatus,
            PayrollTotals,
            PayrollQuery,
            PaginatedPayrollResponse,
            RecalculatePayroll,
            RecalculateResponse,
            PayrollRecordResponse,
            ProcessAllResponse,
            LeaveRequest,
            LeaveType,
            LeaveStatus,
            NewLeave,
            LeaveFilter,
            LeaveResponse,
            LeaveListResponse,
            Contract,
            ContractType,
            ContractStatus,
            NewContract,
            ContractQuery,
            ContractResponse,
            DashboardStats
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Sign-in and operator accounts"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Payroll", description = "Payroll management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Contract", description = "Contract management APIs"),
        (name = "Dashboard", description = "Dashboard statistics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route_group() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/login",
            "/api/employee",
            "/api/attendance/{employee_id}",
            "/api/payroll/{employee_id}/process",
            "/api/leave/{id}/approve",
            "/api/contract/{id}/sign",
            "/api/dashboard/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
