pub mod attendance;
pub mod contract;
pub mod dashboard;
pub mod employee;
pub mod leave_request;
pub mod payroll;
