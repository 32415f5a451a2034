pub mod attendance;
pub mod contract;
pub mod employee;
pub mod leave_request;
pub mod notice;
pub mod payroll;
pub mod role;
pub mod user;
