//! In-memory dashboard state.
//!
//! Every collection lives in one [`Dashboard`] behind a single `RwLock`.
//! Handlers take the lock once per request, call one of the `Dashboard`
//! operations and release it; nothing is awaited while it is held.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

use crate::error::{AppError, AppResult};
use crate::model::{
    attendance::AttendanceTally, contract::Contract, employee::Employee,
    leave_request::LeaveRequest, payroll::PayrollRecord, payroll::Period, user::User,
};

mod attendance;
mod contracts;
mod employees;
mod leave;
mod payroll;
mod stats;
mod users;

pub use employees::EmployeeFilter;
pub use payroll::PayrollTotals;
pub use stats::DashboardStats;

pub struct AppState {
    dashboard: RwLock<Dashboard>,
}

impl AppState {
    pub fn new(period: Period) -> Self {
        Self {
            dashboard: RwLock::new(Dashboard::new(period)),
        }
    }

    pub fn read(&self) -> AppResult<RwLockReadGuard<'_, Dashboard>> {
        self.dashboard.read().map_err(|_| {
            error!("dashboard state lock poisoned");
            AppError::Internal
        })
    }

    pub fn write(&self) -> AppResult<RwLockWriteGuard<'_, Dashboard>> {
        self.dashboard.write().map_err(|_| {
            error!("dashboard state lock poisoned");
            AppError::Internal
        })
    }
}

#[derive(Debug)]
pub struct Dashboard {
    employees: BTreeMap<u64, Employee>,
    attendance: BTreeMap<u64, AttendanceTally>,
    payroll: Vec<PayrollRecord>,
    period: Period,
    leave_requests: BTreeMap<u64, LeaveRequest>,
    contracts: BTreeMap<u64, Contract>,
    users: BTreeMap<String, User>,
    ids: IdCounters,
}

#[derive(Debug, Default)]
struct IdCounters {
    employee: u64,
    leave: u64,
    contract: u64,
    user: u64,
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

impl Dashboard {
    pub fn new(period: Period) -> Self {
        Self {
            employees: BTreeMap::new(),
            attendance: BTreeMap::new(),
            payroll: Vec::new(),
            period,
            leave_requests: BTreeMap::new(),
            contracts: BTreeMap::new(),
            users: BTreeMap::new(),
            ids: IdCounters::default(),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }
}
