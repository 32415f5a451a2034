use tracing::{info, warn};

use super::{Dashboard, next_id};
use crate::error::{AppError, AppResult};
use crate::model::leave_request::{LeaveRequest, LeaveStatus, NewLeave, inclusive_days};

impl Dashboard {
    pub fn create_leave(&mut self, input: NewLeave) -> AppResult<LeaveRequest> {
        let employee_name = self.employee(input.employee_id)?.name.clone();
        let days_count = inclusive_days(input.start_date, input.end_date).ok_or_else(|| {
            warn!(employee_id = input.employee_id, "Leave end precedes start");
            AppError::validation("start_date cannot be after end_date")
        })?;

        let request = LeaveRequest {
            id: next_id(&mut self.ids.leave),
            employee_id: input.employee_id,
            employee_name,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            days_count,
            status: LeaveStatus::Pending,
        };

        info!(
            leave_id = request.id,
            employee_id = request.employee_id,
            days = days_count,
            "Leave request submitted"
        );
        self.leave_requests.insert(request.id, request.clone());
        Ok(request)
    }

    pub fn leave_requests(&self, status: Option<LeaveStatus>) -> Vec<LeaveRequest> {
        self.leave_requests
            .values()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect()
    }

    fn decide_leave(&mut self, id: u64, decision: LeaveStatus) -> AppResult<LeaveRequest> {
        let request = self
            .leave_requests
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Leave request {id}")))?;

        if request.status != LeaveStatus::Pending {
            return Err(AppError::transition(
                format!("leave request {id}"),
                request.status,
                decision,
            ));
        }
        request.status = decision;
        info!(leave_id = id, status = %decision, "Leave request decided");
        Ok(request.clone())
    }

    pub fn approve_leave(&mut self, id: u64) -> AppResult<LeaveRequest> {
        self.decide_leave(id, LeaveStatus::Approved)
    }

    pub fn reject_leave(&mut self, id: u64) -> AppResult<LeaveRequest> {
        self.decide_leave(id, LeaveStatus::Rejected)
    }
}
