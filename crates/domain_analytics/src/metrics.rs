//! Agency dashboard metrics
//!
//! Production counts are windowed by the reporting period; book-health
//! numbers (arrears, status mix) are as-of today across the whole filtered
//! book. The arrears math delegates to the billing engine so the dashboard
//! can never disagree with the customer screens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{AgentId, Currency, CustomerId, Money};
use domain_billing::{assess, PaymentRecord};
use domain_policy::{Customer, PolicyStatus};
use domain_requests::{ChangeRequest, RequestKind, RequestStatus};

use crate::period::ReportingPeriod;

/// The dashboard numbers for one reporting window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyMetrics {
    pub new_customers: usize,
    /// New Policy requests approved in the window
    pub new_policies: usize,
    pub payments_received: usize,
    pub total_revenue: Money,
    /// Book-wide arrears as of today, cancelled policies included
    pub outstanding_balance: Money,
    pub active_customers: usize,
    pub overdue_customers: usize,
    pub inactive_customers: usize,
    pub approved_requests: usize,
    pub pending_requests: usize,
    pub rejected_requests: usize,
}

/// Computes the dashboard for a window, optionally restricted to one agent
pub fn compute(
    customers: &[Customer],
    requests: &[ChangeRequest],
    ledger: &[PaymentRecord],
    period: ReportingPeriod,
    agent: Option<AgentId>,
    today: NaiveDate,
) -> AgencyMetrics {
    let customers: Vec<&Customer> = customers
        .iter()
        .filter(|c| agent.map_or(true, |a| c.assigned_agent_id == a))
        .collect();
    let requests: Vec<&ChangeRequest> = requests
        .iter()
        .filter(|r| agent.map_or(true, |a| r.agent_id == a))
        .collect();

    let customer_ids: Vec<CustomerId> = customers.iter().map(|c| c.id).collect();
    let in_window = |date: NaiveDate| period.contains(date, today);

    let new_customers = customers
        .iter()
        .filter(|c| in_window(c.date_created.date_naive()))
        .count();

    let new_policies = requests
        .iter()
        .filter(|r| {
            matches!(r.kind, RequestKind::NewPolicy { .. })
                && r.status == RequestStatus::Approved
                && in_window(r.created_at.date_naive())
        })
        .count();

    let windowed_payments: Vec<&PaymentRecord> = ledger
        .iter()
        .filter(|p| customer_ids.contains(&p.customer_id) && in_window(p.recorded_at.date_naive()))
        .collect();
    let payments_received = windowed_payments.len();
    let total_revenue = windowed_payments
        .iter()
        .fold(Money::zero(Currency::Usd), |acc, p| acc + p.amount);

    let mut outstanding_balance = Money::zero(Currency::Usd);
    let mut active_customers = 0;
    let mut overdue_customers = 0;
    let mut inactive_customers = 0;
    for &customer in &customers {
        let summary = assess(customer, ledger, today);
        outstanding_balance = outstanding_balance + summary.outstanding_balance;

        match summary.effective_status {
            PolicyStatus::Cancelled => {}
            PolicyStatus::Active => active_customers += 1,
            PolicyStatus::Overdue => overdue_customers += 1,
            PolicyStatus::Inactive => inactive_customers += 1,
        }
    }

    let windowed_requests: Vec<&&ChangeRequest> = requests
        .iter()
        .filter(|r| in_window(r.created_at.date_naive()))
        .collect();
    let count_status = |status: RequestStatus| {
        windowed_requests
            .iter()
            .filter(|r| r.status == status)
            .count()
    };

    AgencyMetrics {
        new_customers,
        new_policies,
        payments_received,
        total_revenue,
        outstanding_balance,
        active_customers,
        overdue_customers,
        inactive_customers,
        approved_requests: count_status(RequestStatus::Approved),
        pending_requests: count_status(RequestStatus::Pending),
        rejected_requests: count_status(RequestStatus::Rejected),
    }
}
