//! Core data models for the Raise Eligibility Engine.

mod coefficient;
mod employee;
mod raise_result;
mod title;

pub use coefficient::CoefficientValue;
pub use employee::{EmployeeRecord, Role};
pub use raise_result::{AuditStep, AuditTrace, RaiseDecision, RaiseInput, RaiseResult};
pub use title::{SchoolLevel, TitleRank};
