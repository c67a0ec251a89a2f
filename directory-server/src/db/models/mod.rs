//! Database Models

pub mod employee;

pub use employee::{Employee, EmployeeDraft, EmployeeId, EmployeePatch, manager_label};
