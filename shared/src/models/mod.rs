//! Wire models shared between the directory server and its clients

pub mod employee;

pub use employee::{
    EmployeeCreate, EmployeeResponse, EmployeeRole, EmployeeUpdate, ManagerWithReports,
    UnknownRole,
};
