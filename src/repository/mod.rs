pub mod employee;
#[cfg(test)]
pub mod memory;

pub use employee::{EmployeeFilter, EmployeeRepository, PgEmployeeRepository};
