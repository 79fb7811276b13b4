//! In-memory `EmployeeRepository` for handler tests.

use async_trait::async_trait;

use super::employee::{EmployeeFilter, EmployeeRepository, RepositoryError};
use crate::model::employee::Employee;

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Vec<Employee>,
    failure: Option<String>,
}

impl InMemoryEmployeeRepository {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self {
            rows,
            failure: None,
        }
    }

    /// Every lookup fails with a protocol error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, RepositoryError> {
        if let Some(message) = &self.failure {
            return Err(sqlx::Error::Protocol(message.clone()).into());
        }

        Ok(self
            .rows
            .iter()
            .filter(|e| filter.name().is_none_or(|name| e.name == name))
            .cloned()
            .collect())
    }
}
