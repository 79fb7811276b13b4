use async_trait::async_trait;
use futures::StreamExt;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::model::employee::Employee;

/// Columns read for every lookup. `password` is deliberately absent.
const EMPLOYEE_COLUMNS: &str =
    "CAST(id AS BIGINT) AS id, name, email, address, phoneNumber AS phone_number, department";

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Statement execution, row fetch or row decode failed.
    /// Displays the driver message unchanged.
    #[error("{0}")]
    Query(#[from] sqlx::Error),
}

/// Optional exact-match filter on `ms_employee.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    name: Option<String>,
}

impl EmployeeFilter {
    /// An empty `name` is the same as no `name` at all.
    pub fn from_query(name: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// SQL text plus the value bound to `$1`, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub sql: String,
    pub name: Option<String>,
}

impl EmployeeQuery {
    pub fn build(filter: &EmployeeFilter) -> Self {
        let mut sql = format!("SELECT {} FROM ms_employee", EMPLOYEE_COLUMNS);
        let name = filter.name().map(str::to_owned);

        if name.is_some() {
            sql.push_str(" WHERE name = $1");
        }

        Self { sql, name }
    }
}

/// Read access to the employee table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns matching employees in result-set order.
    async fn find_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let query = EmployeeQuery::build(filter);
        debug!(sql = %query.sql, name = ?query.name, "Querying employees");

        let mut statement = sqlx::query_as::<_, Employee>(&query.sql);
        if let Some(name) = &query.name {
            statement = statement.bind(name);
        }

        // The row stream owns the cursor; dropping it on any return releases it.
        let mut rows = statement.fetch(&self.pool);
        let mut employees = Vec::new();

        while let Some(row) = rows.next().await {
            employees.push(row?);
        }

        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn empty_or_missing_name_means_no_filter(#[case] name: Option<&str>) {
        let filter = EmployeeFilter::from_query(name.map(str::to_string));
        assert_eq!(filter.name(), None);
    }

    #[test]
    fn whitespace_name_is_kept_as_is() {
        let filter = EmployeeFilter::from_query(Some("  ".to_string()));
        assert_eq!(filter.name(), Some("  "));
    }

    #[test]
    fn unfiltered_query_selects_all_rows() {
        let query = EmployeeQuery::build(&EmployeeFilter::default());

        assert_eq!(
            query.sql,
            "SELECT CAST(id AS BIGINT) AS id, name, email, address, \
             phoneNumber AS phone_number, department FROM ms_employee"
        );
        assert_eq!(query.name, None);
    }

    #[test]
    fn filtered_query_binds_name_as_parameter() {
        let filter = EmployeeFilter::from_query(Some("Budi".to_string()));
        let query = EmployeeQuery::build(&filter);

        assert!(query.sql.ends_with("FROM ms_employee WHERE name = $1"));
        assert_eq!(query.name.as_deref(), Some("Budi"));
    }

    #[test]
    fn injection_shaped_name_never_reaches_sql_text() {
        let hostile = "' OR '1'='1";
        let filter = EmployeeFilter::from_query(Some(hostile.to_string()));
        let query = EmployeeQuery::build(&filter);

        assert!(!query.sql.contains(hostile));
        assert!(!query.sql.contains("OR"));
        assert_eq!(query.name.as_deref(), Some(hostile));
    }

    #[test]
    fn password_column_is_never_selected() {
        let query = EmployeeQuery::build(&EmployeeFilter::default());
        assert!(!query.sql.contains("password"));
    }

    #[test]
    fn query_error_displays_driver_message() {
        let err = RepositoryError::from(sqlx::Error::Protocol("connection reset".to_string()));
        assert_eq!(
            err.to_string(),
            sqlx::Error::Protocol("connection reset".to_string()).to_string()
        );
    }
}
