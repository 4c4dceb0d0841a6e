// Read access to establishment staff.
//
// MySQL layout (table `employees`):
//   id BIGINT, establishment_id BIGINT, name VARCHAR(255), services JSON

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::establishments::models::Employee;
use crate::storage::{InMemoryRepository, JsonFileRepository};

#[async_trait]
pub trait EmployeeRepository: Repository<Employee, i64> {
    /// Roster of one establishment
    async fn list_by_establishment(&self, establishment_id: i64) -> Result<Vec<Employee>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|employee| employee.establishment_id == establishment_id)
            .collect())
    }
}

impl EmployeeRepository for JsonFileRepository<Employee> {}

impl EmployeeRepository for InMemoryRepository<Employee> {}

const SELECT_EMPLOYEES: &str = "SELECT id, establishment_id, name, services FROM employees";

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    establishment_id: i64,
    name: String,
    services: Option<Json<Vec<i64>>>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            establishment_id: row.establishment_id,
            name: row.name,
            services: row.services.map(|ids| ids.0).unwrap_or_default(),
        }
    }
}

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Employee, i64> for MySqlEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let sql = format!("{} WHERE id = ?", SELECT_EMPLOYEES);
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Employee::from))
    }

    async fn list(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn list_by_establishment(&self, establishment_id: i64) -> Result<Vec<Employee>> {
        let sql = format!("{} WHERE establishment_id = ? ORDER BY id", SELECT_EMPLOYEES);
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(establishment_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}
