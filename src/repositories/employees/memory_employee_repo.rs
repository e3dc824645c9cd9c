//! # 메모리 직원 리포지토리
//!
//! 프로세스 메모리에 직원을 보관하는 구현입니다. `STORAGE_BACKEND=memory`로 선택하며,
//! MongoDB 없이 서버를 띄우거나 테스트할 때 사용합니다. 재시작하면 데이터가 사라집니다.
//!
//! 삽입 순서를 유지하며, ID는 MongoDB 구현과 같은 ObjectId 16진수 문자열입니다.
//! 잠금은 `.await` 지점을 넘어 유지되지 않습니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::employees::Employee;
use crate::errors::{AppError, AppResult};

use super::employee_repo::{EmployeeRepository, EmployeeStream};

/// 메모리 기반 직원 리포지토리
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Employee>>> {
        self.records
            .read()
            .map_err(|_| AppError::InternalError("employee store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Employee>>> {
        self.records
            .write()
            .map_err(|_| AppError::InternalError("employee store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> AppResult<Employee> {
        let mut records = self.write()?;

        match employee.assigned_id().map(str::to_owned) {
            None => {
                employee.id = Some(ObjectId::new().to_hex());
                records.push(employee.clone());
            }
            Some(id) => match records.iter_mut().find(|e| e.id.as_deref() == Some(id.as_str())) {
                Some(existing) => *existing = employee.clone(),
                None => records.push(employee.clone()),
            },
        }

        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Employee>> {
        let records = self.read()?;

        Ok(records
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<EmployeeStream> {
        // 호출 시점의 스냅샷
        let snapshot = self.read()?.clone();

        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        self.write()?.retain(|e| e.id.as_deref() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.write()?.clear();
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.read()?.len() as u64)
    }
}
