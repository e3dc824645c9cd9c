//! # MongoDB 직원 리포지토리
//!
//! `employees` 컬렉션(설정 가능)에 직원 문서를 저장합니다.
//!
//! ## 문서 형식
//!
//! ```json
//! { "_id": ObjectId("65a0f1c2d3e4f5a6b7c8d9e0"), "firstName": "Isy", "lastName": "Fawcer", "email": "gauaa@qas.df" }
//! ```
//!
//! 새 ID는 `ObjectId`로 생성됩니다. hex 형식이 아닌 ID는 문자열 `_id`로 조회하므로
//! 잘못된 형식의 ID로 조회해도 검증 오류가 아니라 단순히 결과가 없습니다.

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use log::{debug, error};
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::domain::entities::employees::{Employee, employee::document_id};
use crate::errors::{AppError, AppResult};

use super::employee_repo::{EmployeeRepository, EmployeeStream};

/// MongoDB 기반 직원 리포지토리
#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<Employee>,
}

impl MongoEmployeeRepository {
    /// 설정된 컬렉션 이름(`EMPLOYEE_COLLECTION`)으로 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db.collection::<Employee>(&DatabaseConfig::employee_collection()))
    }

    /// 주어진 컬렉션 핸들로 리포지토리를 생성합니다.
    pub fn with_collection(collection: Collection<Employee>) -> Self {
        Self { collection }
    }

    /// 컬렉션 이름
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

fn id_filter(id: &str) -> Document {
    doc! { "_id": document_id(id) }
}

fn database_error(operation: &str, e: mongodb::error::Error) -> AppError {
    error!("MongoDB {} 실패: {}", operation, e);
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> AppResult<Employee> {
        match employee.assigned_id().map(str::to_owned) {
            None => {
                employee.id = Some(ObjectId::new().to_hex());

                self.collection
                    .insert_one(&employee)
                    .await
                    .map_err(|e| database_error("insert_one", e))?;

                debug!("직원 문서 삽입: {:?}", employee.id);
            }
            Some(id) => {
                self.collection
                    .replace_one(id_filter(&id), &employee)
                    .upsert(true)
                    .await
                    .map_err(|e| database_error("replace_one", e))?;

                debug!("직원 문서 교체: {}", id);
            }
        }

        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Employee>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| database_error("find_one", e))
    }

    async fn find_all(&self) -> AppResult<EmployeeStream> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| database_error("find", e))?;

        Ok(cursor
            .map_err(|e| database_error("cursor", e))
            .boxed())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(|e| database_error("delete_one", e))?;

        debug!("직원 삭제 id={} deleted_count={}", id, result.deleted_count);
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| database_error("delete_many", e))?;

        debug!("직원 전체 삭제 deleted_count={}", result.deleted_count);
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| database_error("count_documents", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_id_filter_matches_object_id_documents() {
        let oid = ObjectId::new();

        let filter = id_filter(&oid.to_hex());

        assert_eq!(filter.get("_id"), Some(&Bson::ObjectId(oid)));
    }

    #[test]
    fn test_id_filter_keeps_non_hex_ids_as_strings() {
        let filter = id_filter("123");

        assert_eq!(filter.get_str("_id").unwrap(), "123");
    }
}
