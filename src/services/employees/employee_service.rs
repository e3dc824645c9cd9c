//! # 직원 관리 서비스 구현
//!
//! 핸들러와 리포지토리 사이의 얇은 조율 계층입니다.
//!
//! ```text
//! Handler ──▶ EmployeeService ──▶ EmployeeRepository
//!                  │                     │
//!                  ◀──── employee_mapper ◀┘
//! ```
//!
//! - "찾을 수 없음"은 에러가 아니라 `Ok(None)`으로 반환되며, HTTP 404 변환은 핸들러가 합니다.
//! - 저장소 오류는 잡거나 재시도하지 않고 그대로 전파합니다.
//! - `update`는 조회 후 저장하는 두 단계이며 원자적이지 않습니다. 같은 ID에 대한
//!   동시 수정은 마지막 쓰기가 이깁니다(lost update).

use std::sync::Arc;

use futures_util::stream::BoxStream;
use futures_util::{StreamExt, TryStreamExt};
use log::{debug, info};

use crate::domain::dto::employees::EmployeeDto;
use crate::errors::AppResult;
use crate::mappers::employee_mapper::{to_dto, to_entity};
use crate::repositories::employees::EmployeeRepository;

/// 서비스가 반환하는 직원 DTO 스트림
pub type EmployeeDtoStream = BoxStream<'static, AppResult<EmployeeDto>>;

/// 직원 관리 서비스
///
/// 상태는 리포지토리 핸들뿐이며 요청 간 공유되는 가변 상태가 없습니다.
/// `main`에서 리포지토리를 주입해 생성하고 `web::Data`로 핸들러에 전달합니다.
#[derive(Clone)]
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// 새 직원을 저장하고 ID가 할당된 DTO를 반환합니다.
    pub async fn save(&self, dto: EmployeeDto) -> AppResult<EmployeeDto> {
        let saved = self.employee_repo.save(to_entity(dto)).await?;

        info!("직원 저장 완료: id={}", saved.id.as_deref().unwrap_or_default());
        Ok(to_dto(saved))
    }

    /// ID로 직원을 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(EmployeeDto))` - 직원을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 직원이 없는 경우
    /// * `Err(AppError)` - 저장소 오류
    pub async fn get(&self, id: &str) -> AppResult<Option<EmployeeDto>> {
        let employee = self.employee_repo.find_by_id(id).await?;

        debug!("직원 조회 id={} found={}", id, employee.is_some());
        Ok(employee.map(to_dto))
    }

    /// 모든 직원을 지연 스트림으로 반환합니다. 정렬하지 않습니다.
    pub async fn get_all(&self) -> AppResult<EmployeeDtoStream> {
        let employees = self.employee_repo.find_all().await?;

        Ok(employees.map_ok(to_dto).boxed())
    }

    /// 기존 직원의 이름과 이메일을 덮어씁니다.
    ///
    /// `dto.id`는 무시되며 경로의 `id`가 유지됩니다. 직원이 없으면 아무것도 쓰지 않고
    /// `Ok(None)`을 반환합니다.
    pub async fn update(&self, dto: EmployeeDto, id: &str) -> AppResult<Option<EmployeeDto>> {
        let Some(mut existing) = self.employee_repo.find_by_id(id).await? else {
            debug!("수정 대상 직원 없음: id={}", id);
            return Ok(None);
        };

        existing.update_details(dto.first_name, dto.last_name, dto.email);

        let updated = self.employee_repo.save(existing).await?;

        info!("직원 수정 완료: id={}", id);
        Ok(Some(to_dto(updated)))
    }

    /// ID로 직원을 삭제합니다. 없는 ID도 성공입니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.employee_repo.delete_by_id(id).await?;

        info!("직원 삭제 요청 처리: id={}", id);
        Ok(())
    }

    /// 저장된 직원 수
    pub async fn count(&self) -> AppResult<u64> {
        self.employee_repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::employees::Employee;
    use crate::errors::AppError;
    use crate::repositories::employees::{EmployeeStream, InMemoryEmployeeRepository};
    use async_trait::async_trait;
    use std::collections::HashSet;

    fn service() -> (EmployeeService, Arc<InMemoryEmployeeRepository>) {
        let repo = Arc::new(InMemoryEmployeeRepository::new());
        (EmployeeService::new(repo.clone()), repo)
    }

    fn isy() -> EmployeeDto {
        EmployeeDto::new("Isy", "Fawcer", "gauaa@qas.df")
    }

    /// 모든 연산이 실패하는 저장소
    struct UnavailableRepository;

    #[async_trait]
    impl EmployeeRepository for UnavailableRepository {
        async fn save(&self, _employee: Employee) -> AppResult<Employee> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn find_by_id(&self, _id: &str) -> AppResult<Option<Employee>> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn find_all(&self) -> AppResult<EmployeeStream> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn delete_by_id(&self, _id: &str) -> AppResult<()> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn delete_all(&self) -> AppResult<()> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn count(&self) -> AppResult<u64> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
    }

    #[actix_web::test]
    async fn test_save_then_get_returns_same_employee() {
        let (service, _) = service();

        let saved = service.save(isy()).await.unwrap();
        let id = saved.id.clone().expect("id assigned");

        assert!(!id.is_empty());
        assert_eq!(saved.first_name, "Isy");
        assert_eq!(service.get(&id).await.unwrap(), Some(saved));
    }

    #[actix_web::test]
    async fn test_get_missing_is_empty_not_error() {
        let (service, _) = service();

        assert_eq!(service.get("65a0f1c2d3e4f5a6b7c8d9e0").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_get_all_returns_every_saved_employee() {
        let (service, _) = service();
        let first = service.save(isy()).await.unwrap();
        let second = service
            .save(EmployeeDto::new("Zertyu", "Krawl", "zaza@wer.hu"))
            .await
            .unwrap();

        let all: Vec<EmployeeDto> = service.get_all().await.unwrap().try_collect().await.unwrap();

        assert_eq!(all.len(), 2);
        let ids: HashSet<_> = all.into_iter().map(|dto| dto.id).collect();
        assert_eq!(ids, HashSet::from([first.id, second.id]));
    }

    #[actix_web::test]
    async fn test_get_all_on_empty_store() {
        let (service, _) = service();

        let all: Vec<EmployeeDto> = service.get_all().await.unwrap().try_collect().await.unwrap();

        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn test_update_overwrites_fields_and_preserves_id() {
        let (service, _) = service();
        let saved = service.save(isy()).await.unwrap();
        let id = saved.id.clone().unwrap();

        let changes = EmployeeDto::new("Isaac", "Fabbbyw", "ertyaa@qas.df").with_id("someone-else");
        let updated = service.update(changes, &id).await.unwrap().expect("employee exists");

        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.first_name, "Isaac");
        assert_eq!(updated.last_name, "Fabbbyw");
        assert_eq!(updated.email, "ertyaa@qas.df");
        assert_eq!(service.get(&id).await.unwrap(), Some(updated));
        assert_eq!(service.get("someone-else").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_update_missing_id_creates_nothing() {
        let (service, repo) = service();

        let result = service.update(isy(), "65a0f1c2d3e4f5a6b7c8d9e0").await.unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let (service, repo) = service();
        let saved = service.save(isy()).await.unwrap();
        let id = saved.id.unwrap();

        service.delete(&id).await.unwrap();
        service.delete(&id).await.unwrap();
        service.delete("never-existed").await.unwrap();

        assert_eq!(service.get(&id).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_count_tracks_saved_employees() {
        let (service, _) = service();
        assert_eq!(service.count().await.unwrap(), 0);

        service.save(isy()).await.unwrap();
        service
            .save(EmployeeDto::new("Zertyu", "Krawl", "zaza@wer.hu"))
            .await
            .unwrap();

        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_store_errors_propagate() {
        let service = EmployeeService::new(Arc::new(UnavailableRepository));

        assert!(matches!(service.save(isy()).await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.get("1").await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.get_all().await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.update(isy(), "1").await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.delete("1").await, Err(AppError::DatabaseError(_))));
    }
}
