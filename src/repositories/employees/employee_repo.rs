//! # 직원 리포지토리 trait
//!
//! 서비스 계층이 의존하는 비동기 저장소 인터페이스입니다.
//! 모든 연산은 논블로킹이며, 저장소 오류는 [`AppError::DatabaseError`](crate::errors::AppError)
//! 등으로 그대로 전파됩니다. 재시도나 트랜잭션은 없습니다.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::entities::employees::Employee;
use crate::errors::AppResult;

/// 저장소가 반환하는 직원 스트림
///
/// 지연 평가되는 유한 스트림이며, 정렬은 저장소가 반환하는 순서를 따릅니다.
pub type EmployeeStream = BoxStream<'static, AppResult<Employee>>;

/// 직원 저장소
///
/// 서비스는 `Arc<dyn EmployeeRepository>`로 구현체를 주입받습니다.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 직원을 저장하고 ID가 채워진 레코드를 반환합니다.
    ///
    /// - ID가 없거나 빈 문자열이면 새 ID(ObjectId 16진수)를 할당해 삽입합니다.
    /// - ID가 있으면 해당 ID의 문서를 교체하며, 없으면 새로 만듭니다(upsert).
    async fn save(&self, employee: Employee) -> AppResult<Employee>;

    /// ID로 직원을 조회합니다. 없으면 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Employee>>;

    /// 모든 직원을 스트림으로 반환합니다.
    ///
    /// 커서 열기 실패는 바깥 `Result`로, 개별 문서 오류는 스트림 항목으로 전달됩니다.
    async fn find_all(&self) -> AppResult<EmployeeStream>;

    /// ID로 직원을 삭제합니다. 존재하지 않는 ID는 오류가 아닙니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    /// 모든 직원을 삭제합니다.
    async fn delete_all(&self) -> AppResult<()>;

    /// 저장된 직원 수
    async fn count(&self) -> AppResult<u64>;
}
