//! 직원 DTO
//!
//! 요청과 응답 모두에 사용되는 직원의 와이어 표현입니다.
//!
//! ```json
//! { "id": "65a0f1c2d3e4f5a6b7c8d9e0", "firstName": "Isy", "lastName": "Fawcer", "email": "gauaa@qas.df" }
//! ```

use serde::{Deserialize, Serialize};

/// 직원 데이터 전송 객체
///
/// 엔티티와 같은 모양이며, `id`는 저장 전까지 비어 있습니다.
/// 입력 시 `id`는 선택이고, 응답에서는 값이 없으면 생략됩니다.
/// 필드 존재 여부 외의 검증은 하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDto {
    /// ID 없는 DTO를 생성합니다.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// 주어진 ID를 가진 사본을 반환합니다.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
