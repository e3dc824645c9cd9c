//! # Employee Management HTTP Handlers
//!
//! 직원 리소스의 RESTful 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/employees` | 직원 생성 | 201 Created |
//! | `GET` | `/employees/{id}` | 직원 조회 | 200 OK / 404 Not Found |
//! | `GET` | `/employees` | 직원 목록 | 200 OK |
//! | `PUT` | `/employees/{id}` | 직원 수정 | 200 OK / 404 Not Found |
//! | `DELETE` | `/employees/{id}` | 직원 삭제 | 204 No Content |
//!
//! 잘못된 JSON 본문은 `web::JsonConfig` 에러 핸들러에서 400으로 변환되고,
//! 저장소 오류는 500으로 응답됩니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use futures_util::TryStreamExt;
use log::debug;

use crate::domain::dto::employees::EmployeeDto;
use crate::errors::AppError;
use crate::services::employees::EmployeeService;

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("employee with id '{}' does not exist", id))
}

/// 직원 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "firstName": "Isy", "lastName": "Fawcer", "email": "gauaa@qas.df" }
/// ```
///
/// # 응답 (201 Created)
///
/// ```json
/// { "id": "65a0f1c2d3e4f5a6b7c8d9e0", "firstName": "Isy", "lastName": "Fawcer", "email": "gauaa@qas.df" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/employees \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Isy","lastName":"Fawcer","email":"gauaa@qas.df"}'
/// ```
#[post("")]
pub async fn save_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeeDto>,
) -> Result<HttpResponse, AppError> {
    let saved = service.save(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// 직원 조회 핸들러
///
/// `GET /employees/{id}` - 없으면 404를 반환합니다.
#[get("/{id}")]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get(&id).await?.ok_or_else(|| not_found(&id))?;

    Ok(HttpResponse::Ok().json(employee))
}

/// 직원 목록 핸들러
///
/// `GET /employees` - 저장소 순서 그대로의 JSON 배열 (비어 있을 수 있음)
#[get("")]
pub async fn get_all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees: Vec<EmployeeDto> = service.get_all().await?.try_collect().await?;

    debug!("직원 목록 응답: {}건", employees.len());
    Ok(HttpResponse::Ok().json(employees))
}

/// 직원 수정 핸들러
///
/// `PUT /employees/{id}` - 이름과 이메일만 바뀌며, 본문의 `id`는 무시됩니다.
#[put("/{id}")]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
    payload: web::Json<EmployeeDto>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update(payload.into_inner(), &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 직원 삭제 핸들러
///
/// `DELETE /employees/{id}` - 존재 여부와 관계없이 204를 반환합니다.
#[delete("/{id}")]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
