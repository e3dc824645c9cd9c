//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 컨트롤러 계층에 해당하며, ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (JSON)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   EmployeeService                             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   EmployeeRepository (MongoDB / Memory)       ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<EmployeeService>`로 주입되며, 핸들러는 서비스 결과를
//! HTTP 상태 코드로 바꾸는 일만 합니다. 에러는 `?`로 전파되어
//! [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이 응답을 만듭니다.
//!
//! ## 모듈 구성
//!
//! - **`employees`**: 직원 CRUD 엔드포인트
//!   - 직원 생성 (`POST /employees`)
//!   - 직원 조회 (`GET /employees/{id}`)
//!   - 직원 목록 (`GET /employees`)
//!   - 직원 수정 (`PUT /employees/{id}`)
//!   - 직원 삭제 (`DELETE /employees/{id}`)

pub mod employees;
