//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조체들을 정의합니다.
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── employees/
//!     ├── mod.rs
//!     └── employee.rs   ← Employee 엔티티
//! ```
//!
//! 엔티티의 `id`는 문서의 `_id`에 문자열로 저장되며, 한 번 할당되면 변경되지 않습니다.

pub mod employees;
