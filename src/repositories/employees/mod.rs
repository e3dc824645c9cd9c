//! 직원 데이터 액세스 계층
//!
//! - [`employee_repo`] - 저장소 trait 정의
//! - [`mongo_employee_repo`] - MongoDB 컬렉션 구현
//! - [`memory_employee_repo`] - 메모리 구현 (개발/테스트용)

pub mod employee_repo;
pub mod mongo_employee_repo;
pub mod memory_employee_repo;

pub use employee_repo::{EmployeeRepository, EmployeeStream};
pub use memory_employee_repo::InMemoryEmployeeRepository;
pub use mongo_employee_repo::MongoEmployeeRepository;
