//! 직원 매퍼
//!
//! [`Employee`] 엔티티와 [`EmployeeDto`] 사이의 무손실 필드 복사를 제공합니다.
//! `to_dto(to_entity(dto)) == dto`가 모든 DTO에 대해 성립합니다.

use crate::domain::dto::employees::EmployeeDto;
use crate::domain::entities::employees::Employee;

/// 엔티티를 DTO로 변환합니다.
pub fn to_dto(employee: Employee) -> EmployeeDto {
    let Employee {
        id,
        first_name,
        last_name,
        email,
    } = employee;

    EmployeeDto {
        id,
        first_name,
        last_name,
        email,
    }
}

/// DTO를 엔티티로 변환합니다. 비어 있는 `id`도 그대로 복사됩니다.
pub fn to_entity(dto: EmployeeDto) -> Employee {
    let EmployeeDto {
        id,
        first_name,
        last_name,
        email,
    } = dto;

    Employee {
        id,
        first_name,
        last_name,
        email,
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        to_dto(employee)
    }
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        to_entity(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dto_copies_all_fields() {
        let employee = Employee {
            id: Some("65a0f1c2d3e4f5a6b7c8d9e0".into()),
            first_name: "Isy".into(),
            last_name: "Fawcer".into(),
            email: "gauaa@qas.df".into(),
        };

        let dto = to_dto(employee);

        assert_eq!(dto.id.as_deref(), Some("65a0f1c2d3e4f5a6b7c8d9e0"));
        assert_eq!(dto.first_name, "Isy");
        assert_eq!(dto.last_name, "Fawcer");
        assert_eq!(dto.email, "gauaa@qas.df");
    }

    #[test]
    fn test_to_entity_keeps_missing_id() {
        let entity = to_entity(EmployeeDto::new("Zertyu", "Krawl", "zaza@wer.hu"));

        assert!(entity.id.is_none());
        assert_eq!(entity.first_name, "Zertyu");
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let samples = [
            EmployeeDto::new("Isy", "Fawcer", "gauaa@qas.df"),
            EmployeeDto::new("Zertyu", "Krawl", "zaza@wer.hu").with_id("123"),
            EmployeeDto::new("", "", "").with_id(""),
            EmployeeDto::new("Ünïcødé", "名前", "a+b@c.d").with_id("65a0f1c2d3e4f5a6b7c8d9e0"),
        ];

        for dto in samples {
            assert_eq!(to_dto(to_entity(dto.clone())), dto);
        }
    }

    #[test]
    fn test_from_impls_match_functions() {
        let dto = EmployeeDto::new("Isy", "Fawcer", "gauaa@qas.df").with_id("1");
        let entity: Employee = dto.clone().into();

        assert_eq!(entity, to_entity(dto.clone()));
        assert_eq!(EmployeeDto::from(entity), dto);
    }
}
