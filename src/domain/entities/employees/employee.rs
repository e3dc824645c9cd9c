//! Employee Entity Implementation
//!
//! MongoDB `employees` 컬렉션의 문서와 1:1로 대응되는 직원 엔티티입니다.

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 직원 엔티티
///
/// `id`는 문서의 `_id`에 저장되며, 최초 저장 시 리포지토리가 할당한 뒤로는 변경되지 않습니다.
/// 나머지 필드는 camelCase(`firstName`, `lastName`, `email`)로 저장됩니다.
///
/// 24자리 hex ID는 BSON `ObjectId`로 저장되고, 그 외의 ID는 문자열 그대로 저장됩니다.
/// `_class` 등 알 수 없는 필드는 무시합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_document_id",
        deserialize_with = "deserialize_document_id"
    )]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// 아직 저장되지 않은(ID 없는) 직원을 생성합니다.
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
        }
    }

    /// 저장소가 할당한 ID가 있으면 반환합니다.
    ///
    /// 빈 문자열 ID는 할당되지 않은 것으로 취급합니다.
    pub fn assigned_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// 이름과 이메일을 덮어씁니다. `id`는 건드리지 않습니다.
    pub fn update_details(&mut self, first_name: String, last_name: String, email: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
    }
}

/// 직원 ID를 문서의 `_id` 값으로 변환합니다.
///
/// 리포지토리 필터와 직렬화가 같은 규칙을 쓰도록 공유합니다.
pub fn document_id(id: &str) -> Bson {
    match ObjectId::parse_str(id) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.to_string()),
    }
}

fn serialize_document_id<S>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => document_id(id).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

fn deserialize_document_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid.to_hex())),
        Some(Bson::String(id)) => Ok(Some(id)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unsupported _id type: {:?}",
            other.element_type()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_new_employee_has_no_id() {
        let employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());

        assert!(employee.id.is_none());
        assert_eq!(employee.assigned_id(), None);
    }

    #[test]
    fn test_empty_id_is_not_assigned() {
        let mut employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());
        employee.id = Some(String::new());

        assert_eq!(employee.assigned_id(), None);
    }

    #[test]
    fn test_update_details_keeps_id() {
        let mut employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());
        employee.id = Some("65a0f1c2d3e4f5a6b7c8d9e0".into());

        employee.update_details("Isaac".into(), "Fabbbyw".into(), "ertyaa@qas.df".into());

        assert_eq!(employee.assigned_id(), Some("65a0f1c2d3e4f5a6b7c8d9e0"));
        assert_eq!(employee.first_name, "Isaac");
        assert_eq!(employee.last_name, "Fabbbyw");
        assert_eq!(employee.email, "ertyaa@qas.df");
    }

    #[test]
    fn test_document_field_names() {
        let mut employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());
        employee.id = Some("abc".into());

        let document = bson::to_document(&employee).unwrap();

        assert_eq!(document.get_str("_id").unwrap(), "abc");
        assert_eq!(document.get_str("firstName").unwrap(), "Isy");
        assert_eq!(document.get_str("lastName").unwrap(), "Fawcer");
        assert_eq!(document.get_str("email").unwrap(), "gauaa@qas.df");
    }

    #[test]
    fn test_hex_id_is_stored_as_object_id() {
        let oid = ObjectId::new();
        let mut employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());
        employee.id = Some(oid.to_hex());

        let document = bson::to_document(&employee).unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), oid);
    }

    #[test]
    fn test_reads_object_id_keyed_document() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "firstName": "Isy",
            "lastName": "Fawcer",
            "email": "gauaa@qas.df",
            "_class": "com.example.employees.Employee"
        };

        let employee: Employee = bson::from_document(document).unwrap();

        assert_eq!(employee.assigned_id(), Some(oid.to_hex().as_str()));
        assert_eq!(employee.first_name, "Isy");
        assert_eq!(employee.email, "gauaa@qas.df");
    }

    #[test]
    fn test_reads_document_without_id() {
        let document = doc! { "firstName": "Isy", "lastName": "Fawcer", "email": "gauaa@qas.df" };

        let employee: Employee = bson::from_document(document).unwrap();

        assert!(employee.id.is_none());
    }

    #[test]
    fn test_document_id_falls_back_to_string() {
        assert_eq!(document_id("123"), Bson::String("123".into()));
        assert!(matches!(
            document_id("65a0f1c2d3e4f5a6b7c8d9e0"),
            Bson::ObjectId(_)
        ));
    }
}
