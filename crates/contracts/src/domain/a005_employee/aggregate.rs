use crate::domain::common::{null_as_empty, Entity, EntityId};
use crate::shared::query::Searchable;
use serde::{Deserialize, Serialize};

/// Employee, only read by this application (sales-rep lookup and listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub office_code: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Entity for Employee {
    type Payload = Employee;

    const BASE_PATH: &'static str = "/employees";

    fn id(&self) -> EntityId {
        self.id
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn element_name() -> &'static str {
        "employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone().unwrap_or_default(),
            self.job_title.clone().unwrap_or_default(),
            self.id.to_string(),
        ]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "officeCode" => self.office_code.clone(),
            "jobTitle" => self.job_title.clone(),
            _ => None,
        }
    }
}

/// Display name of the employee with `id`, if loaded
pub fn employee_name(employees: &[Employee], id: Option<EntityId>) -> Option<String> {
    let id = id?;
    employees.iter().find(|e| e.id == id).map(Employee::full_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_and_search() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            {"id": 1165, "firstName": "Leslie", "lastName": "Jennings",
             "email": "ljennings@classicmodelcars.com", "jobTitle": "Sales Rep"},
            {"id": 1002, "firstName": "Diane", "lastName": "Murphy", "jobTitle": "President"}
        ]))
        .unwrap();

        assert_eq!(employee_name(&employees, Some(1165)).as_deref(), Some("Leslie Jennings"));
        assert_eq!(employee_name(&employees, Some(9)), None);
        assert_eq!(employee_name(&employees, None), None);
        assert!(employees[0].matches_search("sales ljennings"));
        assert!(!employees[1].matches_search("sales"));
    }
}
