use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A stored employee record.
///
/// `id` and `created_at` are assigned on creation and never change afterwards.
/// Optional fields default when missing so older stored data keeps loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns a copy with every field set in `patch` overridden.
    pub fn apply(&self, patch: &EmployeePatch) -> Employee {
        Employee {
            id: self.id.clone(),
            first_name: patch.first_name.clone().unwrap_or_else(|| self.first_name.clone()),
            last_name: patch.last_name.clone().unwrap_or_else(|| self.last_name.clone()),
            role: patch.role.clone().unwrap_or_else(|| self.role.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.clone().unwrap_or_else(|| self.phone.clone()),
            status: patch.status.unwrap_or(self.status),
            created_at: self.created_at,
        }
    }
}

/// Fields supplied when creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl NewEmployee {
    pub fn new(first_name: &str, last_name: &str, role: &str, email: &str) -> Self {
        NewEmployee {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            phone: None,
            status: EmployeeStatus::Active,
        }
    }

    pub fn into_employee(self, id: String, created_at: DateTime<Utc>) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            status: self.status,
            created_at,
        }
    }
}

/// Partial update for an employee. `None` keeps the stored value.
///
/// `phone` is doubly optional: `Some(None)` clears the number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeePatch {
    pub fn status(status: EmployeeStatus) -> Self {
        EmployeePatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EmployeePatch::default()
    }
}

/// List filter applied by the console before rendering employees.
///
/// Both criteria are optional and combine with AND. `search` is a
/// case-insensitive substring match on the full name; an empty string
/// matches everyone.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub status: Option<EmployeeStatus>,
    pub search: Option<String>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let matches_status = self.status.map_or(true, |status| employee.status == status);
        let matches_search = match &self.search {
            Some(search) if !search.is_empty() => employee.full_name().to_lowercase().contains(&search.to_lowercase()),
            _ => true,
        };
        matches_status && matches_search
    }

    /// Matches a shift's owner. A missing employee only passes an empty filter.
    pub fn matches_owner(&self, employee: Option<&Employee>) -> bool {
        match employee {
            Some(employee) => self.matches(employee),
            None => self.status.is_none() && self.search.as_deref().map_or(true, str::is_empty),
        }
    }
}
