use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Staff roles in the tutoring center
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,     // center administrator
    Manager,   // branch manager
    Teacher,   // class teacher
    Assistant, // teaching assistant
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const MANAGER: &'static str = "manager";
    pub const TEACHER: &'static str = "teacher";
    pub const ASSISTANT: &'static str = "assistant";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }

    /// Roles allowed to grade homework for a lesson. Managers run
    /// dashboards but do not grade.
    pub fn grading_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Teacher, &Self::Assistant]
    }

    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Manager, &Self::Teacher, &Self::Assistant]
    }

    pub fn can_grade(&self) -> bool {
        Self::grading_roles().contains(&self)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::MANAGER => Ok(UserRole::Manager),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ASSISTANT => Ok(UserRole::Assistant),
            _ => Err(serde::de::Error::custom(format!(
                "invalid user role: '{s}'. supported roles: admin, manager, teacher, assistant"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Manager => write!(f, "{}", UserRole::MANAGER),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Assistant => write!(f, "{}", UserRole::ASSISTANT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "teacher" => Ok(UserRole::Teacher),
            "assistant" => Ok(UserRole::Assistant),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// Resolved operator identity.
//
// Always passed in explicitly by the host after authentication; the
// core never reads ambient auth state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct Operator {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_roles() {
        assert!(UserRole::Teacher.can_grade());
        assert!(UserRole::Assistant.can_grade());
        assert!(UserRole::Admin.can_grade());
        assert!(!UserRole::Manager.can_grade());
    }

    #[test]
    fn test_role_round_trip() {
        use std::str::FromStr;
        for role in UserRole::all_roles() {
            assert_eq!(UserRole::from_str(&role.to_string()).unwrap(), **role);
        }
    }
}
