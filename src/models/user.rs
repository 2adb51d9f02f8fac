use serde::{Deserialize, Serialize};

/// Authenticated user profile / assignee summary as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default = "default_avatar_color")]
    pub avatar_color: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: Option<Department>,
}

fn default_avatar_color() -> String {
    "#3B82F6".to_string()
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_backend_shape() {
        let json = serde_json::json!({
            "id": 1,
            "username": "admin",
            "email": "admin@empresa.com",
            "name": "Administrador",
            "avatar_color": "#EF4444",
            "role": "admin",
            "department_id": 1,
            "department": { "id": 1, "name": "Tecnologia", "description": "TI" },
            "is_active": true,
            "initials": "A"
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.department.unwrap().name, "Tecnologia");
    }

    #[test]
    fn missing_profile_fields_take_defaults() {
        let json = serde_json::json!({ "id": 7, "name": "Ana Costa" });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.avatar_color, "#3B82F6");
        assert!(user.department.is_none());
    }
}
