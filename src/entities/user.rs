// 👤 User Entity - owner of categories, transactions and budgets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Unique lookup key
    pub email: String,

    pub name: String,

    /// bcrypt hash; never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, name: &str, password_hash: String) -> Self {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("demo@finexp.com", "Demo User", "$2b$10$abc".to_string());
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("demo@finexp.com"));
        assert!(!json.contains("$2b$10$abc"));
        assert!(!json.contains("passwordHash"));
    }
}
