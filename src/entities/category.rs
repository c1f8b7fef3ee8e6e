// 🏷️ Category Entity - per-user expense/income buckets
//
// A category belongs to exactly one user. The pair (name, user_id) is kept
// unique by the seeder, which looks it up before every insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,

    /// Display name, e.g. "Food & Dining"
    pub name: String,

    /// UI color, e.g. "#FF6B6B"
    pub color: String,

    /// UI glyph, e.g. "🍽️"
    pub icon: String,

    pub user_id: String,

    /// System-provided rather than user-authored
    pub is_default: bool,

    pub created_at: DateTime<Utc>,
}

impl Category {
    /// New user-authored category with a fresh id
    pub fn new(name: &str, color: &str, icon: &str, user_id: &str) -> Self {
        Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            user_id: user_id.to_string(),
            is_default: false,
            created_at: Utc::now(),
        }
    }

    /// New system-provided category
    pub fn default_for(name: &str, color: &str, icon: &str, user_id: &str) -> Self {
        let mut category = Self::new(name, color, icon, user_id);
        category.is_default = true;
        category
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Find a category by exact name in an already-fetched list.
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}
