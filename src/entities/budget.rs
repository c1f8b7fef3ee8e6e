// 📊 Budget Entity - spending limit for one category over a date window

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetPeriod {
    Monthly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "MONTHLY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MONTHLY" => Some(BudgetPeriod::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub category_id: String,
    pub user_id: String,

    /// Inclusive window; `end_date >= start_date`
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Returns `None` when the window is inverted.
    pub fn new(
        amount: f64,
        period: BudgetPeriod,
        category_id: &str,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Option<Self> {
        if end_date < start_date {
            return None;
        }

        Some(Budget {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            period,
            category_id: category_id.to_string(),
            user_id: user_id.to_string(),
            start_date,
            end_date,
            created_at: Utc::now(),
        })
    }
}
