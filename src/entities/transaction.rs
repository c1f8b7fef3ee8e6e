// 💸 Transaction Entity - a single income or expense on a calendar date

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money coming in
    Income,

    /// Money going out
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    /// Always positive; direction comes from `transaction_type`
    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub description: String,
    pub category_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        transaction_type: TransactionType,
        description: &str,
        category_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Self {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            transaction_type,
            description: description.to_string(),
            category_id: category_id.to_string(),
            user_id: user_id.to_string(),
            date,
            created_at: Utc::now(),
        }
    }
}
