// Demo dataset definitions
//
// Categories are looked up by name before insert. Transactions and budgets
// name their category and are resolved against the user's category list at
// seed time, so a renamed category surfaces as ReferenceNotFound.

use crate::entities::{BudgetPeriod, TransactionType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDef {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// A sample transaction placed on `day` of the run month.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDef {
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub description: &'static str,
    pub category: &'static str,
    pub day: u32,
}

/// A sample budget spanning the whole run month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDef {
    pub amount: f64,
    pub period: BudgetPeriod,
    pub category: &'static str,
}

const fn category(name: &'static str, color: &'static str, icon: &'static str) -> CategoryDef {
    CategoryDef { name, color, icon }
}

const fn income(amount: f64, description: &'static str, category: &'static str, day: u32) -> TransactionDef {
    TransactionDef {
        amount,
        transaction_type: TransactionType::Income,
        description,
        category,
        day,
    }
}

const fn expense(amount: f64, description: &'static str, category: &'static str, day: u32) -> TransactionDef {
    TransactionDef {
        amount,
        transaction_type: TransactionType::Expense,
        description,
        category,
        day,
    }
}

const fn monthly(amount: f64, category: &'static str) -> BudgetDef {
    BudgetDef {
        amount,
        period: BudgetPeriod::Monthly,
        category,
    }
}

pub const DEFAULT_CATEGORIES: &[CategoryDef] = &[
    category("Food & Dining", "#FF6B6B", "🍽️"),
    category("Transportation", "#4ECDC4", "🚗"),
    category("Shopping", "#45B7D1", "🛍️"),
    category("Entertainment", "#96CEB4", "🎬"),
    category("Bills & Utilities", "#FFEAA7", "💡"),
    category("Healthcare", "#DDA0DD", "🏥"),
    category("Education", "#98D8C8", "📚"),
    category("Travel", "#F7DC6F", "✈️"),
    category("Income", "#82E0AA", "💰"),
    category("Other", "#BB8FCE", "📦"),
];

pub const SAMPLE_TRANSACTIONS: &[TransactionDef] = &[
    income(5000.0, "Salary", "Income", 1),
    income(200.0, "Freelance work", "Income", 15),
    expense(150.0, "Grocery shopping", "Food & Dining", 2),
    expense(45.0, "Restaurant dinner", "Food & Dining", 5),
    expense(80.0, "Gas", "Transportation", 3),
    expense(120.0, "Online shopping", "Shopping", 8),
    expense(25.0, "Coffee", "Food & Dining", 10),
    expense(60.0, "Public transport", "Transportation", 12),
    expense(200.0, "Clothing", "Shopping", 18),
    expense(90.0, "Grocery shopping", "Food & Dining", 20),
];

pub const SAMPLE_BUDGETS: &[BudgetDef] = &[
    monthly(500.0, "Food & Dining"),
    monthly(200.0, "Transportation"),
    monthly(300.0, "Shopping"),
];

/// The full dataset one seed run inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub categories: Vec<CategoryDef>,
    pub transactions: Vec<TransactionDef>,
    pub budgets: Vec<BudgetDef>,
}

impl Default for FixtureSet {
    fn default() -> Self {
        FixtureSet {
            categories: DEFAULT_CATEGORIES.to_vec(),
            transactions: SAMPLE_TRANSACTIONS.to_vec(),
            budgets: SAMPLE_BUDGETS.to_vec(),
        }
    }
}
