// FinExp Seed - Core Library
// Demo-data seeding for the finance schema, plus the request validation
// adapter used by the HTTP layer.

pub mod calendar;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod fixtures;
pub mod logging;
pub mod password;
pub mod seeder;
pub mod store;

#[cfg(feature = "server")]
pub mod validation;

// Re-export commonly used types
pub use calendar::MonthWindow;
pub use config::{DemoAccount, SeedConfig};
pub use db::{setup_database, SqliteStore, Table};
pub use entities::{Budget, BudgetPeriod, Category, Transaction, TransactionType, User};
pub use errors::{ConfigError, SeedError};
pub use fixtures::{
    BudgetDef, CategoryDef, FixtureSet, TransactionDef,
    DEFAULT_CATEGORIES, SAMPLE_BUDGETS, SAMPLE_TRANSACTIONS,
};
pub use seeder::{SeedReport, Seeder};
pub use store::SeedStore;

#[cfg(feature = "server")]
pub use validation::{
    check_query, validate_request, FieldError, Location, QueryRules, Rule, ValidationReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
