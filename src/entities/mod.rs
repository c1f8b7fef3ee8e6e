// Entity Models
// Every record carries a UUID string id and a UTC creation timestamp.
// The user owns everything else; transactions and budgets point at one category.

pub mod user;
pub mod category;
pub mod transaction;
pub mod budget;

pub use user::User;
pub use category::{find_by_name, Category};
pub use transaction::{Transaction, TransactionType};
pub use budget::{Budget, BudgetPeriod};
