// Storage seam used by the seeder.
// The backend is passed in explicitly; nothing here holds a global handle.

use crate::entities::{Budget, Category, Transaction, User};
use crate::errors::SeedError;

/// The create/find operations a seed run needs from its store.
///
/// Implementations must not enforce idempotence themselves: the seeder
/// decides which records are looked up first (users, categories) and which
/// are appended unconditionally (transactions, budgets).
pub trait SeedStore {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, SeedError>;

    fn create_user(&self, user: &User) -> Result<(), SeedError>;

    fn find_category(&self, user_id: &str, name: &str) -> Result<Option<Category>, SeedError>;

    fn create_category(&self, category: &Category) -> Result<(), SeedError>;

    /// Every category owned by the user, in creation order.
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>, SeedError>;

    fn create_transaction(&self, transaction: &Transaction) -> Result<(), SeedError>;

    fn create_budget(&self, budget: &Budget) -> Result<(), SeedError>;
}
