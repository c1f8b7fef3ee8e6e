// 🌱 Fixture Seeder
//
// Runs strictly in order: user → categories → category re-fetch →
// transactions → budgets. Later steps need ids produced by earlier ones.
//
// Idempotence:
// - the user is looked up by email and never updated once it exists
// - each default category is looked up by (name, user) before insert
// - transactions and budgets are appended on every run, so a second run
//   doubles them (demo reset). Making them idempotent needs a pre-clear
//   step or a stable synthetic key.
//
// No transaction wraps the run: a failure part way leaves what was already
// written. The category lookup-then-insert races if two runs overlap.

use crate::calendar::MonthWindow;
use crate::config::DEFAULT_BCRYPT_COST;
use crate::entities::{find_by_name, Budget, Category, Transaction, User};
use crate::errors::SeedError;
use crate::fixtures::{BudgetDef, CategoryDef, FixtureSet, TransactionDef};
use crate::password::hash_password;
use crate::store::SeedStore;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Everything one seed run produced.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub user: User,
    pub categories: Vec<Category>,
    pub categories_created: usize,
    pub categories_existing: usize,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

pub struct Seeder<'a, S: SeedStore> {
    store: &'a S,
    today: NaiveDate,
    bcrypt_cost: u32,
}

impl<'a, S: SeedStore> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Seeder {
            store,
            today: Local::now().date_naive(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Pin the run date; sample dates and budget windows derive from its month.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn month(&self) -> MonthWindow {
        MonthWindow::containing(self.today)
    }

    /// Upsert keyed by email. An existing user is returned untouched.
    pub fn ensure_demo_user(&self, email: &str, name: &str, password: &str) -> Result<User, SeedError> {
        if let Some(existing) = self.store.find_user_by_email(email)? {
            info!("✅ Demo user already exists: {}", existing.email);
            return Ok(existing);
        }

        let user = User::new(email, name, hash_password(password, self.bcrypt_cost)?);
        self.store.create_user(&user)?;
        info!("✅ Created demo user: {}", user.email);
        Ok(user)
    }

    /// Create each missing definition in order, then return all of the user's categories.
    pub fn ensure_default_categories(
        &self,
        user: &User,
        defs: &[CategoryDef],
    ) -> Result<Vec<Category>, SeedError> {
        self.ensure_categories_counted(user, defs)
            .map(|(categories, _)| categories)
    }

    fn ensure_categories_counted(
        &self,
        user: &User,
        defs: &[CategoryDef],
    ) -> Result<(Vec<Category>, usize), SeedError> {
        let mut created = 0;

        for def in defs {
            if self.store.find_category(&user.id, def.name)?.is_some() {
                info!("✅ Category already exists: {}", def.name);
                continue;
            }

            let category = Category::default_for(def.name, def.color, def.icon, &user.id);
            self.store.create_category(&category)?;
            created += 1;
            info!("✅ Created category: {}", category.name);
        }

        Ok((self.store.list_categories(&user.id)?, created))
    }

    /// One insert per definition, no existence check.
    pub fn seed_sample_transactions(
        &self,
        user: &User,
        categories: &[Category],
        defs: &[TransactionDef],
    ) -> Result<Vec<Transaction>, SeedError> {
        let month = self.month();
        let mut created = Vec::with_capacity(defs.len());

        for def in defs {
            if def.amount.is_nan() || def.amount <= 0.0 {
                return Err(SeedError::InvalidFixture(format!(
                    "transaction \"{}\" has non-positive amount {}",
                    def.description, def.amount
                )));
            }
            let date = month.day(def.day).ok_or_else(|| {
                SeedError::InvalidFixture(format!(
                    "transaction \"{}\" is on day {}, which {} does not have",
                    def.description,
                    def.day,
                    month.start.format("%B %Y")
                ))
            })?;
            let category = resolve_category(user, categories, def.category)?;

            let transaction = Transaction::new(
                def.amount,
                def.transaction_type,
                def.description,
                &category.id,
                &user.id,
                date,
            );
            self.store.create_transaction(&transaction)?;
            info!("✅ Created transaction: {}", transaction.description);
            created.push(transaction);
        }

        Ok(created)
    }

    /// One insert per definition, each spanning the current month.
    pub fn seed_sample_budgets(
        &self,
        user: &User,
        categories: &[Category],
        defs: &[BudgetDef],
    ) -> Result<Vec<Budget>, SeedError> {
        let month = self.month();
        let mut created = Vec::with_capacity(defs.len());

        for def in defs {
            if def.amount.is_nan() || def.amount <= 0.0 {
                return Err(SeedError::InvalidFixture(format!(
                    "budget for \"{}\" has non-positive amount {}",
                    def.category, def.amount
                )));
            }
            let category = resolve_category(user, categories, def.category)?;

            let budget = Budget::new(def.amount, def.period, &category.id, &user.id, month.start, month.end)
                .ok_or_else(|| SeedError::InvalidFixture(format!("budget for \"{}\" ends before it starts", def.category)))?;
            self.store.create_budget(&budget)?;
            info!("✅ Created budget for category: {}", category.name);
            created.push(budget);
        }

        Ok(created)
    }

    /// Run the whole sequence for one demo account.
    pub fn run(&self, email: &str, name: &str, password: &str, fixtures: &FixtureSet) -> Result<SeedReport, SeedError> {
        info!("🌱 Starting database seed...");

        let user = self.ensure_demo_user(email, name, password)?;
        let (categories, categories_created) = self.ensure_categories_counted(&user, &fixtures.categories)?;
        let transactions = self.seed_sample_transactions(&user, &categories, &fixtures.transactions)?;
        let budgets = self.seed_sample_budgets(&user, &categories, &fixtures.budgets)?;

        info!("🎉 Database seed completed successfully!");

        Ok(SeedReport {
            categories_existing: fixtures.categories.len().saturating_sub(categories_created),
            user,
            categories,
            categories_created,
            transactions,
            budgets,
        })
    }
}

fn resolve_category<'c>(user: &User, categories: &'c [Category], name: &str) -> Result<&'c Category, SeedError> {
    find_by_name(categories, name)
        .filter(|c| c.is_owned_by(&user.id))
        .ok_or_else(|| SeedError::ReferenceNotFound {
            category: name.to_string(),
            user_id: user.id.clone(),
        })
}
