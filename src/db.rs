use crate::entities::{Budget, BudgetPeriod, Category, Transaction, TransactionType, User};
use crate::errors::SeedError;
use crate::store::SeedStore;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

/// Create the finance schema if it does not exist yet.
pub fn setup_database(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            color TEXT NOT NULL,
            icon TEXT NOT NULL,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            is_default INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_categories_user_name ON categories(user_id, name);

        CREATE TABLE IF NOT EXISTS transactions (
            id TEXT PRIMARY KEY,
            amount REAL NOT NULL CHECK (amount > 0),
            type TEXT NOT NULL CHECK (type IN ('INCOME', 'EXPENSE')),
            description TEXT NOT NULL,
            category_id TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_transactions_user_date ON transactions(user_id, date);

        CREATE TABLE IF NOT EXISTS budgets (
            id TEXT PRIMARY KEY,
            amount REAL NOT NULL CHECK (amount > 0),
            period TEXT NOT NULL CHECK (period IN ('MONTHLY')),
            category_id TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            created_at TEXT NOT NULL,
            CHECK (end_date >= start_date)
        );
        CREATE INDEX IF NOT EXISTS idx_budgets_user ON budgets(user_id);",
    )?;

    Ok(())
}

/// Tables that can be counted, so table names never come from callers as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Categories,
    Transactions,
    Budgets,
}

impl Table {
    fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Categories => "categories",
            Table::Transactions => "transactions",
            Table::Budgets => "budgets",
        }
    }
}

/// SQLite-backed store. Owns its connection; dropping or closing releases it.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file in WAL mode and ensure the schema.
    pub fn open(path: &Path) -> Result<Self, SeedError> {
        let what = || format!("open database {}", path.display());
        let conn = Connection::open(path).map_err(|e| SeedError::lookup(what(), e))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .map_err(|e| SeedError::write(what(), e))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, SeedError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SeedError::lookup("open in-memory database", e))?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, SeedError> {
        setup_database(&conn).map_err(|e| SeedError::write("set up schema", e))?;
        Ok(SqliteStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), SeedError> {
        self.conn
            .close()
            .map_err(|(_, e)| SeedError::write("close database", e))
    }

    pub fn count(&self, table: Table) -> Result<i64, SeedError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        self.conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| SeedError::lookup(format!("count {}", table.name()), e))
    }

    pub fn transactions_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, SeedError> {
        let what = || format!("transactions for user {}", user_id);
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, amount, type, description, category_id, user_id, date, created_at
                 FROM transactions
                 WHERE user_id = ?1
                 ORDER BY date, rowid",
            )
            .map_err(|e| SeedError::lookup(what(), e))?;

        let transactions = stmt
            .query_map([user_id], transaction_from_row)
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| SeedError::lookup(what(), e))?;

        Ok(transactions)
    }

    pub fn budgets_for_user(&self, user_id: &str) -> Result<Vec<Budget>, SeedError> {
        let what = || format!("budgets for user {}", user_id);
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, amount, period, category_id, user_id, start_date, end_date, created_at
                 FROM budgets
                 WHERE user_id = ?1
                 ORDER BY rowid",
            )
            .map_err(|e| SeedError::lookup(what(), e))?;

        let budgets = stmt
            .query_map([user_id], budget_from_row)
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| SeedError::lookup(what(), e))?;

        Ok(budgets)
    }
}

impl SeedStore for SqliteStore {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, SeedError> {
        self.conn
            .query_row(
                "SELECT id, email, name, password_hash, created_at FROM users WHERE email = ?1",
                [email],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        name: row.get(2)?,
                        password_hash: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(|e| SeedError::lookup(format!("user {}", email), e))
    }

    fn create_user(&self, user: &User) -> Result<(), SeedError> {
        self.conn
            .execute(
                "INSERT INTO users (id, email, name, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![user.id, user.email, user.name, user.password_hash, user.created_at],
            )
            .map_err(|e| SeedError::write(format!("user {}", user.email), e))?;

        debug!(user_id = %user.id, "inserted user");
        Ok(())
    }

    fn find_category(&self, user_id: &str, name: &str) -> Result<Option<Category>, SeedError> {
        self.conn
            .query_row(
                "SELECT id, name, color, icon, user_id, is_default, created_at
                 FROM categories
                 WHERE user_id = ?1 AND name = ?2
                 ORDER BY rowid
                 LIMIT 1",
                params![user_id, name],
                category_from_row,
            )
            .optional()
            .map_err(|e| SeedError::lookup(format!("category {}", name), e))
    }

    fn create_category(&self, category: &Category) -> Result<(), SeedError> {
        self.conn
            .execute(
                "INSERT INTO categories (id, name, color, icon, user_id, is_default, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    category.id,
                    category.name,
                    category.color,
                    category.icon,
                    category.user_id,
                    category.is_default,
                    category.created_at,
                ],
            )
            .map_err(|e| SeedError::write(format!("category {}", category.name), e))?;

        debug!(category_id = %category.id, "inserted category");
        Ok(())
    }

    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>, SeedError> {
        let what = || format!("categories for user {}", user_id);
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, color, icon, user_id, is_default, created_at
                 FROM categories
                 WHERE user_id = ?1
                 ORDER BY rowid",
            )
            .map_err(|e| SeedError::lookup(what(), e))?;

        let categories = stmt
            .query_map([user_id], category_from_row)
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| SeedError::lookup(what(), e))?;

        Ok(categories)
    }

    fn create_transaction(&self, tx: &Transaction) -> Result<(), SeedError> {
        self.conn
            .execute(
                "INSERT INTO transactions (
                    id, amount, type, description, category_id, user_id, date, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    tx.id,
                    tx.amount,
                    tx.transaction_type.as_str(),
                    tx.description,
                    tx.category_id,
                    tx.user_id,
                    tx.date,
                    tx.created_at,
                ],
            )
            .map_err(|e| SeedError::write(format!("transaction {}", tx.description), e))?;

        Ok(())
    }

    fn create_budget(&self, budget: &Budget) -> Result<(), SeedError> {
        self.conn
            .execute(
                "INSERT INTO budgets (
                    id, amount, period, category_id, user_id, start_date, end_date, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    budget.id,
                    budget.amount,
                    budget.period.as_str(),
                    budget.category_id,
                    budget.user_id,
                    budget.start_date,
                    budget.end_date,
                    budget.created_at,
                ],
            )
            .map_err(|e| SeedError::write(format!("budget for category {}", budget.category_id), e))?;

        Ok(())
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        icon: row.get(3)?,
        user_id: row.get(4)?,
        is_default: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let raw_type: String = row.get(2)?;
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        transaction_type: parse_column(2, &raw_type, TransactionType::parse)?,
        description: row.get(3)?,
        category_id: row.get(4)?,
        user_id: row.get(5)?,
        date: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
    let raw_period: String = row.get(2)?;
    Ok(Budget {
        id: row.get(0)?,
        amount: row.get(1)?,
        period: parse_column(2, &raw_period, BudgetPeriod::parse)?,
        category_id: row.get(3)?,
        user_id: row.get(4)?,
        start_date: row.get(5)?,
        end_date: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn parse_column<T>(idx: usize, raw: &str, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    parse(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, format!("unknown value {:?}", raw).into())
    })
}
