//! SQL DDL for initializing the asset store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY (rowid alias, assigned by the engine when omitted)
/// - `name`, `code`, `price` required for every row
/// - `website`, `description` optional metadata
///
/// The existence guard lives in the DDL itself, so re-running the bootstrap
/// is a no-op; there is no separate check-then-create step to race against.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS asset (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    code TEXT NOT NULL,
    price REAL NOT NULL,
    website TEXT NULL,
    description TEXT NULL
);
"#;
