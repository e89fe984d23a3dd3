//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout version; there are no migrations yet.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted rows from ever being handed out again.
CREATE TABLE IF NOT EXISTS contacts (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT    NOT NULL CHECK (name <> ''),
    date_of_birth  TEXT    NOT NULL,   -- ISO 8601 calendar date, YYYY-MM-DD
    married        INTEGER NOT NULL DEFAULT 0 CHECK (married IN (0, 1)),
    phone          TEXT    NOT NULL DEFAULT '',
    salary         TEXT    NOT NULL DEFAULT '0.00'   -- decimal, two places
);

PRAGMA user_version = 1;
";
