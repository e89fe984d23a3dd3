//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use roster_core::{
  Contact, ContactId, NewContact,
  store::ContactStore,
};

use crate::{
  encode::{EncodedContact, RawContact},
  schema::SCHEMA,
  Error, Result,
};

const SELECT_CONTACT: &str =
  "SELECT id, name, date_of_birth, married, phone, salary FROM contacts";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert_batch(&self, contacts: Vec<NewContact>) -> Result<()> {
    if contacts.is_empty() {
      return Ok(());
    }

    let rows = contacts
      .iter()
      .map(EncodedContact::encode)
      .collect::<Result<Vec<_>>>()?;

    self
      .conn
      .call(move |conn| {
        // Dropping `tx` without committing rolls every row back.
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO contacts (name, date_of_birth, married, phone, salary)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for row in &rows {
            stmt.execute(rusqlite::params![
              row.name,
              row.date_of_birth,
              row.married,
              row.phone,
              row.salary,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("{SELECT_CONTACT} WHERE id = ?1"),
            rusqlite::params![id],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_all(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_CONTACT} ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?))
      .await?;
    Ok(n as u64)
  }

  async fn update(&self, contact: Contact) -> Result<()> {
    let (id, fields) = contact.into_parts();
    let row = EncodedContact::encode(&fields)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET name = ?1, date_of_birth = ?2, married = ?3, phone = ?4, salary = ?5
           WHERE id = ?6",
          rusqlite::params![
            row.name,
            row.date_of_birth,
            row.married,
            row.phone,
            row.salary,
            id,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }

  async fn delete(&self, id: ContactId) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }
}
