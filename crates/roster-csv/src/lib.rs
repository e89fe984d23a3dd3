//! Semicolon-delimited CSV importer for Roster.
//!
//! Converts uploaded bytes into [`roster_core::NewContact`] values. Pure
//! synchronous; no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! let csv = b"name;dateofbirth;married;phone;salary\nJohn Doe;31.12.1990;true;+15551234;50000.00";
//! let contacts = roster_csv::parse(csv).unwrap();
//! assert_eq!(contacts[0].name, "John Doe");
//! ```

pub mod error;
mod parse;

pub use error::{Error, Result};
use roster_core::NewContact;

/// Header names recognised by the importer, compared case-insensitively.
pub mod header {
  pub const NAME: &str = "name";
  pub const DATE_OF_BIRTH: &str = "dateofbirth";
  pub const MARRIED: &str = "married";
  pub const PHONE: &str = "phone";
  pub const SALARY: &str = "salary";
}

/// Field delimiter of the upload format.
pub const DELIMITER: u8 = b';';

/// Date layout of the `dateofbirth` column, in `chrono` syntax.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a whole upload into contacts, in file order.
///
/// All-or-nothing: the first row that fails to convert aborts the parse and
/// no contacts are returned.
pub fn parse(input: &[u8]) -> Result<Vec<NewContact>> { parse::parse_all(input) }
