//! Row-by-row conversion from CSV records to [`NewContact`].

use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use roster_core::{
  NewContact,
  contact::{normalize_salary, parse_salary},
};
use rust_decimal::Decimal;

use crate::{DATE_FORMAT, DELIMITER, Error, Result, header};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ─── Header mapping ──────────────────────────────────────────────────────────

/// Column index of each recognised header. Unknown headers are ignored.
#[derive(Debug, Default)]
struct Columns {
  name:          Option<usize>,
  date_of_birth: Option<usize>,
  married:       Option<usize>,
  phone:         Option<usize>,
  salary:        Option<usize>,
}

impl Columns {
  fn from_headers(headers: &StringRecord) -> Self {
    let mut columns = Self::default();
    for (index, raw) in headers.iter().enumerate() {
      let slot = match raw.trim().to_ascii_lowercase().as_str() {
        header::NAME => &mut columns.name,
        header::DATE_OF_BIRTH => &mut columns.date_of_birth,
        header::MARRIED => &mut columns.married,
        header::PHONE => &mut columns.phone,
        header::SALARY => &mut columns.salary,
        _ => continue,
      };
      // First occurrence wins.
      slot.get_or_insert(index);
    }
    columns
  }
}

/// A borrowed data row plus its source line, for error messages.
struct Row<'a> {
  record: &'a StringRecord,
  line:   u64,
}

impl Row<'_> {
  /// The cell at `column`, or `""` when the header is absent or the row is
  /// shorter than the header.
  fn cell(&self, column: Option<usize>) -> &str {
    column
      .and_then(|i| self.record.get(i))
      .map(str::trim)
      .unwrap_or_default()
  }

  fn invalid(&self, field: &'static str, value: &str, reason: impl Into<String>) -> Error {
    Error::InvalidField {
      line: self.line,
      field,
      value: value.to_owned(),
      reason: reason.into(),
    }
  }

  fn missing(&self, field: &'static str) -> Error { Error::MissingField { line: self.line, field } }
}

// ─── Field conversions ───────────────────────────────────────────────────────

/// Strict `dd.mm.yyyy`: exactly two day digits, two month digits and four
/// year digits. `chrono` alone would also accept `1.1.1990`. Year `0000` is
/// not a calendar year and is refused.
fn parse_date(value: &str) -> Option<NaiveDate> {
  let bytes = value.as_bytes();
  let shaped = bytes.len() == 10
    && bytes
      .iter()
      .enumerate()
      .all(|(i, b)| if i == 2 || i == 5 { *b == b'.' } else { b.is_ascii_digit() });
  if !shaped {
    return None;
  }
  NaiveDate::parse_from_str(value, DATE_FORMAT)
    .ok()
    .filter(|d| d.year() >= 1)
}

/// `"true"` in any ASCII case; everything else, including blanks, is `false`.
fn parse_married(value: &str) -> bool { value.eq_ignore_ascii_case("true") }

fn convert(columns: &Columns, row: &Row<'_>) -> Result<NewContact> {
  let name = row.cell(columns.name);
  if name.is_empty() {
    return Err(row.missing(header::NAME));
  }

  let raw_date = row.cell(columns.date_of_birth);
  if raw_date.is_empty() {
    return Err(row.missing(header::DATE_OF_BIRTH));
  }
  let date_of_birth = parse_date(raw_date)
    .ok_or_else(|| row.invalid(header::DATE_OF_BIRTH, raw_date, "expected dd.mm.yyyy"))?;

  let raw_salary = row.cell(columns.salary);
  let salary = if raw_salary.is_empty() {
    normalize_salary(Decimal::ZERO)
  } else {
    parse_salary(raw_salary).map_err(|e| row.invalid(header::SALARY, raw_salary, e.to_string()))?
  };

  Ok(NewContact {
    name: name.to_owned(),
    date_of_birth,
    married: parse_married(row.cell(columns.married)),
    phone: row.cell(columns.phone).to_owned(),
    salary,
  })
}

// ─── Entry point ─────────────────────────────────────────────────────────────

pub(crate) fn parse_all(input: &[u8]) -> Result<Vec<NewContact>> {
  let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
  if input.iter().all(u8::is_ascii_whitespace) {
    return Err(Error::EmptyFile);
  }

  let mut reader = ReaderBuilder::new()
    .delimiter(DELIMITER)
    .has_headers(true)
    .flexible(true)
    .trim(Trim::Headers)
    .from_reader(input);

  let columns = Columns::from_headers(reader.headers()?);

  let mut contacts = Vec::new();
  for (index, record) in reader.records().enumerate() {
    let record = record?;
    let line = record
      .position()
      .map(|p| p.line())
      .unwrap_or(index as u64 + 2);
    contacts.push(convert(&columns, &Row { record: &record, line })?);
  }

  if contacts.is_empty() {
    return Err(Error::EmptyFile);
  }
  Ok(contacts)
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "name;dateofbirth;married;phone;salary\n";

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

  fn dec(s: &str) -> Decimal { s.parse().unwrap() }

  // ── Happy path
  // ──────────────────────────────────────────────────────────────

  #[test]
  fn single_row_converts_every_field() {
    let input = format!("{HEADER}John Doe;31.12.1990;true;+15551234;50000.00");
    let contacts = parse_all(input.as_bytes()).unwrap();
    assert_eq!(contacts, vec![NewContact {
      name:          "John Doe".into(),
      date_of_birth: ymd(1990, 12, 31),
      married:       true,
      phone:         "+15551234".into(),
      salary:        dec("50000.00"),
    }]);
  }

  #[test]
  fn rows_keep_file_order() {
    let input = format!(
      "{HEADER}Ann;01.01.1980;false;1;1\nBob;02.02.1981;true;2;2\nCid;03.03.1982;false;3;3\n"
    );
    let names: Vec<_> = parse_all(input.as_bytes())
      .unwrap()
      .into_iter()
      .map(|c| c.name)
      .collect();
    assert_eq!(names, ["Ann", "Bob", "Cid"]);
  }

  #[test]
  fn headers_match_case_insensitively_in_any_order() {
    let input = "SALARY;Phone;Name;DateOfBirth;MARRIED\n10.5;555;Eve;05.06.2000;TRUE\n";
    let c = &parse_all(input.as_bytes()).unwrap()[0];
    assert_eq!(c.name, "Eve");
    assert_eq!(c.phone, "555");
    assert_eq!(c.date_of_birth, ymd(2000, 6, 5));
    assert!(c.married);
    assert_eq!(c.salary.to_string(), "10.50");
  }

  #[test]
  fn unknown_headers_are_ignored() {
    let input = "id;name;nickname;dateofbirth\n99;Max;Maxi;10.10.1970\n";
    let c = &parse_all(input.as_bytes()).unwrap()[0];
    assert_eq!(c.name, "Max");
    assert_eq!(c.phone, "");
    assert!(!c.married);
    assert_eq!(c.salary, Decimal::ZERO);
  }

  #[test]
  fn short_rows_take_defaults() {
    let input = format!("{HEADER}Short;15.07.1995\n");
    let c = &parse_all(input.as_bytes()).unwrap()[0];
    assert_eq!(c.date_of_birth, ymd(1995, 7, 15));
    assert!(!c.married);
    assert_eq!(c.phone, "");
    assert_eq!(c.salary, Decimal::ZERO);
  }

  #[test]
  fn byte_order_mark_is_skipped() {
    let mut input = UTF8_BOM.to_vec();
    input.extend_from_slice(format!("{HEADER}Bom;01.02.2003;false;;\n").as_bytes());
    let c = &parse_all(&input).unwrap()[0];
    assert_eq!(c.name, "Bom");
  }

  #[test]
  fn crlf_line_endings_are_accepted() {
    let input = "name;dateofbirth\r\nWin;09.09.1999\r\n";
    let c = &parse_all(input.as_bytes()).unwrap()[0];
    assert_eq!(c.name, "Win");
  }

  #[test]
  fn unrecognised_married_values_are_false() {
    let input = format!("{HEADER}A;01.01.2000;yes;;\nB;01.01.2000;False;;\n");
    let contacts = parse_all(input.as_bytes()).unwrap();
    assert!(contacts.iter().all(|c| !c.married));
  }

  #[test]
  fn salary_is_normalised_to_two_places() {
    let input = format!("{HEADER}A;01.01.2000;false;;1234.5\nB;01.01.2000;false;;7\n");
    let contacts = parse_all(input.as_bytes()).unwrap();
    assert_eq!(contacts[0].salary.to_string(), "1234.50");
    assert_eq!(contacts[1].salary.to_string(), "7.00");
  }

  // ── Empty input
  // ─────────────────────────────────────────────────────────────

  #[test]
  fn zero_bytes_is_empty_file() {
    assert!(matches!(parse_all(b""), Err(Error::EmptyFile)));
  }

  #[test]
  fn whitespace_only_is_empty_file() {
    assert!(matches!(parse_all(b" \n\r\n"), Err(Error::EmptyFile)));
  }

  #[test]
  fn header_only_is_empty_file() {
    assert!(matches!(parse_all(HEADER.as_bytes()), Err(Error::EmptyFile)));
  }

  // ── Failures
  // ────────────────────────────────────────────────────────────────

  #[test]
  fn iso_date_fails_whole_import() {
    let input = format!("{HEADER}Good;01.01.2000;false;;\nBad;2025-01-01;false;;\n");
    let err = parse_all(input.as_bytes()).unwrap_err();
    match err {
      Error::InvalidField { line, field, value, .. } => {
        assert_eq!(line, 3);
        assert_eq!(field, header::DATE_OF_BIRTH);
        assert_eq!(value, "2025-01-01");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn single_digit_day_is_rejected() {
    let input = format!("{HEADER}A;1.01.2000;false;;\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::InvalidField { field: header::DATE_OF_BIRTH, .. })
    ));
  }

  #[test]
  fn impossible_calendar_date_is_rejected() {
    let input = format!("{HEADER}A;31.02.2001;false;;\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::InvalidField { field: header::DATE_OF_BIRTH, .. })
    ));
  }

  #[test]
  fn year_zero_is_rejected() {
    let input = format!("{HEADER}A;01.01.0000;false;;\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::InvalidField { field: header::DATE_OF_BIRTH, .. })
    ));
    let input = format!("{HEADER}A;01.01.0001;false;;\n");
    assert_eq!(parse_all(input.as_bytes()).unwrap()[0].date_of_birth.year(), 1);
  }

  #[test]
  fn missing_date_is_rejected() {
    let input = format!("{HEADER}A\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::MissingField { field: header::DATE_OF_BIRTH, .. })
    ));
  }

  #[test]
  fn missing_name_is_rejected() {
    let input = format!("{HEADER};01.01.2000;false;;\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::MissingField { field: header::NAME, .. })
    ));
  }

  #[test]
  fn non_numeric_salary_is_rejected() {
    let input = format!("{HEADER}A;01.01.2000;false;;lots\n");
    let err = parse_all(input.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: header::SALARY, .. }));
    assert!(err.to_string().contains("\"lots\""), "{err}");
  }

  #[test]
  fn comma_decimal_separator_is_rejected() {
    let input = format!("{HEADER}A;01.01.2000;false;;100,50\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::InvalidField { field: header::SALARY, .. })
    ));
  }

  #[test]
  fn negative_salary_is_rejected() {
    let input = format!("{HEADER}A;01.01.2000;false;;-5\n");
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::InvalidField { field: header::SALARY, .. })
    ));
  }

  #[test]
  fn invalid_utf8_is_a_csv_error() {
    let mut input = HEADER.as_bytes().to_vec();
    input.extend_from_slice(b"\xff\xfe;01.01.2000;false;;\n");
    assert!(matches!(parse_all(&input), Err(Error::Csv(_))));
  }

  #[test]
  fn comma_is_not_a_delimiter() {
    let input = "name,dateofbirth\nA,01.01.2000\n";
    // The whole line lands in one unrecognised column, so no name is found.
    assert!(matches!(
      parse_all(input.as_bytes()),
      Err(Error::MissingField { field: header::NAME, .. })
    ));
  }
}
