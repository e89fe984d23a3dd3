//! Server-rendered HTML pages.
//!
//! Markup is assembled with `format!`; every interpolated value goes through
//! [`escape`] first.

use std::fmt::Write as _;

use quick_xml::escape::escape;
use roster_core::{
  Contact,
  validate::{Violations, field},
};

use crate::{
  form::ContactForm,
  handlers::{LIST_PATH, UPLOAD_PATH},
};

/// Date layout used in the listing, matching the upload format.
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title} - Roster</title>
</head>
<body>
<nav><a href=\"{LIST_PATH}\">Contacts</a> | <a href=\"{UPLOAD_PATH}\">Upload CSV</a></nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
",
    title = escape(title),
  )
}

fn error_block(message: Option<&str>) -> String {
  message
    .map(|m| format!("<div class=\"error\" role=\"alert\">{}</div>\n", escape(m)))
    .unwrap_or_default()
}

// ─── Upload ──────────────────────────────────────────────────────────────────

pub fn upload_page(error: Option<&str>) -> String {
  let body = format!(
    "{error}<form method=\"post\" action=\"{UPLOAD_PATH}\" enctype=\"multipart/form-data\">
<input type=\"file\" name=\"file\" accept=\".csv,text/csv\">
<button type=\"submit\">Upload</button>
</form>
<p>Semicolon-separated, with a header row: name;dateofbirth;married;phone;salary.
Dates as dd.mm.yyyy.</p>
",
    error = error_block(error),
  );
  layout("Upload CSV", &body)
}

// ─── Listing ─────────────────────────────────────────────────────────────────

pub fn list_page(contacts: &[Contact]) -> String {
  let mut body = String::new();
  if contacts.is_empty() {
    body.push_str("<p>No contacts yet.</p>\n");
  } else {
    body.push_str(
      "<table>
<thead><tr><th>Name</th><th>Date of Birth</th><th>Married</th><th>Phone</th><th>Salary</th><th></th></tr></thead>
<tbody>
",
    );
    for c in contacts {
      let _ = writeln!(
        body,
        "<tr><td>{name}</td><td>{dob}</td><td>{married}</td><td>{phone}</td><td>{salary}</td>\
         <td><a href=\"/contacts/edit/{id}\">Edit</a> <a href=\"/contacts/delete/{id}\">Delete</a></td></tr>",
        id = c.id,
        name = escape(&c.name),
        dob = c.date_of_birth.format(DISPLAY_DATE_FORMAT),
        married = if c.married { "Yes" } else { "No" },
        phone = escape(&c.phone),
        salary = c.salary,
      );
    }
    body.push_str("</tbody>\n</table>\n");
  }
  layout("Contacts", &body)
}

// ─── Edit ────────────────────────────────────────────────────────────────────

fn field_error(violations: &Violations, name: &str) -> String {
  violations
    .message_for(name)
    .map(|m| format!(" <span class=\"field-error\">{}</span>", escape(m)))
    .unwrap_or_default()
}

pub fn edit_page(form: &ContactForm, violations: &Violations) -> String {
  let body = format!(
    "<form method=\"post\" action=\"/contacts/edit\">
<input type=\"hidden\" name=\"id\" value=\"{id}\">
<p><label>Name <input type=\"text\" name=\"{f_name}\" value=\"{name}\" required></label>{e_name}</p>
<p><label>Date of Birth <input type=\"date\" name=\"{f_dob}\" value=\"{dob}\" required></label>{e_dob}</p>
<p><label><input type=\"checkbox\" name=\"{f_married}\" value=\"true\"{checked}> Married</label></p>
<p><label>Phone <input type=\"tel\" name=\"{f_phone}\" value=\"{phone}\"></label>{e_phone}</p>
<p><label>Salary <input type=\"number\" name=\"{f_salary}\" value=\"{salary}\" min=\"0\" step=\"0.01\"></label>{e_salary}</p>
<button type=\"submit\">Save</button> <a href=\"{LIST_PATH}\">Cancel</a>
</form>
",
    id = escape(&form.id),
    f_name = field::NAME,
    f_dob = field::DATE_OF_BIRTH,
    f_married = field::MARRIED,
    f_phone = field::PHONE,
    f_salary = field::SALARY,
    name = escape(&form.name),
    dob = escape(&form.date_of_birth),
    checked = if form.is_married() { " checked" } else { "" },
    phone = escape(&form.phone),
    salary = escape(&form.salary),
    e_name = field_error(violations, field::NAME),
    e_dob = field_error(violations, field::DATE_OF_BIRTH),
    e_phone = field_error(violations, field::PHONE),
    e_salary = field_error(violations, field::SALARY),
  );
  layout("Edit Contact", &body)
}

// ─── Delete ──────────────────────────────────────────────────────────────────

pub fn delete_page(contact: &Contact) -> String {
  let body = format!(
    "<p>Are you sure you want to delete this contact?</p>
<dl>
<dt>Name</dt><dd>{name}</dd>
<dt>Date of Birth</dt><dd>{dob}</dd>
<dt>Phone</dt><dd>{phone}</dd>
</dl>
<form method=\"post\" action=\"/contacts/delete/{id}\">
<button type=\"submit\">Delete</button> <a href=\"{LIST_PATH}\">Cancel</a>
</form>
",
    id = contact.id,
    name = escape(&contact.name),
    dob = contact.date_of_birth.format(DISPLAY_DATE_FORMAT),
    phone = escape(&contact.phone),
  );
  layout("Delete Contact", &body)
}
