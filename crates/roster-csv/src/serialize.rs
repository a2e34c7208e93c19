//! CSV writer.
//!
//! Produces CRLF line endings. A field is quoted only when it contains a
//! comma, a double quote, CR or LF; embedded quotes are doubled.

use std::io::Write;

use roster_core::record::Record;

use crate::error::Result;

const LINE_END: &str = "\r\n";

// ─── Field escaping ──────────────────────────────────────────────────────────

fn escape_field(s: &str) -> String {
  if s.contains([',', '"', '\r', '\n']) {
    format!("\"{}\"", s.replace('"', "\"\""))
  } else {
    s.to_owned()
  }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
  for (i, field) in fields.into_iter().enumerate() {
    if i > 0 {
      out.push(',');
    }
    out.push_str(&escape_field(field));
  }
  out.push_str(LINE_END);
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Serialize `records` in the order given, header row first.
pub fn serialize(records: &[Record]) -> String {
  let mut out = String::new();
  push_row(&mut out, Record::COLUMNS);

  for r in records {
    let id = r.id.to_string();
    push_row(&mut out, [
      id.as_str(),
      r.last_name.as_str(),
      r.first_name.as_str(),
      r.middle_name.as_str(),
      r.birth_day.as_str(),
      r.email.as_str(),
      r.phone.as_str(),
    ]);
  }

  out
}

/// Serialize `records` into `writer` and flush it.
pub fn write<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
  writer.write_all(serialize(records).as_bytes())?;
  writer.flush()?;
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::io;

  use super::*;
  use crate::Error;

  fn record(id: u64, last: &str, phone: &str) -> Record {
    Record {
      id,
      last_name:   last.to_string(),
      first_name:  "Ann".to_string(),
      middle_name: "Marie".to_string(),
      birth_day:   "15/06/1990".to_string(),
      email:       "ann@example.com".to_string(),
      phone:       phone.to_string(),
    }
  }

  #[test]
  fn empty_collection_is_header_only() {
    assert_eq!(
      serialize(&[]),
      "id,lastName,firstName,middleName,birthDay,email,phone\r\n"
    );
  }

  #[test]
  fn rows_follow_given_order() {
    let out = serialize(&[record(7, "Doe", "1"), record(3, "Roe", "2")]);
    let lines: Vec<&str> = out.split("\r\n").collect();
    assert_eq!(lines[1], "7,Doe,Ann,Marie,15/06/1990,ann@example.com,1");
    assert_eq!(lines[2], "3,Roe,Ann,Marie,15/06/1990,ann@example.com,2");
    assert_eq!(lines[3], "");
  }

  #[test]
  fn special_characters_are_quoted() {
    let out = serialize(&[record(1, "O\"Neil, Jr", "a\nb")]);
    assert!(
      out.contains("1,\"O\"\"Neil, Jr\",Ann,Marie,15/06/1990,ann@example.com,\"a\nb\"\r\n"),
      "got:\n{out}"
    );
  }

  #[test]
  fn non_ascii_is_written_as_utf8() {
    let mut buf = Vec::new();
    write(&mut buf, &[record(1, "Иванов", "")]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("1,Иванов,"), "got:\n{text}");
  }

  struct Broken;

  impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
      Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
  }

  #[test]
  fn writer_failure_is_reported() {
    let err = write(Broken, &[record(1, "Doe", "")]).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("disk full"));
  }
}
