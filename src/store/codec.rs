//! Record file codec.
//!
//! One record per line; every field double-quoted; fields separated by a tab;
//! backslash escapes inside fields; `\n` terminated; UTF-8. The dialect is a
//! frozen contract: changing any constant silently would break every store
//! already on disk, so a future format change bumps [`FORMAT_VERSION`] and
//! writes a differently named file instead of mutating this one.
//!
//! The decoder is a character state machine over the whole file rather than a
//! line splitter, so escaped bytes (including embedded newlines and tabs)
//! round-trip exactly: `decode(encode(records)) == records`.

use crate::store::error::StoreError;
use crate::store::record::Record;
use std::fs;
use std::path::Path;

/// Version of the on-disk dialect below. The file format is headerless, so
/// this is not written to disk; it names the contract the constants freeze.
pub const FORMAT_VERSION: u32 = 1;

const DELIMITER: char = '\t';
const QUOTE: char = '"';
const ESCAPE: char = '\\';
const TERMINATOR: char = '\n';

/// Read the backing file into a record list.
///
/// A missing file is not an error: an empty store is valid. Anything the
/// grammar rejects aborts the load; records are never silently dropped.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content =
        fs::read_to_string(path).map_err(|e| StoreError::storage(path, e))?;
    decode(&content)
}

/// Rewrite the backing file from the full record list.
///
/// The write is all-or-nothing from the caller's perspective: the encoded
/// contents go to a sibling temp file first, which is then renamed over the
/// target. A crash mid-write leaves the previous store intact.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, encode(records)).map_err(|e| StoreError::storage(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::storage(path, e))?;
    Ok(())
}

/// Encode a record list into the on-disk text form.
pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let fields = record.to_fields();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(DELIMITER);
            }
            out.push(QUOTE);
            for c in field.chars() {
                if c == QUOTE || c == ESCAPE {
                    out.push(ESCAPE);
                }
                out.push(c);
            }
            out.push(QUOTE);
        }
        out.push(TERMINATOR);
    }
    out
}

/// Decode the on-disk text form back into records.
pub fn decode(content: &str) -> Result<Vec<Record>, StoreError> {
    let mut records: Vec<Record> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut chars = content.chars();

    loop {
        let record_no = records.len() + 1;

        // Field start: every field opens with a quote.
        match chars.next() {
            None => {
                if !fields.is_empty() {
                    return Err(StoreError::decode(record_no, "unterminated record at end of file"));
                }
                break;
            }
            Some(QUOTE) => {}
            Some(TERMINATOR) if fields.is_empty() => {
                return Err(StoreError::decode(record_no, "empty record line"));
            }
            Some(c) => {
                return Err(StoreError::decode(
                    record_no,
                    format!("field does not start with a quote (found {c:?})"),
                ));
            }
        }

        // Field body, up to the closing quote.
        let mut field = String::new();
        loop {
            match chars.next() {
                None => {
                    return Err(StoreError::decode(record_no, "unterminated quoted field"));
                }
                Some(ESCAPE) => match chars.next() {
                    Some(c) => field.push(c),
                    None => {
                        return Err(StoreError::decode(
                            record_no,
                            "escape character at end of file",
                        ));
                    }
                },
                Some(QUOTE) => break,
                Some(c) => field.push(c),
            }
        }
        fields.push(field);

        // After a field: another field, end of record, or end of file.
        match chars.next() {
            Some(DELIMITER) => {}
            Some(TERMINATOR) => {
                records.push(Record::from_fields(record_no, std::mem::take(&mut fields))?);
            }
            None => {
                // Tolerate a missing final newline on read; the encoder
                // always writes one.
                records.push(Record::from_fields(record_no, std::mem::take(&mut fields))?);
                break;
            }
            Some(c) => {
                return Err(StoreError::decode(
                    record_no,
                    format!("expected tab or newline after field, found {c:?}"),
                ));
            }
        }
    }

    Ok(records)
}
