use crate::ports::outbound::RowCodec;
use crate::shared::error::DatastoreError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// CsvCodec adapter implementing the RowCodec port for comma-delimited files
///
/// Standard quoting rules apply: fields containing the delimiter, a quote or
/// a line break are quoted, embedded quotes are doubled. Both LF and CRLF
/// line endings are accepted on read; LF is produced on write.
///
/// Writes go through a temporary file in the target's directory that is
/// renamed over the target on success, so a failed write never leaves a
/// partially overwritten file behind.
pub struct CsvCodec;

impl CsvCodec {
    pub fn new() -> Self {
        Self
    }

    /// Renders rows as CSV text using the same quoting rules `write_rows`
    /// persists with.
    pub fn encode(rows: &[Vec<String>]) -> String {
        let mut out = String::new();
        for row in rows {
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_field(field, &mut out);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RowCodec for CsvCodec {
    fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        let content =
            fs::read_to_string(path).map_err(|e| DatastoreError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        parse(&content, path)
    }

    fn write_rows(&self, path: &Path, rows: &[Vec<String>]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_err = |details: String| DatastoreError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
        tmp.write_all(Self::encode(rows).as_bytes())
            .map_err(|e| write_err(e.to_string()))?;
        tmp.persist(path).map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}

fn encode_field(field: &str, out: &mut String) {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn parse(content: &str, path: &Path) -> Result<Vec<Vec<String>>> {
    let malformed = |line: usize, details: String| DatastoreError::MalformedData {
        path: path.to_path_buf(),
        line,
        details,
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut line = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                        // Only a delimiter, line break or end of input may
                        // follow a closing quote.
                        match chars.peek() {
                            Some(&',') | Some(&'\n') | Some(&'\r') | None => {}
                            Some(other) => {
                                return Err(malformed(
                                    line,
                                    format!(
                                        "unexpected character '{}' after closing quote",
                                        other
                                    ),
                                )
                                .into());
                            }
                        }
                    }
                }
                '\n' => {
                    field.push('\n');
                    line += 1;
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => {
                    if field.is_empty() && !field_was_quoted {
                        in_quotes = true;
                        field_was_quoted = true;
                    } else {
                        return Err(malformed(
                            line,
                            "unexpected quote inside unquoted field".to_string(),
                        )
                        .into());
                    }
                }
                ',' => {
                    row.push(std::mem::take(&mut field));
                    field_was_quoted = false;
                }
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    line += 1;
                    end_record(&mut rows, &mut row, &mut field, &mut field_was_quoted);
                }
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(malformed(line, "unterminated quoted field".to_string()).into());
    }
    end_record(&mut rows, &mut row, &mut field, &mut field_was_quoted);
    Ok(rows)
}

/// Closes the record in progress. Blank lines produce no record.
fn end_record(
    rows: &mut Vec<Vec<String>>,
    row: &mut Vec<String>,
    field: &mut String,
    field_was_quoted: &mut bool,
) {
    if row.is_empty() && field.is_empty() && !*field_was_quoted {
        return;
    }
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
    *field_was_quoted = false;
}
