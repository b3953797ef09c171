use csv::{ReaderBuilder, StringRecord, Terminator};
use thiserror::Error;


pub type Row = Vec<String>;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Field and record delimiters. Quoting always uses `"`.
#[derive(Clone, Copy, Debug)]
pub struct Dialect {
    pub delimiter: u8,
    pub terminator: Terminator,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect {
            delimiter: b',',
            terminator: Terminator::CRLF,
        }
    }
}

#[cfg(test)]
pub fn parse_rows(text: &str) -> Result<Vec<Row>, ParseError> {
    parse_rows_with(text, &Dialect::default())
}

/// Splits `text` into rows of fields. Blank lines are skipped and no header
/// handling happens here.
///
/// A quoted field that is still open at the end of the input fails the whole
/// parse rather than yielding a truncated last record.
pub fn parse_rows_with(text: &str, dialect: &Dialect) -> Result<Vec<Row>, ParseError> {
    if let Some(line) = find_unterminated_quote(text, dialect) {
        return Err(ParseError::UnterminatedQuote { line });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .terminator(dialect.terminator)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

fn is_blank(record: &StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record[0].is_empty())
}

fn is_record_end(byte: u8, terminator: Terminator) -> bool {
    match terminator {
        Terminator::CRLF => byte == b'\r' || byte == b'\n',
        Terminator::Any(t) => byte == t,
        _ => byte == b'\n',
    }
}

// Quotes only open a field when they are its first byte, same as the reader.
// The reader also drops a leading byte order mark, so the scan starts after it.
fn find_unterminated_quote(text: &str, dialect: &Dialect) -> Option<usize> {
    let bytes = text.strip_prefix('\u{feff}').unwrap_or(text).as_bytes();
    let mut line = 1;
    let mut at_field_start = true;
    let mut open_quote_line = None;

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if open_quote_line.is_some() {
            if byte == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    open_quote_line = None;
                    at_field_start = false;
                }
            }
        } else {
            if byte == b'"' && at_field_start {
                open_quote_line = Some(line);
            }
            at_field_start =
                byte == dialect.delimiter || is_record_end(byte, dialect.terminator);
        }
        if byte == b'\n' {
            line += 1;
        }
        i += 1;
    }

    open_quote_line
}
