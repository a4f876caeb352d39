//! CSV dialect for the admin complaint export.
//!
//! Every data field is quoted, with embedded quote characters doubled
//! (minimal RFC 4180 escaping); the header row is written bare. The small
//! parser for the same dialect backs round-trip tests and tooling -- the
//! server itself never re-imports the export.

/// Header row of the complaint export, in column order.
pub const EXPORT_HEADER: &str =
    "ID,Subject,Category,Priority,Status,Citizen,AssignedStaff,CreatedAt,UpdatedAt,Deadline";

/// Number of columns in the export.
pub const EXPORT_COLUMNS: usize = 10;

/// Quote a single field: wrap in quotes, doubling any embedded quote.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the export: the bare header plus one newline-terminated row per
/// record, every field quoted.
pub fn render_export<I>(rows: I) -> String
where
    I: IntoIterator<Item = [String; EXPORT_COLUMNS]>,
{
    let mut out = String::new();
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&quote_field(field));
        }
        out.push('\n');
    }
    out
}

/// Parse one line of the quoted dialect back into its fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
