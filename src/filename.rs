//! Default download name for a composite

use chrono::NaiveDateTime;

/// `title`, or `placeholder` when the title is empty
pub fn effective_title<'a>(title: &'a str, placeholder: &'a str) -> &'a str {
    if title.is_empty() {
        placeholder
    } else {
        title
    }
}

/// `{title}_{YYYYMMDD}_{HHmm}.png`
///
/// Characters that cannot appear in a file name on common platforms are
/// replaced with `_`; everything else of the title is kept verbatim.
pub fn suggested_file_name(title: &str, timestamp: NaiveDateTime) -> String {
    let safe: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}.png", safe, timestamp.format("%Y%m%d_%H%M"))
}
