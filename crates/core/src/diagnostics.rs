//! Human-readable rendering of compiler diagnostics.
//!
//! Driver logs reference source lines by number, in one of two common shapes:
//! `ERROR: 0:12: ...` (Mesa, ANGLE, most WebGL implementations) and
//! `0(12) : error ...` (NVIDIA). [`format_shader_error`] numbers the source
//! and marks every line a log entry points at, so the two can be read side
//! by side.

use std::collections::BTreeSet;

/// Extracts the 1-based source line numbers referenced by a driver log.
pub fn referenced_lines(log: &str) -> BTreeSet<usize> {
    log.lines().filter_map(line_reference).collect()
}

fn line_reference(entry: &str) -> Option<usize> {
    let entry = entry.trim_start();

    // "ERROR: 0:12: message" / "WARNING: 0:3: message"
    if let Some((_, rest)) = entry.split_once(": ") {
        let mut parts = rest.splitn(3, ':');
        if let (Some(file), Some(line), Some(_)) = (parts.next(), parts.next(), parts.next()) {
            if file.trim().parse::<u32>().is_ok() {
                if let Ok(n) = line.trim().parse() {
                    return Some(n);
                }
            }
        }
    }

    // "0(12) : error C0000: message"
    let open = entry.find('(')?;
    let close = entry[open..].find(')')? + open;
    if entry[..open].trim().parse::<u32>().is_ok() {
        return entry[open + 1..close].trim().parse().ok();
    }
    None
}

/// Formats a shader compilation error for debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, marks lines
/// referenced by `log` with `>`, then appends the log itself.
///
/// Both `source` and `log` may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let marked = referenced_lines(log);
    let source_lines: Vec<&str> = source.lines().collect();
    let width = source_lines.len().max(1).to_string().len();

    let numbered = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let marker = if marked.contains(&(i + 1)) { '>' } else { ' ' };
            format!("{marker}{:>width$}: {line}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.trim().is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{}", log.trim_end()),
    }
}
