use std::time::{Duration, Instant};

/// Identical status lines arriving closer together than this are dropped.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(30);

/// Progress-bar units per whole progress step. Fractional step counts in
/// status text still map to integer bar positions this way.
const PROGRESS_SCALE: u32 = 100;

/// Structured form of a runtime status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Nothing to display; hide the bar and the spinner.
    Idle,
    /// Activity with no known completion ratio; spinner only.
    Indeterminate { label: String },
    /// Fractional progress in scaled integer units.
    Determinate {
        label: String,
        current: u32,
        total: u32,
    },
}

struct LastStatus {
    time: Instant,
    text: String,
}

/// Reduces free-form runtime status lines to [`ProgressEvent`]s.
///
/// Owns the debounce record. Not safe to feed from more than one call
/// site concurrently; the bridge is its only caller.
#[derive(Default)]
pub struct ProgressTranslator {
    last: Option<LastStatus>,
}

impl ProgressTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates `text` as observed at `now`.
    ///
    /// Returns `None` when the line is byte-identical to the previous
    /// non-suppressed one and arrived within [`DEBOUNCE_INTERVAL`]; the
    /// debounce record keeps its old timestamp in that case.
    pub fn translate(&mut self, text: &str, now: Instant) -> Option<ProgressEvent> {
        if let Some(last) = &self.last {
            if last.text == text && now.duration_since(last.time) < DEBOUNCE_INTERVAL {
                return None;
            }
        }
        self.last = Some(LastStatus {
            time: now,
            text: text.to_string(),
        });

        if let Some((label, current, total)) = match_fraction(text) {
            return Some(ProgressEvent::Determinate {
                label: label.to_string(),
                current: current.saturating_mul(PROGRESS_SCALE),
                total: total.saturating_mul(PROGRESS_SCALE),
            });
        }
        if text.is_empty() {
            Some(ProgressEvent::Idle)
        } else {
            Some(ProgressEvent::Indeterminate {
                label: text.to_string(),
            })
        }
    }
}

/// Matches `<label>(<digits>[.<digits>]/<digits>)` anywhere in `text`.
///
/// The label is the non-empty run of non-`(` characters immediately before
/// the opening parenthesis; text after the closing parenthesis is ignored.
/// A fractional current value truncates toward zero.
fn match_fraction(text: &str) -> Option<(&str, u32, u32)> {
    for (open, _) in text.match_indices('(') {
        let label_start = text[..open].rfind('(').map_or(0, |p| p + 1);
        if label_start == open {
            continue;
        }
        if let Some((current, total)) = parse_fraction(&text[open + 1..]) {
            return Some((&text[label_start..open], current, total));
        }
    }
    None
}

/// Parses `<digits>[.<digits>]/<digits>)` at the start of `s`, keeping only
/// the integer part of the current value.
fn parse_fraction(s: &str) -> Option<(u32, u32)> {
    let bytes = s.as_bytes();
    let int_end = digit_run(bytes, 0)?;
    let current = s[..int_end].parse().ok()?;

    let mut pos = int_end;
    if bytes.get(pos) == Some(&b'.') {
        pos = digit_run(bytes, pos + 1)?;
    }
    if bytes.get(pos) != Some(&b'/') {
        return None;
    }

    let total_start = pos + 1;
    let total_end = digit_run(bytes, total_start)?;
    if bytes.get(total_end) != Some(&b')') {
        return None;
    }
    let total = s[total_start..total_end].parse().ok()?;

    Some((current, total))
}

/// Index one past the non-empty run of ASCII digits starting at `from`.
fn digit_run(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    (pos > from).then_some(pos)
}
