use regex::Regex;
use std::sync::OnceLock;

const MAX_CHARS: usize = 200;

fn csi() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]").ok()).as_ref()
}

/// Makes API-supplied text safe to print: strips ANSI CSI sequences and
/// control characters, turns line breaks and tabs into spaces, and caps the
/// length so a single headline can't swamp the screen.
pub fn sanitize_for_terminal(s: &str) -> String {
    let no_ansi = match csi() {
        Some(r) => r.replace_all(s, "").into_owned(),
        None => s.to_string(),
    };

    let mut cleaned = String::with_capacity(no_ansi.len());
    for ch in no_ansi.chars() {
        match ch {
            '\n' | '\r' | '\t' => cleaned.push(' '),
            c if c.is_control() => {}
            c => cleaned.push(c),
        }
    }

    cleaned.trim().chars().take(MAX_CHARS).collect()
}
