use lazy_static::lazy_static;
use regex::Regex;

pub const WORDS_PER_MINUTE: usize = 225;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingTime {
    /// Display label, e.g. "3 min read".
    pub text: String,
    pub minutes: u32,
    /// Duration in milliseconds.
    pub time: u64,
    pub words: usize,
}

impl ReadingTime {
    /// The floor returned for empty or unusable input.
    pub fn default_minute() -> Self {
        ReadingTime {
            text: "1 min read".to_string(),
            minutes: 1,
            time: 60_000,
            words: 0,
        }
    }

    /// A usable estimate has at least one minute, a duration and a label.
    /// Externally supplied estimates are checked once here, at the boundary.
    pub fn is_valid(&self) -> bool {
        self.minutes >= 1 && self.time > 0 && !self.text.is_empty()
    }
}

/// Markdown syntax does not count as prose. Images and fence markers
/// disappear, links keep their text.
fn strip_markdown(raw: &str) -> String {
    lazy_static! {
        static ref FRONTMATTER: Regex = Regex::new(r"(?s)\A---.*?---").unwrap();
        static ref IMAGE: Regex = Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap();
        static ref LINK: Regex = Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap();
        static ref CODE_FENCE: Regex = Regex::new(r"(?m)^```[^\n]*$").unwrap();
        static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s+").unwrap();
        static ref EMPHASIS: Regex = Regex::new(r"[*_`~]+").unwrap();
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    let text = FRONTMATTER.replace(raw, " ");
    let text = IMAGE.replace_all(&text, " ");
    let text = LINK.replace_all(&text, "$1");
    let text = CODE_FENCE.replace_all(&text, " ");
    let text = HEADING.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

pub fn calculate_reading_time(raw: &str) -> ReadingTime {
    if raw.trim().is_empty() {
        return ReadingTime::default_minute();
    }

    let words = strip_markdown(raw).split_whitespace().count();
    let minutes = ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1) as u32;

    ReadingTime {
        text: format!("{} min read", minutes),
        minutes,
        time: minutes as u64 * 60_000,
        words,
    }
}

/// Three-tier fallback: a valid precomputed estimate wins, otherwise the
/// raw text is measured, otherwise the one-minute floor.
pub fn reading_time_or(precomputed: Option<ReadingTime>, raw: Option<&str>) -> ReadingTime {
    match precomputed {
        Some(rt) if rt.is_valid() => rt,
        _ => match raw {
            Some(text) if !text.trim().is_empty() => calculate_reading_time(text),
            _ => ReadingTime::default_minute(),
        },
    }
}
