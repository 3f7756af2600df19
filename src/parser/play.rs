use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Sentinel character for lines that precede any detected speech,
/// including everything inside the epilog.
pub const EPILOG: &str = "EPILOG";

/// Raised when a text has no detectable title line.
///
/// Callers treat this as a per-file degradation, not a batch failure: the
/// file's lines are attributed to [`EPILOG`] under an empty title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no tab-prefixed title line found in text")]
    TitleNotFound,
}

/// Finds the title of a work: the first tab-prefixed all-caps line.
pub fn find_title(text: &str) -> Result<String, ParseError> {
    let title_reg = Regex::new(r"\t([A-Z0-9]+.*[A-Z])\s*\n").unwrap();
    title_reg
        .captures(text)
        .map(|caps| caps[1].to_string())
        .ok_or(ParseError::TitleNotFound)
}

/// Capitalizes the first letter of each word and lowercases the rest,
/// treating an internal apostrophe as part of the word.
///
/// `"A LOVER'S COMPLAINT"` becomes `"A Lover's Complaint"`.
pub fn titlecase(raw: &str) -> String {
    let word_reg = Regex::new(r"[A-Za-z]+('[A-Za-z]+)?").unwrap();
    word_reg
        .replace_all(raw, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .into_owned()
}

/// Measures the epilog: the span from the start of `text` through the
/// second tab-delimited occurrence of `title`.
///
/// Returns `None` when the title does not recur, meaning the file has no
/// structured epilog and every line attributes to [`EPILOG`]. The title
/// is escaped before splicing, so titles containing regex metacharacters
/// (apostrophes in particular) are safe.
pub fn epilog_len(text: &str, title: &str) -> Option<usize> {
    let escaped = regex::escape(title);
    let pattern = format!(r"(?s)^.*?\t{escaped}.*?\t{escaped}\s*?\n");
    let epilog_reg = Regex::new(&pattern).ok()?;
    epilog_reg.find(text).map(|m| m.end())
}

/// Scans `body` for speech blocks and maps each one's byte offset to the
/// speaking character.
///
/// A speech block starts at a line of the form `<NAME>\t...` where
/// `<NAME>` begins with an uppercase letter. `SCENE` and `ACT` markers
/// are stage directions, not characters, and are excluded. Offsets are
/// shifted by `epilog_len` so they are absolute within the original
/// file, which is what [`get_character`] expects.
pub fn speech_offsets(body: &str, epilog_len: usize) -> BTreeMap<usize, String> {
    let char_reg = Regex::new(r"(?m)^([A-Z].*)\t").unwrap();
    let mut offset_to_char = BTreeMap::new();
    for caps in char_reg.captures_iter(body) {
        let name = caps.get(1).unwrap();
        let character = name.as_str();
        if character.starts_with("SCENE") || character.starts_with("ACT") {
            continue;
        }
        offset_to_char.insert(name.start() + epilog_len, character.to_string());
    }
    offset_to_char
}

/// Resolves the character speaking at `offset`: the character whose
/// speech starts at the greatest offset less than or equal to it.
///
/// Relies on the map being keyed by absolute, monotonically increasing
/// offsets. Lines that precede every speech fall back to [`EPILOG`].
pub fn get_character(offsets: &BTreeMap<usize, String>, offset: usize) -> &str {
    offsets
        .range(..=offset)
        .next_back()
        .map(|(_, character)| character.as_str())
        .unwrap_or(EPILOG)
}
