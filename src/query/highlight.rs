use regex::Regex;

/// Builds a whole-word pattern that matches the word in any casing by
/// alternating an upper/lower character class per letter, so the match
/// itself keeps whatever casing the source line used.
///
/// `"love"` becomes `\b[Ll][Oo][Vv][Ee]\b`.
pub fn any_case_word_regex(word: &str) -> String {
    let mut pattern = String::from(r"\b");
    for ch in word.chars() {
        if ch.is_alphabetic() {
            pattern.push('[');
            pattern.extend(ch.to_uppercase());
            pattern.extend(ch.to_lowercase());
            pattern.push(']');
        } else {
            pattern.push_str(&regex::escape(&ch.to_string()));
        }
    }
    pattern.push_str(r"\b");
    pattern
}

/// Wraps every whole-word occurrence of `word` in `line` with a bold
/// tag, case-insensitively, keeping each occurrence's original casing.
pub fn bold(word: &str, line: &str) -> String {
    let Ok(word_reg) = Regex::new(&any_case_word_regex(word)) else {
        return line.to_string();
    };
    word_reg
        .replace_all(line, |caps: &regex::Captures| format!("<b>{}</b>", &caps[0]))
        .into_owned()
}
