//! Completion candidates for the `url` command.

/// Hold-music twimlets offered when completing a `url` argument.
pub const HOLD_MUSIC_URLS: &[&str] = &[
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.rock&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.soft-rock&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.ambient&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.classical&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.electronica&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.guitars&",
    "http://twimlets.com/holdmusic?Bucket=com.twilio.music.newage&",
];

/// Candidates for a partially typed `url` argument. Empty text matches all.
#[must_use]
pub fn complete_url(text: &str) -> Vec<&'static str> {
    HOLD_MUSIC_URLS
        .iter()
        .copied()
        .filter(|url| url.starts_with(text))
        .collect()
}

/// Completion for a whole input line with the cursor at byte `pos`.
///
/// Only the argument of `url` completes. Returns the byte offset where the
/// candidates start replacing text, and the candidates.
#[must_use]
pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
    let head = line.get(..pos).unwrap_or(line);
    let is_url_argument = head
        .trim_start()
        .strip_prefix("url")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace));
    if !is_url_argument {
        return (pos, Vec::new());
    }
    let word = head.rsplit(char::is_whitespace).next().unwrap_or_default();
    (head.len() - word.len(), complete_url(word))
}
