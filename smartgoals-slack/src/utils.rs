pub const SLACK_MAX_LENGTH: usize = 4000;

/// Split a rendered report into chunks Slack will accept.
///
/// Cuts at fixed character offsets; concatenating the chunks reproduces
/// the input exactly.
pub fn split_message(text: &str) -> Vec<String> {
    if text.chars().count() <= SLACK_MAX_LENGTH {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();

    chars
        .chunks(SLACK_MAX_LENGTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
