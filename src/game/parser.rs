//! Turns a raw line of player input into normalised command tokens.

/// Filler words dropped from player input so "go to the south" reads as
/// "go south".
pub const SKIP_WORDS: &[&str] = &[
    "a", "about", "all", "an", "another", "any", "around", "at", "bad", "beautiful", "been",
    "better", "big", "can", "every", "for", "from", "good", "have", "her", "here", "hers", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "large", "later", "like", "little", "main",
    "me", "mine", "more", "my", "now", "of", "off", "oh", "on", "please", "small", "some", "soon",
    "that", "the", "then", "this", "those", "through", "till", "to", "towards", "until", "us",
    "want", "we", "what", "when", "why", "wish", "with", "would",
];

/// Lowercase, strip punctuation, split on whitespace and drop filler words.
pub fn normalise_input(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !SKIP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// True if `word` survives [`normalise_input`] unchanged as a single token,
/// so a player can actually type it as a direction or item id.
pub fn is_command_word(word: &str) -> bool {
    matches!(normalise_input(word).as_slice(), [only] if only == word)
}
