pub const COMMAND_PREFIX: &str = "!stock";

/// Pull the symbol out of a `!stock <SYMBOL>` command.
///
/// The prefix must start the text and be followed by at least one whitespace
/// character. The symbol is the run of `[A-Za-z0-9_]` after that, case kept.
/// The run stops at the first other character, so `!stock AA-PL` gives `AA`.
pub fn extract_symbol(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(COMMAND_PREFIX)?;
    let args = rest.trim_start_matches(char::is_whitespace);
    if args.len() == rest.len() {
        return None;
    }

    let end = args.find(|c: char| !is_word_char(c)).unwrap_or(args.len());
    (end > 0).then(|| &args[..end])
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
