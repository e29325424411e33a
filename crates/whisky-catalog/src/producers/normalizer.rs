use regex::Regex;
use std::sync::OnceLock;

/// Corporate and legal suffixes dropped from the end of a producer name.
const CORPORATE_SUFFIXES: &[&str] = &[
    "dist",
    "distillery",
    "distillerie",
    "co",
    "company",
    "ltd",
    "limited",
    "inc",
    "corp",
    "corporation",
    "llc",
    "plc",
    "sa",
    "sas",
    "sarl",
    "gmbh",
    "ag",
    "bv",
];

const CONNECTORS: &[&str] = &["&", "and"];

const ACRONYM_MAX_LEN: usize = 4;

struct Patterns {
    markup: Regex,
    control: Regex,
    and_word: Regex,
    punctuation: Regex,
    ampersand: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        markup: Regex::new(r"<[^>]*>").expect("markup pattern compiles"),
        control: Regex::new(r"[\x00-\x1F\x7F]").expect("control pattern compiles"),
        and_word: Regex::new(r"(?i)\band\b").expect("conjunction pattern compiles"),
        punctuation: Regex::new(r"[.,;:()\[\]{}|/\\]").expect("punctuation pattern compiles"),
        ampersand: Regex::new(r"\s*&\s*").expect("ampersand pattern compiles"),
    })
}

/// Clean a raw distiller/bottler name into its display form.
///
/// Markup, control characters and separators are removed, trailing corporate
/// suffixes and a leading "The" are dropped, and the remaining words are
/// title-cased. Short all-caps words such as "ABC" are kept as acronyms.
/// The token list is never stripped down to nothing, so "Ltd" stays "Ltd".
pub fn normalize_producer_name(raw: &str) -> String {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return String::new();
    }

    let mut tokens: Vec<&str> = cleaned.split(' ').collect();
    drop_trailing(&mut tokens, CORPORATE_SUFFIXES);
    drop_trailing(&mut tokens, CONNECTORS);

    if tokens.len() > 1 && tokens[0].eq_ignore_ascii_case("the") {
        tokens.remove(0);
    }

    let titled = tokens
        .iter()
        .map(|token| title_case(token))
        .collect::<Vec<_>>()
        .join(" ");

    if titled.is_empty() {
        cleaned
    } else {
        titled
    }
}

fn clean(raw: &str) -> String {
    let patterns = patterns();
    let text = patterns.markup.replace_all(raw, "");
    let text = patterns.control.replace_all(&text, "");
    let text = patterns.and_word.replace_all(&text, "&");
    let text = patterns.punctuation.replace_all(&text, " ");
    let text = patterns.ampersand.replace_all(&text, " & ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn drop_trailing(tokens: &mut Vec<&str>, words: &[&str]) {
    while tokens.len() > 1 {
        let Some(last) = tokens.last() else { break };
        if words.iter().any(|word| last.eq_ignore_ascii_case(word)) {
            tokens.pop();
        } else {
            break;
        }
    }
}

fn title_case(token: &str) -> String {
    if is_acronym(token) {
        return token.to_string();
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_acronym(token: &str) -> bool {
    token.chars().count() <= ACRONYM_MAX_LEN
        && token.chars().any(char::is_alphabetic)
        && !token.chars().any(char::is_lowercase)
}
