use regex::Regex;
use std::sync::LazyLock;

// Static patterns; a pattern that fails to compile simply contributes nothing.
static PARAGRAPH_BREAK: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\n\s*\n").ok());
static HASHTAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"#\w+").ok());
static BULLET_ITEM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\n\s*[-*•]\s").ok());
static NUMBERED_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+[.)]\s").ok());

/// A sentence body plus the run of terminal punctuation that closed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub terminator: &'a str,
}

impl<'a> Sentence<'a> {
    pub fn is_question(&self) -> bool {
        self.terminator.contains('?')
    }

    pub fn is_exclamation(&self) -> bool {
        self.terminator.contains('!')
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Everything the metric and insight passes read from the raw text, extracted once.
#[derive(Debug, Clone)]
pub struct TextFeatures<'a> {
    pub raw: &'a str,
    pub lower: String,
    pub sentences: Vec<Sentence<'a>>,
    pub paragraphs: usize,
    pub words: usize,
    pub hashtags: usize,
    pub questions: usize,
    pub has_bullet_points: bool,
    pub has_numbered_list: bool,
}

impl<'a> TextFeatures<'a> {
    pub fn extract(text: &'a str) -> Self {
        Self {
            raw: text,
            lower: text.to_lowercase(),
            sentences: split_sentences(text),
            paragraphs: split_paragraphs(text).len(),
            words: text.split_whitespace().count(),
            hashtags: count_matches(&HASHTAG, text),
            questions: text.matches('?').count(),
            has_bullet_points: is_match(&BULLET_ITEM, text),
            has_numbered_list: is_match(&NUMBERED_ITEM, text),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Mean words per sentence, 0 when nothing qualifies as a sentence.
    pub fn avg_sentence_words(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let total: usize = self.sentences.iter().map(Sentence::word_count).sum();
        total as f64 / self.sentences.len() as f64
    }

    pub fn lower_words(&self) -> Vec<&str> {
        self.lower.split_whitespace().collect()
    }
}

pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        push_sentence(&mut sentences, &text[start..idx], &text[idx..end]);
        start = end;
    }
    push_sentence(&mut sentences, &text[start..], "");

    sentences
}

pub fn split_paragraphs(text: &str) -> Vec<&str> {
    match PARAGRAPH_BREAK.as_ref() {
        Some(pattern) => pattern
            .split(text)
            .filter(|paragraph| !paragraph.trim().is_empty())
            .collect(),
        None if text.trim().is_empty() => Vec::new(),
        None => vec![text],
    }
}

pub fn hashtags(text: &str) -> Vec<&str> {
    HASHTAG
        .as_ref()
        .map(|pattern| pattern.find_iter(text).map(|m| m.as_str()).collect())
        .unwrap_or_default()
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Number of distinct list entries present, not total occurrences.
pub fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|needle| haystack.contains(*needle))
        .count()
}

pub(crate) fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern
        .as_ref()
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}

pub(crate) fn count_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    pattern
        .as_ref()
        .map(|pattern| pattern.find_iter(text).count())
        .unwrap_or(0)
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, body: &'a str, terminator: &'a str) {
    let text = body.trim();
    if !text.is_empty() {
        sentences.push(Sentence { text, terminator });
    }
}
