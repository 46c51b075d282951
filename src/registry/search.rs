//! Case-insensitive keyword search over tool metadata
//!
//! Every whitespace-separated query term must match the tool somewhere; the
//! tool's score is the sum of each term's best match.

use crate::tools::ToolDescriptor;

const EXACT_KEYWORD: u32 = 100;
const EXACT_NAME_WORD: u32 = 80;
const NAME_PREFIX: u32 = 60;
const KEYWORD_PREFIX: u32 = 50;
const NAME_SUBSTRING: u32 = 40;
const KEYWORD_SUBSTRING: u32 = 30;
const DESCRIPTION_SUBSTRING: u32 = 10;
const FUZZY: u32 = 5;

/// Shortest term eligible for subsequence matching
const FUZZY_MIN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Allow subsequence matches against names and keywords
    pub fuzzy: bool,
    /// Maximum number of hits returned
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            limit: None,
        }
    }
}

impl SearchOptions {
    pub fn exact() -> Self {
        Self {
            fuzzy: false,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A matched tool and its relevance
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub tool: &'a ToolDescriptor,
    pub score: u32,
}

/// Lowercased query terms
pub(super) fn terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

pub(super) fn score_tool(tool: &ToolDescriptor, terms: &[String], fuzzy: bool) -> Option<u32> {
    let name = tool.name.to_lowercase();
    let name_words: Vec<&str> = name.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect();
    let keywords: Vec<String> = tool.keywords.iter().map(|k| k.to_lowercase()).collect();
    let description = tool.description.to_lowercase();

    let mut total = 0;
    for term in terms {
        let mut best = 0;
        let mut consider = |hit: bool, score: u32| {
            if hit && score > best {
                best = score;
            }
        };

        consider(keywords.iter().any(|k| k == term), EXACT_KEYWORD);
        consider(name_words.iter().any(|w| *w == term.as_str()), EXACT_NAME_WORD);
        consider(name.starts_with(term.as_str()), NAME_PREFIX);
        consider(keywords.iter().any(|k| k.starts_with(term.as_str())), KEYWORD_PREFIX);
        consider(name.contains(term.as_str()), NAME_SUBSTRING);
        consider(keywords.iter().any(|k| k.contains(term.as_str())), KEYWORD_SUBSTRING);
        consider(description.contains(term.as_str()), DESCRIPTION_SUBSTRING);
        if fuzzy && term.chars().count() >= FUZZY_MIN_LEN {
            let hit = is_subsequence(term, &name) || keywords.iter().any(|k| is_subsequence(term, k));
            consider(hit, FUZZY);
        }

        if best == 0 {
            return None;
        }
        total += best;
    }
    Some(total)
}

/// True when all chars of `needle` appear in `haystack` in order
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}
