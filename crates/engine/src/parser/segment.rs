use once_cell::sync::Lazy;
use regex::Regex;

/// Claim separators, tried in order. Each is kept only if it yields more
/// substantial fragments than the split so far.
static SEPARATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)Claim\s+\d+",
        r"(?i)Name\s+of\s+claimant",
        r"(?i)Claimant\s+\d+",
        r"(?i)Claimant[_\s]+\w+",
        r"-{3,}",
        r"={3,}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid separator pattern"))
    .collect()
});

/// Split page text into fragments that each hold one claim.
///
/// Fragments of `min_chars` characters or fewer are discarded while refining.
/// A page that no separator helps with is kept whole when longer than
/// `whole_page_chars`.
pub fn segment_claim_blocks(text: &str, min_chars: usize, whole_page_chars: usize) -> Vec<String> {
    let mut segments: Vec<&str> = vec![text];

    for separator in SEPARATORS.iter() {
        let refined: Vec<&str> = segments
            .iter()
            .flat_map(|segment| separator.split(segment))
            .filter(|part| char_len(part.trim()) > min_chars)
            .collect();

        if refined.len() > segments.len() {
            segments = refined;
        }
    }

    if segments.len() == 1 && char_len(segments[0]) > whole_page_chars {
        return vec![segments[0].trim().to_string()];
    }

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
