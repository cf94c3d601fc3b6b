//! Short-meaning heuristics.
//!
//! A full meaning such as `n. 苹果；苹果树；苹果公司；大城市` is shortened to its
//! first three senses. Each heuristic is a pure function that either does
//! not apply (`None`) or returns the shortened text; [`short_meaning`] runs
//! them in order and takes the first that applies.

/// A single shortening heuristic.
pub type MeaningStrategy = fn(&str) -> Option<String>;

/// Number of senses kept in the short meaning.
pub const MAX_SENSES: usize = 3;

/// Heuristics in priority order.
pub const MEANING_STRATEGIES: &[(&str, MeaningStrategy)] = &[
    ("full-width semicolon", split_full_width_semicolon),
    ("semicolon", split_semicolon),
    ("full-width comma", split_full_width_comma),
    ("comma", split_comma),
    ("part-of-speech groups", split_pos_groups),
    ("part-of-speech breaks", split_pos_breaks),
];

/// Shorten `full_meaning` to its first three senses.
///
/// Falls back to the unchanged text when no heuristic applies.
#[must_use]
pub fn short_meaning(full_meaning: &str) -> String {
    if full_meaning.is_empty() {
        return String::new();
    }

    MEANING_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(full_meaning))
        .unwrap_or_else(|| full_meaning.to_string())
}

pub fn split_full_width_semicolon(s: &str) -> Option<String> {
    keep_first_segments(s, "；")
}

pub fn split_semicolon(s: &str) -> Option<String> {
    keep_first_segments(s, ";")
}

pub fn split_full_width_comma(s: &str) -> Option<String> {
    keep_first_segments(s, "，")
}

pub fn split_comma(s: &str) -> Option<String> {
    keep_first_segments(s, ",")
}

/// Applies whenever `delim` occurs. Empty segments do not count as senses.
fn keep_first_segments(s: &str, delim: &str) -> Option<String> {
    if !s.contains(delim) {
        return None;
    }

    let segments: Vec<&str> = s
        .split(delim)
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .collect();

    if segments.len() <= MAX_SENSES {
        Some(s.to_string())
    } else {
        Some(segments[..MAX_SENSES].join(delim))
    }
}

/// Groups of the form `adv.更加` where each group runs up to the next marker.
///
/// Applies as soon as one group is found; keeps the text whole for up to
/// three groups.
pub fn split_pos_groups(s: &str) -> Option<String> {
    let groups = scan(s, pos_group_at);
    match groups.len() {
        0 => None,
        n if n <= MAX_SENSES => Some(s.to_string()),
        _ => Some(s[..groups[MAX_SENSES - 1].1].trim().to_string()),
    }
}

/// Looser marker match used when no full group was found: a marker followed
/// by a run of anything but letters and periods. Applies only when it can
/// actually shorten the text.
pub fn split_pos_breaks(s: &str) -> Option<String> {
    let breaks = scan(s, pos_break_at);
    (breaks.len() > MAX_SENSES).then(|| s[..breaks[MAX_SENSES - 1].1].trim().to_string())
}

/// Non-overlapping left-to-right matches of `matcher`, as byte ranges.
fn scan(s: &str, matcher: fn(&[u8], usize) -> Option<usize>) -> Vec<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = matcher(bytes, i) {
            found.push((i, end));
            i = end;
        } else {
            i += 1;
        }
    }
    found
}

/// End of a part-of-speech marker (`n.`, `adv.`, `Adj.`) starting at `i`.
fn marker_end(bytes: &[u8], i: usize) -> Option<usize> {
    let letters = bytes[i..]
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters == 0 {
        return None;
    }
    let dot = i + letters;
    (bytes.get(dot) == Some(&b'.')).then_some(dot + 1)
}

/// A marker, then at least one non-letter, ending right before the next
/// marker or at the end of the text.
fn pos_group_at(bytes: &[u8], i: usize) -> Option<usize> {
    let start = marker_end(bytes, i)?;
    let end = start
        + bytes[start..]
            .iter()
            .take_while(|b| !b.is_ascii_alphabetic())
            .count();
    if end == start {
        return None;
    }
    (end == bytes.len() || marker_end(bytes, end).is_some()).then_some(end)
}

/// A marker, then at least one byte that is neither a letter nor a period.
fn pos_break_at(bytes: &[u8], i: usize) -> Option<usize> {
    let start = marker_end(bytes, i)?;
    let end = start
        + bytes[start..]
            .iter()
            .take_while(|b| !b.is_ascii_alphabetic() && **b != b'.')
            .count();
    (end > start).then_some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(short_meaning(""), "");
    }

    #[test]
    fn test_full_width_semicolon() {
        assert_eq!(
            short_meaning("n. 苹果；苹果树；苹果公司；大城市"),
            "n. 苹果；苹果树；苹果公司"
        );
        assert_eq!(short_meaning("n. 苹果；苹果树"), "n. 苹果；苹果树");
    }

    #[test]
    fn test_segments_are_trimmed_and_empty_ones_dropped() {
        assert_eq!(short_meaning("a; b;; c ; d"), "a;b;c");
        assert_eq!(short_meaning("a;;;b"), "a;;;b");
    }

    #[test]
    fn test_semicolon_beats_comma() {
        assert_eq!(short_meaning("a，b，c，d；e"), "a，b，c，d；e");
    }

    #[test]
    fn test_full_width_comma_beats_half_width() {
        assert_eq!(short_meaning("甲，乙，丙，丁,戊"), "甲，乙，丙");
        assert_eq!(short_meaning("甲,乙,丙,丁"), "甲,乙,丙");
    }

    #[test]
    fn test_pos_groups_truncate_after_third() {
        assert_eq!(
            short_meaning("art.这adv.更加adj.多的pron.许多"),
            "art.这adv.更加adj.多的"
        );
    }

    #[test]
    fn test_semicolon_wins_over_pos_groups() {
        let meaning = "art.这；那adv.更加adj.多的pron.许多";
        assert_eq!(short_meaning(meaning), meaning);
        assert_eq!(split_pos_groups(meaning).as_deref(), Some("art.这；那adv.更加adj.多的"));
    }

    #[test]
    fn test_pos_groups_three_or_fewer_unchanged() {
        assert_eq!(short_meaning("n. 苹果"), "n. 苹果");
        assert_eq!(short_meaning("v. 放弃 n. 放任"), "v. 放弃 n. 放任");
    }

    #[test]
    fn test_pos_breaks_fallback() {
        // English words inside the senses defeat the group pattern.
        let meaning = "n. 计算机 PC v. 计算 x adj. 电脑的 y adv. 用电脑地 z";
        assert_eq!(split_pos_groups(meaning), None);
        assert_eq!(
            short_meaning(meaning),
            "n. 计算机 PC v. 计算 x adj. 电脑的"
        );
    }

    #[test]
    fn test_no_strategy_applies() {
        assert_eq!(short_meaning("苹果"), "苹果");
        assert_eq!(short_meaning("apple tree"), "apple tree");
    }

    #[test]
    fn test_each_strategy_is_independent() {
        assert_eq!(split_semicolon("no delimiter"), None);
        assert_eq!(split_comma("a,b"), Some("a,b".to_string()));
        assert_eq!(split_pos_breaks("n. 一 v. 二"), None);
    }
}
