//! Level tag merging.

/// Append `tag` to a separator-joined `level` string unless already present.
///
/// Both sides are trimmed. An empty tag leaves the level untouched and an
/// empty level becomes the tag itself. Presence is an exact match against
/// the trimmed tokens of `level` split on `sep`.
///
/// ```
/// use wordbank_core::append_level;
///
/// assert_eq!(append_level("", "初中", ","), "初中");
/// assert_eq!(append_level("COCA", "初中", ","), "COCA,初中");
/// assert_eq!(append_level("COCA,初中", "初中", ","), "COCA,初中");
/// ```
#[must_use]
pub fn append_level(level: &str, tag: &str, sep: &str) -> String {
    let tag = tag.trim();
    if tag.is_empty() {
        return level.to_string();
    }

    let level = level.trim();
    if level.is_empty() {
        return tag.to_string();
    }

    if has_tag(level, tag, sep) {
        return level.to_string();
    }
    format!("{level}{sep}{tag}")
}

fn has_tag(level: &str, tag: &str, sep: &str) -> bool {
    if sep.is_empty() {
        return level == tag;
    }
    level.split(sep).any(|t| t.trim() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_keeps_level_verbatim() {
        assert_eq!(append_level(" COCA ", "  ", ","), " COCA ");
    }

    #[test]
    fn test_custom_separator() {
        let level = append_level("小学", "初中", "、");
        assert_eq!(level, "小学、初中");
        assert_eq!(append_level(&level, "小学", "、"), "小学、初中");
    }

    #[test]
    fn test_tokens_are_trimmed_before_comparison() {
        assert_eq!(append_level("COCA , 初中", "初中", ","), "COCA , 初中");
    }

    #[test]
    fn test_partial_token_is_not_a_match() {
        assert_eq!(append_level("四级词汇", "四级", ","), "四级词汇,四级");
    }
}
