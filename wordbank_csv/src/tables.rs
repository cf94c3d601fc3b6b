//! Static level tables.

use std::path::Path;

/// File-name keyword to level tag. The first keyword found in the file
/// name wins, so `大学四级` must precede `四级`.
pub const LEVEL_FROM_FILENAME: &[(&str, &str)] = &[
    ("COCA", "COCA"),
    ("初中", "初中"),
    ("高中", "高中"),
    ("大学四级", "四级"),
    ("大学六级", "六级"),
    ("四级", "四级"),
    ("六级", "六级"),
    ("考研", "考研"),
    ("GRE", "GRE"),
    ("TOEFL", "TOEFL"),
];

/// Label name to the word-list file looked up by `--auto-labels`.
pub const AUTO_LABEL_FILES: &[(&str, &str)] = &[
    ("小学", "广州小学英语__仅单词.txt"),
    ("初中", "初中英语单词__仅单词.txt"),
    ("高中", "高中英语单词__仅单词.txt"),
    ("四级", "大学四级英语单词__仅单词.txt"),
    ("六级", "大学六级英语单词__仅单词.txt"),
    ("考研", "考研词汇5500__仅单词.txt"),
    ("GRE", "极品GRE红宝书__仅单词.txt"),
    ("TOEFL", "TOEFL词汇__仅单词.txt"),
];

/// Level tag for a file name such as `初中英语单词__仅单词.txt`, or `""`.
#[must_use]
pub fn infer_level_from_path(path: &Path) -> &'static str {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return "";
    };

    LEVEL_FROM_FILENAME
        .iter()
        .find(|(key, _)| name.contains(key))
        .map_or("", |(_, level)| *level)
}

/// The base level written before any label is appended.
///
/// An explicit level always wins. Otherwise the level is inferred from the
/// input file name, unless label sets are in play, in which case it starts
/// empty so that only matching labels show up.
#[must_use]
pub fn resolve_base_level(explicit: Option<&str>, input: &Path, has_labels: bool) -> String {
    match explicit {
        Some(level) => level.to_string(),
        None if has_labels => String::new(),
        None => infer_level_from_path(input).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_level() {
        assert_eq!(infer_level_from_path(Path::new("初中英语单词__仅单词.txt")), "初中");
        assert_eq!(infer_level_from_path(Path::new("/x/大学四级英语单词.txt")), "四级");
        assert_eq!(infer_level_from_path(Path::new("COCA20000.txt")), "COCA");
        assert_eq!(infer_level_from_path(Path::new("random.txt")), "");
    }

    #[test]
    fn test_first_table_entry_wins() {
        assert_eq!(infer_level_from_path(Path::new("GRE与COCA合集.txt")), "COCA");
    }

    #[test]
    fn test_only_file_name_is_inspected() {
        assert_eq!(infer_level_from_path(Path::new("/考研/words.txt")), "");
    }

    #[test]
    fn test_resolve_base_level() {
        let input = Path::new("COCA.txt");
        assert_eq!(resolve_base_level(Some("自定义"), input, true), "自定义");
        assert_eq!(resolve_base_level(None, input, true), "");
        assert_eq!(resolve_base_level(None, input, false), "COCA");
    }
}
