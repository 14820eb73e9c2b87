use std::path::Path;

/// Supported image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Check if a path is a supported image file
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|&supported| supported == ext)
        })
        .unwrap_or(false)
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> std::path::PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    std::path::PathBuf::from(path)
}

/// Remove repeated entries, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// `prefix` followed by one past the largest numeric suffix among `ids`.
/// Ids that do not carry the prefix are ignored.
pub fn next_prefixed_id<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}

/// Human readable size, e.g. "4.2 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Split a shell line into words. Double or single quotes group words;
/// an unterminated quote runs to the end of the line.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a/b/sunset.JPG")));
        assert!(is_image_file(Path::new("x.webp")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(4_404_019), "4.2 MB");
    }

    #[test]
    fn test_next_prefixed_id_skips_gaps() {
        assert_eq!(next_prefixed_id("user", []), "user1");
        assert_eq!(next_prefixed_id("user", ["user1", "user3"]), "user4");
        assert_eq!(next_prefixed_id("col", ["col2", "misc", "colx"]), "col3");
    }

    #[test]
    fn test_dedup_preserving_order() {
        let mut v = vec!["b".to_string(), "a".into(), "b".into(), "c".into(), "a".into()];
        dedup_preserving_order(&mut v);
        assert_eq!(v, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_split_command_line() {
        assert_eq!(
            split_command_line(r#"search "mountain sunset" -t night"#),
            vec!["search", "mountain sunset", "-t", "night"]
        );
        assert_eq!(split_command_line("  like   3 "), vec!["like", "3"]);
        assert_eq!(split_command_line("search ''"), vec!["search", ""]);
        assert!(split_command_line("   ").is_empty());
    }
}
