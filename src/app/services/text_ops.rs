use std::ops::Range;
use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty() && s != ".")
        .unwrap_or_else(|| "Unknown".to_string())
}

/// First match of `needle` starting at or after byte `from`.
///
/// Returns the byte range of the match in `text`. Case-insensitive matching
/// compares char by char, so the range can differ in length from `needle`.
pub fn find_in_text(
    text: &str,
    needle: &str,
    from: usize,
    case_sensitive: bool,
) -> Option<Range<usize>> {
    if needle.is_empty() || from >= text.len() {
        return None;
    }
    let from = ceil_boundary(text, from);
    text[from..]
        .char_indices()
        .map(|(i, _)| from + i)
        .find_map(|start| match_at(text, start, needle, case_sensitive).map(|end| start..end))
}

/// Last match of `needle` that ends at or before byte `before`.
pub fn find_in_text_backward(
    text: &str,
    needle: &str,
    before: usize,
    case_sensitive: bool,
) -> Option<Range<usize>> {
    if needle.is_empty() || before == 0 {
        return None;
    }
    let before = floor_boundary(text, before.min(text.len()));
    text[..before]
        .char_indices()
        .rev()
        .find_map(|(start, _)| {
            match_at(text, start, needle, case_sensitive)
                .filter(|&end| end <= before)
                .map(|end| start..end)
        })
}

/// End offset if `needle` matches `text` at `start`.
fn match_at(text: &str, start: usize, needle: &str, case_sensitive: bool) -> Option<usize> {
    let mut hay = text[start..].char_indices();
    let mut end = start;
    for n in needle.chars() {
        let (i, h) = hay.next()?;
        if !chars_equal(h, n, case_sensitive) {
            return None;
        }
        end = start + i + h.len_utf8();
    }
    Some(end)
}

fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

fn ceil_boundary(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

fn floor_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("test.txt"), "test.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.rs"), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_find_forward() {
        let text = "cat dog cat mouse cat";
        assert_eq!(find_in_text(text, "cat", 0, true), Some(0..3));
        assert_eq!(find_in_text(text, "cat", 1, true), Some(8..11));
        assert_eq!(find_in_text(text, "cat", 10, true), Some(18..21));
        assert_eq!(find_in_text(text, "cat", 19, true), None);
    }

    #[test]
    fn test_find_case_handling() {
        let text = "Hello world, HELLO";
        assert_eq!(find_in_text(text, "hello", 0, true), None);
        assert_eq!(find_in_text(text, "hello", 0, false), Some(0..5));
        assert_eq!(find_in_text(text, "hello", 1, false), Some(13..18));
    }

    #[test]
    fn test_find_empty_or_out_of_range() {
        assert_eq!(find_in_text("abc", "", 0, false), None);
        assert_eq!(find_in_text("abc", "a", 3, false), None);
        assert_eq!(find_in_text("abc", "a", 99, false), None);
        assert_eq!(find_in_text("", "a", 0, false), None);
    }

    #[test]
    fn test_find_from_inside_multibyte_char() {
        let text = "été été";
        // Byte 1 is inside the first 'é'; search resumes at the next boundary.
        assert_eq!(find_in_text(text, "été", 1, true), Some(6..11));
    }

    #[test]
    fn test_find_case_insensitive_non_ascii() {
        let text = "Straße ÉTÉ";
        assert_eq!(find_in_text(text, "été", 0, false), Some(8..13));
    }

    #[test]
    fn test_find_backward() {
        let text = "cat dog cat mouse cat";
        assert_eq!(find_in_text_backward(text, "cat", text.len(), true), Some(18..21));
        assert_eq!(find_in_text_backward(text, "cat", 18, true), Some(8..11));
        assert_eq!(find_in_text_backward(text, "cat", 10, true), Some(0..3));
        assert_eq!(find_in_text_backward(text, "cat", 2, true), None);
    }

    #[test]
    fn test_find_backward_case_insensitive() {
        let text = "Hello world HELLO";
        assert_eq!(find_in_text_backward(text, "hello", text.len(), false), Some(12..17));
        assert_eq!(find_in_text_backward(text, "hello", text.len(), true), None);
    }

    #[test]
    fn test_find_backward_edges() {
        assert_eq!(find_in_text_backward("cat", "cat", 0, false), None);
        assert_eq!(find_in_text_backward("cat", "", 3, false), None);
        assert_eq!(find_in_text_backward("cat", "cat", 99, false), Some(0..3));
    }
}
