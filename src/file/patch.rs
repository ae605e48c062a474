//! Pure line-splice engine behind the mutating file tools.
//!
//! All operations address lines of the file's *current* content, 1-based,
//! with exclusive end bounds - the numbering an agent just saw in a
//! `read_file` reply. Out-of-bounds ranges are errors carrying the actual
//! line count, because that count is exactly what the agent needs to
//! re-anchor its next call.

use crate::error::EditorError;

/// Split content into editable lines. A single trailing newline does not
/// produce a phantom empty line; interior blank lines are preserved.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn line_count(content: &str) -> usize {
    split_lines(content).len()
}

fn join_lines(lines: &[&str], trailing_newline: bool) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut joined = lines.join("\n");
    if trailing_newline {
        joined.push('\n');
    }
    joined
}

/// Replace the span `[start_line, end_line)` with the lines of
/// `new_content`. `start_line == end_line` inserts before `start_line`
/// without removing anything; an empty `new_content` with
/// `start_line < end_line` is a pure deletion.
pub fn replace_span(
    content: &str,
    start_line: usize,
    end_line: usize,
    new_content: &str,
) -> Result<String, EditorError> {
    if start_line < 1 || end_line < 1 {
        return Err(EditorError::invalid_range(format!(
            "line numbers are 1-based; got start_line {start_line}, end_line {end_line}"
        )));
    }
    if start_line > end_line {
        return Err(EditorError::invalid_range(format!(
            "start_line {start_line} is greater than end_line {end_line}"
        )));
    }

    let lines = split_lines(content);
    let count = lines.len();
    if start_line > count + 1 {
        return Err(EditorError::invalid_range(format!(
            "start_line {start_line} is past the end of the file ({count} lines)"
        )));
    }
    if end_line > count + 1 {
        return Err(EditorError::invalid_range(format!(
            "end_line {end_line} is past the end of the file ({count} lines)"
        )));
    }

    let replacement = split_lines(new_content);
    let mut result = Vec::with_capacity(count + replacement.len());
    result.extend_from_slice(&lines[..start_line - 1]);
    result.extend_from_slice(&replacement);
    result.extend_from_slice(&lines[end_line - 1..]);

    Ok(join_lines(&result, content.ends_with('\n')))
}

/// Remove the span `[start_line, end_line)`. An empty or inverted range is
/// an error, not a no-op.
pub fn delete_span(
    content: &str,
    start_line: usize,
    end_line: usize,
) -> Result<String, EditorError> {
    if start_line < 1 || end_line < 1 {
        return Err(EditorError::invalid_range(format!(
            "line numbers are 1-based; got start_line {start_line}, end_line {end_line}"
        )));
    }
    if start_line >= end_line {
        return Err(EditorError::invalid_range(format!(
            "deleting requires start_line < end_line; got start_line {start_line}, end_line {end_line}"
        )));
    }

    let count = line_count(content);
    if start_line > count {
        return Err(EditorError::invalid_range(format!(
            "start_line {start_line} is past the end of the file ({count} lines)"
        )));
    }

    replace_span(content, start_line, end_line, "")
}

/// Insert `new_content` before the line at `cursor_line`, pushing the rest
/// down. `cursor_line == line count + 1` appends at the end.
pub fn insert_before(
    content: &str,
    cursor_line: usize,
    new_content: &str,
) -> Result<String, EditorError> {
    if cursor_line < 1 {
        return Err(EditorError::invalid_range(format!(
            "line numbers are 1-based; got cursor_line {cursor_line}"
        )));
    }

    let count = line_count(content);
    if cursor_line > count + 1 {
        return Err(EditorError::invalid_range(format!(
            "cursor_line {cursor_line} is past the end of the file ({count} lines; use {} to append)",
            count + 1
        )));
    }

    replace_span(content, cursor_line, cursor_line, new_content)
}

/// Render content with 1-based line numbers for display. The stored content
/// carries no markers; this is purely how replies are shown to the model.
pub fn number_lines(content: &str) -> String {
    split_lines(content)
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{:>3}| {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn split_handles_trailing_newline_and_blanks() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn replace_swaps_a_span() {
        let updated = replace_span("foo\nbar\nbaz", 2, 3, "qux").unwrap();
        assert_eq!(updated, "foo\nqux\nbaz");
    }

    #[test]
    fn replace_with_equal_bounds_is_insertion() {
        let updated = replace_span("foo\nbar", 2, 2, "mid").unwrap();
        assert_eq!(updated, "foo\nmid\nbar");

        // Line count grows by the number of inserted lines.
        let updated = replace_span("foo\nbar", 1, 1, "a\nb").unwrap();
        assert_eq!(updated, "a\nb\nfoo\nbar");
        assert_eq!(line_count(&updated), 4);
    }

    #[test]
    fn replace_with_empty_content_is_deletion() {
        let updated = replace_span("foo\nbar\nbaz", 1, 3, "").unwrap();
        assert_eq!(updated, "baz");
    }

    #[test]
    fn replace_preserves_trailing_newline() {
        let updated = replace_span("foo\nbar\n", 2, 3, "qux").unwrap();
        assert_eq!(updated, "foo\nqux\n");

        let updated = replace_span("foo\nbar", 2, 3, "qux").unwrap();
        assert_eq!(updated, "foo\nqux");
    }

    #[test]
    fn replace_can_append_past_the_last_line() {
        let updated = replace_span("foo", 2, 2, "bar").unwrap();
        assert_eq!(updated, "foo\nbar");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(3, 2)]
    #[case(5, 6)]
    #[case(1, 6)]
    fn replace_rejects_bad_ranges(#[case] start_line: usize, #[case] end_line: usize) {
        let err = replace_span("a\nb\nc", start_line, end_line, "x").unwrap_err();
        assert!(matches!(err, EditorError::InvalidRange { .. }));
    }

    #[test]
    fn delete_removes_exactly_the_span() {
        let updated = delete_span("a\nb\nc\nd", 2, 4).unwrap();
        assert_eq!(updated, "a\nd");
    }

    #[rstest]
    #[case(2, 2)]
    #[case(3, 1)]
    #[case(0, 2)]
    #[case(4, 5)]
    fn delete_rejects_empty_inverted_and_out_of_bounds(
        #[case] start_line: usize,
        #[case] end_line: usize,
    ) {
        let err = delete_span("a\nb\nc", start_line, end_line).unwrap_err();
        assert!(matches!(err, EditorError::InvalidRange { .. }));
    }

    #[test]
    fn insert_pushes_lines_down() {
        let updated = insert_before("foo\nqux", 1, "head").unwrap();
        assert_eq!(updated, "head\nfoo\nqux");
    }

    #[test]
    fn insert_at_count_plus_one_appends() {
        let updated = insert_before("a\nb", 3, "c").unwrap();
        assert_eq!(updated, "a\nb\nc");
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn insert_rejects_out_of_bounds_cursor(#[case] cursor_line: usize) {
        let err = insert_before("a\nb\nc", cursor_line, "x").unwrap_err();
        assert!(matches!(err, EditorError::InvalidRange { .. }));
    }

    #[test]
    fn numbering_is_one_based_and_right_aligned() {
        assert_eq!(number_lines("foo\nbar"), "  1| foo\n  2| bar");
        assert_eq!(number_lines(""), "");
    }
}
