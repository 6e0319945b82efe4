//! Comment and whitespace stripping for manifest lines

/// Trim `line` and drop any trailing comment starting at `comment_delim`.
///
/// Blank and fully commented lines become `""`.
pub fn sanitize_line<'a>(line: &'a str, comment_delim: &str) -> &'a str {
    let line = line.trim();
    match line.find(comment_delim) {
        Some(0) => "",
        Some(idx) => line[..idx].trim(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_comment() {
        assert_eq!(sanitize_line("  foo # bar", "#"), "foo");
    }

    #[test]
    fn test_full_comment() {
        assert_eq!(sanitize_line("# all comment", "#"), "");
        assert_eq!(sanitize_line("   // indented comment", "//"), "");
    }

    #[test]
    fn test_blank() {
        assert_eq!(sanitize_line("", "#"), "");
        assert_eq!(sanitize_line(" \t ", "#"), "");
    }

    #[test]
    fn test_no_comment() {
        assert_eq!(
            sanitize_line("  github.com/pkg/errors v0.8.0  ", "//"),
            "github.com/pkg/errors v0.8.0"
        );
    }

    #[test]
    fn test_go_mod_indirect_marker() {
        assert_eq!(
            sanitize_line("\tgolang.org/x/sys v0.5.0 // indirect", "//"),
            "golang.org/x/sys v0.5.0"
        );
    }
}
