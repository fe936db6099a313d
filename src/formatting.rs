//! Converts the light markup produced by the language model into HTML.
//!
//! This is an ordered chain of regex substitutions, not a markdown parser.
//! Each step sees the output of the previous one, so the order matters and
//! the conversion is not idempotent.
//!
//! `&`, `<` and `>` in the model output are escaped before any rule runs, so
//! the only tags in the result are the ones the rules add.

use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("formatting patterns are literals"),
        replacement,
    }
}

static RULES: LazyLock<[Rule; 5]> = LazyLock::new(|| {
    [
        rule(r"\*(.*?)\*", "<strong>${1}</strong>"),
        rule(r"_(.*?)_", "<em>${1}</em>"),
        rule(r"(?m)^### (.*?)\n", "<h3>${1}</h3>"),
        rule(r"1\. ", "<br>1. "),
        rule(r"\n", "<br>"),
    ]
});

/// Render model output as an HTML fragment. Never fails.
pub fn format_message(message: &str) -> String {
    let escaped = html_escape::encode_text(message).into_owned();
    RULES.iter().fold(escaped, |text, rule| {
        rule.pattern
            .replace_all(&text, rule.replacement)
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_italic_and_line_break() {
        assert_eq!(
            format_message("*a* _b_\n"),
            "<strong>a</strong> <em>b</em><br>"
        );
    }

    #[test]
    fn heading_consumes_its_line_break() {
        assert_eq!(
            format_message("### Offers\nBuy more"),
            "<h3>Offers</h3>Buy more"
        );
    }

    #[test]
    fn heading_marker_mid_line_is_left_alone() {
        assert_eq!(format_message("see ### this\n"), "see ### this<br>");
    }

    #[test]
    fn numbered_list_starts_on_new_line() {
        assert_eq!(
            format_message("List: 1. Milk 2. Eggs"),
            "List: <br>1. Milk 2. Eggs"
        );
    }

    #[test]
    fn unmatched_markers_are_kept() {
        assert_eq!(format_message("2 * 3"), "2 * 3");
        assert_eq!(format_message("snake_case"), "snake_case");
    }

    #[test]
    fn markers_do_not_span_lines() {
        assert_eq!(format_message("*a\nb*"), "*a<br>b*");
    }

    #[test]
    fn markup_in_reply_is_escaped() {
        assert_eq!(
            format_message("<script>*x*</script>"),
            "&lt;script&gt;<strong>x</strong>&lt;/script&gt;"
        );
        assert_eq!(format_message("Salt & Pepper\n"), "Salt &amp; Pepper<br>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(format_message(""), "");
    }
}
