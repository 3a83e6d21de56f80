//! Property-based tests for continuation assembly and reflow

use spicewrap_format::marker::is_continuation;
use spicewrap_format::{word_wrap, LogicalLines, ReflowWrapper};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.=']{1,12}"
}

fn statement() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(word(), 1..20),
    )
        .prop_map(|(comment, words)| {
            let body = words.join(" ");
            if comment {
                format!("* {}", body)
            } else {
                body
            }
        })
}

fn physical_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z.][a-z0-9=]{0,6}( [a-z0-9=]{1,6}){0,4}",
        "\\+ ?[a-z0-9=]{1,6}( [a-z0-9=]{1,6}){0,3}",
        "\\*\\+ [a-z0-9]{1,6}",
        "\\* [a-z0-9]{1,6}",
        "[ \t]{0,3}",
    ]
}

proptest! {
    #[test]
    fn logical_line_count_matches_line_starts(
        lines in prop::collection::vec(physical_line(), 0..40)
    ) {
        let non_blank: Vec<&str> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        let starts = non_blank.iter().filter(|line| !is_continuation(line)).count();
        // a continuation run before the first start is a statement of its own
        let leading = non_blank.first().map_or(false, |line| is_continuation(line));
        let emitted = LogicalLines::new(lines.iter()).count();
        prop_assert_eq!(emitted, (starts + usize::from(leading)).max(1));
    }

    #[test]
    fn marker_follows_leading_character(text in statement(), width in 1usize..60) {
        let wrapper = ReflowWrapper::new(width).unwrap();
        let indent = if text.trim_start().starts_with('*') { "*+ " } else { "+ " };
        for line in wrapper.wrap_line(&text).iter().skip(1) {
            prop_assert!(line.starts_with(indent), "{:?} lacks {:?}", line, indent);
        }
    }

    #[test]
    fn lines_respect_width_except_single_words(
        words in prop::collection::vec(word(), 0..30),
        width in 1usize..60,
    ) {
        let text = words.join(" ");
        let lines = word_wrap(&text, width, "", "+ ");
        for (idx, line) in lines.iter().enumerate() {
            if line.chars().count() > width {
                let content = if idx == 0 { line.as_str() } else { &line[2..] };
                prop_assert!(!content.contains(' '), "overlong multi-word line {:?}", line);
            }
        }
    }

    #[test]
    fn unwrap_reflow_unwrap_is_stable(text in statement(), width in 1usize..60) {
        let wrapper = ReflowWrapper::new(width).unwrap();
        let physical = wrapper.wrap_line(&text);
        let unwrapped: Vec<String> = LogicalLines::new(physical.iter()).collect();
        prop_assert_eq!(unwrapped.len(), 1);

        let rewrapped = wrapper.wrap_line(&unwrapped[0]);
        let again: Vec<String> = LogicalLines::new(rewrapped.iter()).collect();
        prop_assert_eq!(&again, &unwrapped);

        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(&unwrapped[0], &normalized);
    }
}
