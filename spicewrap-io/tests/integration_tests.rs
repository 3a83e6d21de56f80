//! Integration tests for the spicewrap I/O layer

use proptest::prelude::*;
use spicewrap_format::{LogicalLines, ReflowWrapper};
use spicewrap_io::{
    execute_reflow, execute_unwrap, reflow_stream, unwrap_stream, unwrap_text, AssembleOpts,
    CommentPolicy, EmptyInput, InputSource, OutputSink, ReflowOptions, ReflowRequest,
    UnwrapOptions, UnwrapRequest, WrapConfig,
};
use spicewrap_test_utils::{
    write_netlist, NetlistBuilder, INTERLEAVED_SP, LOREM_COMMENT_WRAPPED_50, LOREM_IPSUM,
    LOREM_IPSUM_COMMENT, LOREM_WRAPPED_50, TEST1_SP, TEST1_UNWRAPPED, TEST2_SP, TEST2_UNWRAPPED,
};
use std::fs;
use std::io::Cursor;

fn unwrap_to_string(input: &str, opts: UnwrapOptions) -> String {
    let mut out = Vec::new();
    unwrap_stream(Cursor::new(input), &mut out, opts).expect("unwrap succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test1_matches_golden() {
    assert_eq!(
        unwrap_to_string(TEST1_SP, UnwrapOptions::default()),
        TEST1_UNWRAPPED
    );
}

#[test]
fn test2_comment_continuations_match_golden() {
    assert_eq!(
        unwrap_to_string(TEST2_SP, UnwrapOptions::default()),
        TEST2_UNWRAPPED
    );
}

#[test]
fn interleaved_comments_split_by_default() {
    assert_eq!(
        unwrap_text(INTERLEAVED_SP, UnwrapOptions::default()),
        vec![
            ".param a=1 b='1+3+xy'",
            "** Comment 1",
            "** Comment 2 c=42 last=-1",
        ]
    );
}

#[test]
fn interleaved_comments_held_when_requested() {
    let opts = UnwrapOptions {
        assemble: AssembleOpts {
            comment_policy: CommentPolicy::Hold,
            ..AssembleOpts::default()
        },
    };
    assert_eq!(
        unwrap_text(INTERLEAVED_SP, opts),
        vec![
            ".param a=1 b='1+3+xy' c=42 last=-1",
            "** Comment 1",
            "** Comment 2",
        ]
    );
}

#[test]
fn empty_input_policies() {
    assert_eq!(unwrap_to_string("", UnwrapOptions::default()), "\n");
    assert_eq!(unwrap_to_string("\n  \n", UnwrapOptions::default()), "\n");

    let opts = UnwrapOptions {
        assemble: AssembleOpts {
            empty_input: EmptyInput::EmitNothing,
            ..AssembleOpts::default()
        },
    };
    assert_eq!(unwrap_to_string("", opts), "");
}

#[test]
fn lorem_wrap_goldens() {
    let wrapper = ReflowWrapper::new(50).unwrap();
    assert_eq!(wrapper.wrap_line(LOREM_IPSUM), LOREM_WRAPPED_50.to_vec());
    assert_eq!(
        wrapper.wrap_line(LOREM_IPSUM_COMMENT),
        LOREM_COMMENT_WRAPPED_50.to_vec()
    );
    assert_eq!(wrapper.fill_line(LOREM_IPSUM), LOREM_WRAPPED_50.join("\n"));
    assert_eq!(
        wrapper.fill_line(LOREM_IPSUM_COMMENT),
        LOREM_COMMENT_WRAPPED_50.join("\n")
    );
}

#[test]
fn reflowed_lorem_unwraps_to_original() {
    let unwrapped: Vec<String> = LogicalLines::new(LOREM_COMMENT_WRAPPED_50.iter()).collect();
    assert_eq!(unwrapped, vec![LOREM_IPSUM_COMMENT.to_string()]);
}

#[test]
fn execute_unwrap_with_paths() {
    let file = write_netlist("test1.sp", TEST1_SP).unwrap();
    let summary = execute_unwrap(UnwrapRequest {
        input: InputSource::Path(file.path.clone()),
        output: OutputSink::Path(file.output.clone()),
        options: UnwrapOptions::default(),
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&file.output).unwrap(), TEST1_UNWRAPPED);
    assert_eq!(summary.stats.logical_lines, 6);
    assert_eq!(summary.stats.continuation_lines, 5);
    assert_eq!(summary.lines_read, TEST1_SP.lines().count());
}

#[test]
fn execute_reflow_from_text() {
    let file = write_netlist("reflow.sp", "").unwrap();
    let summary = execute_reflow(ReflowRequest {
        input: InputSource::Text(TEST1_UNWRAPPED.to_string()),
        output: OutputSink::Path(file.output.clone()),
        options: ReflowOptions {
            wrap: WrapConfig::new(50).unwrap(),
            ..ReflowOptions::default()
        },
    })
    .unwrap();

    let written = fs::read_to_string(&file.output).unwrap();
    assert!(written
        .lines()
        .any(|line| line == "MMXM11 biasp1 i50ua VSSA VSSA nch_18_mac l=2e-07"));
    assert!(written.lines().any(|line| line == "+ m=1 nf=5 nfin=20 w=4.61e-06"));
    assert!(written.lines().all(|line| line.chars().count() <= 50));
    assert_eq!(summary.width, 50);
    assert_eq!(summary.metrics.overlong_lines, 0);

    // Reflowed output unwraps back to the same statements
    assert_eq!(
        unwrap_to_string(&written, UnwrapOptions::default()),
        TEST1_UNWRAPPED
    );
}

#[test]
fn execute_unwrap_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = execute_unwrap(UnwrapRequest {
        input: InputSource::Path(dir.path().join("missing.sp")),
        output: OutputSink::Writer(Box::new(Vec::new())),
        options: UnwrapOptions::default(),
    });
    assert!(matches!(result, Err(spicewrap_io::SpiceError::Io(_))));
}

#[test]
fn execute_unwrap_refuses_to_overwrite_input() {
    let file = write_netlist("test1.sp", TEST1_SP).unwrap();
    let result = execute_unwrap(UnwrapRequest {
        input: InputSource::Path(file.path.clone()),
        output: OutputSink::Path(file.path.clone()),
        options: UnwrapOptions::default(),
    });

    assert!(matches!(
        result,
        Err(spicewrap_io::SpiceError::OutputIsInput(_))
    ));
    assert_eq!(fs::read_to_string(&file.path).unwrap(), TEST1_SP);
}

#[test]
fn execute_reflow_refuses_to_overwrite_input_via_other_spelling() {
    let file = write_netlist("test1.sp", TEST1_SP).unwrap();
    let dir = file.path.parent().unwrap();
    let aliased = dir.join(".").join("test1.sp");
    let result = execute_reflow(ReflowRequest {
        input: InputSource::Path(file.path.clone()),
        output: OutputSink::Path(aliased),
        options: ReflowOptions::default(),
    });

    assert!(matches!(
        result,
        Err(spicewrap_io::SpiceError::OutputIsInput(_))
    ));
    assert_eq!(fs::read_to_string(&file.path).unwrap(), TEST1_SP);
}

#[test]
fn builder_netlist_round_trip() {
    let text = NetlistBuilder::new()
        .comment("bias network")
        .comment_cont("for the sense amplifier")
        .blank()
        .line("XBIAS vdd vss bias")
        .cont("ibias=50u")
        .cont("m=2")
        .build();

    let mut wrapped = Vec::new();
    let opts = ReflowOptions {
        wrap: WrapConfig::new(16).unwrap(),
        ..ReflowOptions::default()
    };
    reflow_stream(Cursor::new(text.clone()), &mut wrapped, opts).unwrap();
    let wrapped = String::from_utf8(wrapped).unwrap();

    assert_eq!(
        unwrap_to_string(&wrapped, UnwrapOptions::default()),
        unwrap_to_string(&text, UnwrapOptions::default())
    );
}

proptest! {
    #[test]
    fn reflow_preserves_statements(
        statements in prop::collection::vec("[A-Za-z][a-z0-9_=]{0,8}( [a-z0-9_=]{1,8}){0,12}", 1..20),
        width in 1usize..40,
    ) {
        let text = statements.join("\n");
        let mut wrapped = Vec::new();
        let opts = ReflowOptions {
            wrap: WrapConfig::new(width).unwrap(),
            ..ReflowOptions::default()
        };
        reflow_stream(Cursor::new(text.clone()), &mut wrapped, opts).unwrap();
        let wrapped = String::from_utf8(wrapped).unwrap();

        prop_assert_eq!(
            unwrap_text(&wrapped, UnwrapOptions::default()),
            unwrap_text(&text, UnwrapOptions::default())
        );
    }
}
