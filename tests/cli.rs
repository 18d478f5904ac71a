use std::process::{Command, Output};

fn rdcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rdcalc")).args(args)
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run rdcalc: {e}"))
}

fn assert_prints(args: &[&str], expected: &str) {
    let output = rdcalc(args);
    assert!(output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected, "{args:?}");
}

#[test]
fn prints_tree_result_by_default() {
    assert_prints(&["2+3*4"], "14\n");
    assert_prints(&["-6"], "-6\n");
    assert_prints(&["7/2"], "3.5\n");
}

#[test]
fn all_prints_three_lines() {
    assert_prints(&["--all", "2+3*4"], "14\n2 3 4 * +\n14\n");
}

#[test]
fn single_strategy_output() {
    assert_prints(&["--strategy", "postfix", "-(2+3)"], "2 3 + neg\n");
    assert_prints(&["--strategy", "stack", "1-2-3"], "2\n");
    assert_prints(&["-s", "tree", "8/4/2"], "4\n");
}

#[test]
fn flags_reach_the_parser() {
    assert_prints(&["--left-assoc", "1-2-3"], "-4\n");
    assert_prints(&["--allow-trailing", "2 3"], "2\n");
}

#[test]
fn parse_error_goes_to_stderr_with_failure_status() {
    let output = rdcalc(&["(2+3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr),
               "Error at position 4: Expected closing parenthesis ')' but none found.\n");

    let output = rdcalc(&["--max-depth", "2", "(1)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nests deeper than 2 levels"));
}
