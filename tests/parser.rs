use rdcalc::{
    Associativity, ParseError, ParseOptions,
    ast::{BinaryOperator, Expr, UnaryOperator},
    parse, parse_with,
};

fn shape(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("{src} failed: {e}")).to_string()
}

fn left(src: &str) -> String {
    let options = ParseOptions { associativity: Associativity::Left,
                                 ..ParseOptions::default() };
    parse_with(src, &options).unwrap_or_else(|e| panic!("{src} failed: {e}")).to_string()
}

#[test]
fn builds_expected_nodes() {
    assert_eq!(parse("42").unwrap(), Expr::constant(42.0));
    assert_eq!(parse("-6").unwrap(),
               Expr::unary(UnaryOperator::Minus, Expr::constant(6.0)));
    assert_eq!(parse("1+2").unwrap(),
               Expr::binary(BinaryOperator::Add, Expr::constant(1.0), Expr::constant(2.0)));
}

#[test]
fn precedence_shapes() {
    assert_eq!(shape("2+3*4"), "(2 + (3 * 4))");
    assert_eq!(shape("2*3+4"), "((2 * 3) + 4)");
    assert_eq!(shape("(2+3)*4"), "((2 + 3) * 4)");
    assert_eq!(shape("-(2+3)"), "-(2 + 3)");
    assert_eq!(shape("+-6"), "+-6");
}

#[test]
fn right_grouping_shapes() {
    assert_eq!(shape("1-2-3"), "(1 - (2 - 3))");
    assert_eq!(shape("8/4/2"), "(8 / (4 / 2))");
    assert_eq!(shape("1*2+3*4*5"), "((1 * 2) + (3 * (4 * 5)))");
}

#[test]
fn left_grouping_shapes() {
    assert_eq!(left("1-2-3"), "((1 - 2) - 3)");
    assert_eq!(left("8/4/2"), "((8 / 4) / 2)");
    assert_eq!(left("1*2+3*4*5"), "((1 * 2) + ((3 * 4) * 5))");
    assert_eq!(left("2+3*4"), "(2 + (3 * 4))");
}

#[test]
fn unterminated_parenthesis() {
    assert_eq!(parse("(2+3"),
               Err(ParseError::ExpectedClosingParen { position: 4 }));
    assert_eq!(parse("(2+3 4"),
               Err(ParseError::ExpectedClosingParen { position: 5 }));
}

#[test]
fn illegal_character_is_a_lex_error() {
    let error = parse("2 $ 3").unwrap_err();
    assert_eq!(error,
               ParseError::IllegalCharacter { character: '$',
                                              position:  2, });
    assert!(error.is_lex_error());
    assert_eq!(error.position(), 2);
}

#[test]
fn missing_operands() {
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    assert_eq!(parse("2+"), Err(ParseError::UnexpectedEndOfInput { position: 2 }));
    assert_eq!(parse("*2"),
               Err(ParseError::UnexpectedToken { token:    "'*'".to_string(),
                                                 position: 0, }));
    assert_eq!(parse("()"),
               Err(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                 position: 1, }));
}

#[test]
fn trailing_tokens_are_rejected_by_default() {
    assert_eq!(parse("2 3"),
               Err(ParseError::UnexpectedTrailingTokens { token:    "number 3".to_string(),
                                                          position: 2, }));
    assert!(matches!(parse("(1))"), Err(ParseError::UnexpectedTrailingTokens { .. })));

    let options = ParseOptions { allow_trailing: true,
                                 ..ParseOptions::default() };
    assert_eq!(parse_with("2 3", &options).unwrap(), Expr::constant(2.0));
}

#[test]
fn oversized_literal_is_rejected() {
    assert_eq!(parse("1+99999999999999999999"),
               Err(ParseError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                 position: 2, }));
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let depth = 10_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { limit: 512, .. })));

    let src = format!("{}1", "-".repeat(depth));
    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn depth_limit_is_configurable() {
    let options = ParseOptions { max_depth: 3,
                                 ..ParseOptions::default() };
    assert!(parse_with("1", &options).is_ok());
    assert!(matches!(parse_with("(1)", &options),
                     Err(ParseError::NestingTooDeep { limit: 3, .. })));
}

#[test]
fn long_chains_depend_on_grouping() {
    let src = vec!["1"; 1000].join("+");
    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));

    let options = ParseOptions { associativity: Associativity::Left,
                                 ..ParseOptions::default() };
    let src = vec!["1"; 400].join("+");
    assert!(parse_with(&src, &options).is_ok());
}

#[test]
fn left_folds_count_against_the_depth_limit() {
    let options = ParseOptions { associativity: Associativity::Left,
                                 max_depth: 4,
                                 ..ParseOptions::default() };
    assert!(parse_with("1+2", &options).is_ok());
    assert!(matches!(parse_with("1+2+3", &options),
                     Err(ParseError::NestingTooDeep { limit: 4, .. })));
    assert!(matches!(parse_with("1*2*3", &options),
                     Err(ParseError::NestingTooDeep { limit: 4, .. })));
}

#[test]
fn multi_byte_illegal_character() {
    assert_eq!(parse("1+é"),
               Err(ParseError::IllegalCharacter { character: 'é',
                                                  position:  2, }));
}

#[test]
fn error_messages_mention_position() {
    let message = parse("(2+3").unwrap_err().to_string();
    assert_eq!(message,
               "Error at position 4: Expected closing parenthesis ')' but none found.");
}
