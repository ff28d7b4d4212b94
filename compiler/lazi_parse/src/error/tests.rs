use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_cite_expected_and_found() {
    let err = EvalError::UnexpectedToken {
        expected: TokenTag::EOF,
        found: TokenTag::Byte(b')'),
        span: Span::new(3, 4),
    };
    assert_eq!(err.to_string(), "expected <ASCII 0>, found ')'");

    let err = EvalError::UnclosedParen {
        found: TokenTag::EOF,
        span: Span::point(4),
        open: Span::new(0, 1),
    };
    assert_eq!(err.to_string(), "expected ')', found <ASCII 0>");

    let err = EvalError::ExpectedOperand {
        found: TokenTag::Name,
        span: Span::new(0, 1),
    };
    assert_eq!(err.to_string(), "expected integer or '(', found name");
}

#[test]
fn codes_and_classification() {
    let div = EvalError::DivisionByZero {
        span: Span::new(1, 2),
    };
    assert_eq!(div.code(), ErrorCode::E6001);
    assert!(!div.is_syntax_error());
    assert_eq!(div.found(), None);
    assert_eq!(div.span(), Span::new(1, 2));

    let operand = EvalError::ExpectedOperand {
        found: TokenTag::EOF,
        span: Span::point(0),
    };
    assert_eq!(operand.code(), ErrorCode::E1002);
    assert!(operand.is_syntax_error());
    assert_eq!(operand.found(), Some(TokenTag::EOF));
}

#[test]
fn unclosed_paren_diagnostic_points_at_both_parens() {
    let err = EvalError::UnclosedParen {
        found: TokenTag::EOF,
        span: Span::point(4),
        open: Span::new(0, 1),
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.labels[0].span, Span::point(4));
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(0, 1));
}

#[test]
fn division_diagnostic_has_note() {
    let diag = EvalError::DivisionByZero {
        span: Span::new(1, 2),
    }
    .to_diagnostic();
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.notes.len(), 1);
}
