use capuchin::{
    ast::{Expression, Statement},
    error::{ParseError, ParseErrors},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::core::Parser,
    },
};
use pretty_assertions::assert_eq;

/// Parses `src`, failing the test on any syntax error, and returns the
/// canonical rendering.
fn render(src: &str) -> String {
    let (program, errors) = Parser::from_source(src).parse_program();
    assert!(errors.is_empty(), "unexpected errors for {src:?}: {errors:?}");
    program.to_string()
}

fn error_messages(src: &str) -> Vec<String> {
    let (_, errors) = Parser::from_source(src).parse_program();
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn lexer_produces_tokens_with_lines() {
    let src = "let five = 5;\nlet s = \"hi there\";\n// note\n[1, 2] != {\"a\": 1};";
    let tokens: Vec<Token> = Lexer::new(src).take_while(|t| !t.is(TokenKind::Eof)).collect();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Let,
                    TokenKind::Ident,
                    TokenKind::Assign,
                    TokenKind::Int,
                    TokenKind::Semicolon,
                    TokenKind::Let,
                    TokenKind::Ident,
                    TokenKind::Assign,
                    TokenKind::String,
                    TokenKind::Semicolon,
                    TokenKind::LBracket,
                    TokenKind::Int,
                    TokenKind::Comma,
                    TokenKind::Int,
                    TokenKind::RBracket,
                    TokenKind::NotEq,
                    TokenKind::LBrace,
                    TokenKind::String,
                    TokenKind::Colon,
                    TokenKind::Int,
                    TokenKind::RBrace,
                    TokenKind::Semicolon]);

    assert_eq!(tokens[8].literal, "hi there");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[5].line, 2);
    assert_eq!(tokens[10].line, 4);
}

#[test]
fn multiline_strings_advance_lines() {
    let tokens: Vec<Token> =
        Lexer::new("\"a\nb\"\nx").take_while(|t| !t.is(TokenKind::Eof)).collect();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::String, "a\nb", 1), Token::new(TokenKind::Ident, "x", 3)]);

    let (_, errors) = Parser::from_source("let s = \"one\ntwo\";\nlet = 1;").parse_program();
    assert_eq!(errors.iter().map(ParseError::line).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("x");
    assert!(lexer.next().is_some_and(|t| t.is(TokenKind::Ident)));
    for _ in 0..3 {
        assert!(lexer.next().is_some_and(|t| t.is(TokenKind::Eof)));
    }
}

#[test]
fn lexer_flags_illegal_characters() {
    let token = Lexer::new("@").next().unwrap();
    assert_eq!(token, Token::new(TokenKind::Illegal, "@", 1));
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (src, expected) in cases {
        assert_eq!(render(src), expected, "for {src:?}");
    }
}

#[test]
fn statement_rendering() {
    assert_eq!(render("let myVar = anotherVar;"), "let myVar = anotherVar;");
    assert_eq!(render("return 5;"), "return 5;");
    assert_eq!(render("return;"), "return;");
    assert_eq!(render("let x = 1\nx"), "let x = 1;x");
}

#[test]
fn compound_expression_rendering() {
    assert_eq!(render("if (x < y) { x }"), "if (x < y) { x }");
    assert_eq!(render("if (x < y) { x } else { y }"), "if (x < y) { x } else { y }");
    assert_eq!(render("fn(x, y) { x + y; }"), "fn(x, y) { (x + y) }");
    assert_eq!(render("fn() { return; }"), "fn() { return; }");
    assert_eq!(render("\"hello world\""), "hello world");
    assert_eq!(render("{\"one\": 1, two: 1 + 1}"), "{one: 1, two: (1 + 1)}");
    assert_eq!(render("{}"), "{}");
    assert_eq!(render("[]"), "[]");
}

#[test]
fn function_parameters() {
    for (src, expected) in [("fn() {};", vec![]),
                            ("fn(x) {};", vec!["x"]),
                            ("fn(x, y, z) {};", vec!["x", "y", "z"])]
    {
        let (program, errors) = Parser::from_source(src).parse_program();
        assert!(errors.is_empty());

        let Statement::Expression { expression: Expression::Function { parameters, .. },
                                    .. } = &program.statements[0]
        else {
            panic!("expected a function literal, got {:?}", program.statements[0]);
        };
        let names: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn literal_values() {
    let (program, errors) = Parser::from_source("5; true; \"s\"").parse_program();
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 3);

    assert!(matches!(&program.statements[0],
                     Statement::Expression { expression: Expression::Integer { value: 5, .. },
                                             .. }));
    assert!(matches!(&program.statements[1],
                     Statement::Expression { expression: Expression::Boolean { value: true, .. },
                                             .. }));
    assert!(matches!(&program.statements[2],
                     Statement::Expression { expression: Expression::Str { value, .. }, .. }
                     if value == "s"));
}

#[test]
fn let_errors() {
    assert_eq!(error_messages("let x 5;"), vec!["expected next token to be =, got INT instead"]);
    assert_eq!(error_messages("let = 10;"), vec!["expected next token to be IDENT, got = instead"]);
    assert_eq!(error_messages("let 838383;"),
               vec!["expected next token to be IDENT, got INT instead"]);
}

#[test]
fn parsing_resumes_after_an_error() {
    let (program, errors) = Parser::from_source("let x 5; let y = 10; y").parse_program();

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 10;y");
}

#[test]
fn expression_errors() {
    assert_eq!(error_messages("@"), vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(error_messages("99999999999999999999"),
               vec!["could not parse \"99999999999999999999\" as integer"]);

    // A malformed construct can leave tokens behind that fail to parse in
    // turn; only the first error is about the construct itself.
    assert_eq!(error_messages("if (x { x }")[0], "expected next token to be ), got { instead");
    assert_eq!(error_messages("fn(x { x }")[0], "expected next token to be ), got { instead");
    assert_eq!(error_messages("{ x }")[0], "expected next token to be :, got } instead");
    assert_eq!(error_messages("[1, 2")[0], "expected next token to be ], got EOF instead");
}

#[test]
fn unterminated_block_is_an_error() {
    assert_eq!(error_messages("if (true) { 1"), vec!["expected next token to be }, got EOF instead"]);
}

#[test]
fn errors_report_lines() {
    let (_, errors) = Parser::from_source("let a = 1;\nlet = 2;").parse_program();

    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                  found:    TokenKind::Assign,
                                                  line:     2, }]);
    assert_eq!(ParseErrors(errors).to_string(),
               "Error on line 2: expected next token to be IDENT, got = instead");
}

#[test]
fn parser_accepts_any_token_stream() {
    let tokens = vec![Token::new(TokenKind::Int, "1", 1),
                      Token::new(TokenKind::Plus, "+", 1),
                      Token::new(TokenKind::Int, "2", 1)];
    let (program, errors) = Parser::new(tokens.into_iter()).parse_program();

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "(1 + 2)");
}
