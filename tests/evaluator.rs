use std::rc::Rc;

use capuchin::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        parser::core::Parser,
        value::core::{NULL, Object, ObjectType},
    },
};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Object {
    let (program, errors) = Parser::from_source(src).parse_program();
    assert!(errors.is_empty(), "unexpected errors for {src:?}: {errors:?}");
    eval_program(&program, &Environment::new())
}

fn int(value: i64) -> Object {
    Object::Integer(value)
}

fn error_message(src: &str) -> String {
    match eval(src) {
        Object::Error(e) => e.to_string(),
        other => panic!("expected an error for {src:?}, got {other}"),
    }
}

#[test]
fn integer_expressions() {
    let cases = [("5", 5),
                 ("-10", -10),
                 ("--5", 5),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("3 * (3 * 3) + 10", 37),
                 ("7 / 2", 3),
                 ("-7 / 2", -3)];

    for (src, expected) in cases {
        assert_eq!(eval(src), int(expected), "for {src:?}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("true == true", true),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false),
                 ("!true", false),
                 ("!!5", true),
                 ("!0", false)];

    for (src, expected) in cases {
        assert_eq!(eval(src), Object::Boolean(expected), "for {src:?}");
    }
}

#[test]
fn null_compares_by_value() {
    let src = "let nothing = if (false) { 1 }; nothing == if (false) { 2 }";
    assert_eq!(eval(src), Object::Boolean(true));
    assert_eq!(eval("let nothing = if (false) { 1 }; nothing != false"), Object::Boolean(true));
    assert_eq!(eval("!if (false) { 1 }"), Object::Boolean(true));
}

#[test]
fn if_else_expressions() {
    assert_eq!(eval("if (true) { 10 }"), int(10));
    assert_eq!(eval("if (false) { 10 }"), NULL);
    assert_eq!(eval("if (1) { 10 }"), int(10));
    assert_eq!(eval("if (1 < 2) { 10 } else { 20 }"), int(10));
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), int(20));
    assert_eq!(eval("if (true) { }"), NULL);
}

#[test]
fn return_statements() {
    let cases = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
                 ("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);", 20)];

    for (src, expected) in cases {
        assert_eq!(eval(src), int(expected), "for {src:?}");
    }
    assert_eq!(eval("return;"), NULL);
}

#[test]
fn return_stops_at_call_boundary() {
    let src = "let inner = fn() { return 1; }; let outer = fn() { inner(); 2 }; outer()";
    assert_eq!(eval(src), int(2));
}

#[test]
fn error_messages_short_circuit() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("-\"a\"", "unknown operator: -STRING"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
                 ("\"a\" == \"a\"", "unknown operator: STRING == STRING"),
                 ("\"a\" + 1", "type mismatch: STRING + INTEGER"),
                 ("[1] + [2]", "unknown operator: ARRAY + ARRAY"),
                 ("true < false", "unknown operator: BOOLEAN < BOOLEAN"),
                 ("{\"name\": \"x\"}[fn(x) { x }];", "unusable as hash key: FUNCTION"),
                 ("{[1]: 2}", "unusable as hash key: ARRAY"),
                 ("[1, 2][true]", "index operator not supported: ARRAY[BOOLEAN]"),
                 ("\"abc\"[0]", "index operator not supported: STRING"),
                 ("10 / (5 - 5)", "division by zero"),
                 ("true()", "not a function: BOOLEAN"),
                 ("fn(a, b) { a }(1)", "wrong number of arguments: want=2, got=1")];

    for (src, expected) in cases {
        assert_eq!(error_message(src), expected, "for {src:?}");
    }
}

#[test]
fn error_inside_function_propagates_to_caller() {
    let src = "let f = fn() { missing }; let g = fn() { f() + 1 }; g(); 99";
    assert_eq!(eval(src),
               Object::Error(RuntimeError::UnknownIdentifier { name: "missing".to_string() }));
}

#[test]
fn let_statements() {
    assert_eq!(eval("let a = 5; a;"), int(5));
    assert_eq!(eval("let a = 5 * 5; a;"), int(25));
    assert_eq!(eval("let a = 5; let b = a; let c = a + b + 5; c;"), int(15));
    assert_eq!(eval("let a = 5;"), NULL);
}

#[test]
fn function_objects() {
    let Object::Function(function) = eval("fn(x) { x + 2; };") else {
        panic!("expected a function");
    };

    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].value, "x");
    assert_eq!(function.body.to_string(), "(x + 2)");
    assert_eq!(Object::Function(Rc::clone(&function)).to_string(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn function_application() {
    let cases = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5)];

    for (src, expected) in cases {
        assert_eq!(eval(src), int(expected), "for {src:?}");
    }
}

#[test]
fn closures_capture_definition_scope() {
    let src = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        let x = 100;
        addTwo(2)
    ";
    assert_eq!(eval(src), int(4));
}

#[test]
fn closures_share_their_scope() {
    // `later` is bound after `peek` is created but before it is called.
    let src = "
        let make = fn() {
            let peek = fn() { later };
            let later = 7;
            peek
        };
        make()()
    ";
    assert_eq!(eval(src), int(7));
}

#[test]
fn inner_let_shadows_outer_binding() {
    let src = "let x = 1; let f = fn() { let x = 2; x }; f() * 10 + x";
    assert_eq!(eval(src), int(21));
}

#[test]
fn strings() {
    assert_eq!(eval("\"Hello World!\""), Object::from("Hello World!"));
    assert_eq!(eval("\"Hello\" + \" \" + \"World!\""), Object::from("Hello World!"));
}

#[test]
fn builtin_functions() {
    let cases = [("len(\"\")", int(0)),
                 ("len(\"four\")", int(4)),
                 ("len(\"hello world\")", int(11)),
                 ("len([1, 2])", int(2)),
                 ("first([1, 2, 3])", int(1)),
                 ("first([])", NULL),
                 ("last([1, 2, 3])", int(3)),
                 ("last([])", NULL),
                 ("rest([])", NULL),
                 ("puts(\"hello\", 1)", NULL)];

    for (src, expected) in cases {
        assert_eq!(eval(src), expected, "for {src:?}");
    }

    assert_eq!(eval("rest([1, 2, 3])").to_string(), "[2, 3]");
    assert_eq!(eval("push([], 1)").to_string(), "[1]");
}

#[test]
fn builtin_errors() {
    let cases = [("len(1)", "argument to `len` not supported, got INTEGER"),
                 ("len(\"one\", \"two\")", "`len` takes one argument"),
                 ("len()", "`len` takes one argument"),
                 ("first(1)", "argument to `first` must be ARRAY, got INTEGER"),
                 ("last(\"s\")", "argument to `last` must be ARRAY, got STRING"),
                 ("rest({})", "argument to `rest` must be ARRAY, got HASH"),
                 ("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER"),
                 ("push([1])", "`push` takes two arguments")];

    for (src, expected) in cases {
        assert_eq!(error_message(src), expected, "for {src:?}");
    }
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval("let len = fn(x) { 42 }; len([1])"), int(42));
    assert_eq!(eval("len").object_type(), ObjectType::Builtin);
    assert_eq!(eval("len").to_string(), "builtin function");
}

#[test]
fn push_leaves_original_array_untouched() {
    let src = "let a = [1, 2]; let b = push(a, 3); [len(a), len(b)]";
    assert_eq!(eval(src).to_string(), "[2, 3]");
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]").to_string(), "[1, 4, 6]");

    let cases = [("[1, 2, 3][0]", int(1)),
                 ("[1, 2, 3][1 + 1]", int(3)),
                 ("let i = 0; [1][i];", int(1)),
                 ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", int(6)),
                 ("[1, 2, 3][3]", NULL),
                 ("[1, 2, 3][-1]", NULL)];

    for (src, expected) in cases {
        assert_eq!(eval(src), expected, "for {src:?}");
    }
}

#[test]
fn hash_literals_and_indexing() {
    let src = "
        let two = \"two\";
        {
            \"one\": 10 - 9,
            two: 1 + 1,
            \"thr\" + \"ee\": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    ";
    let Object::Hash(hash) = eval(src) else {
        panic!("expected a hash");
    };
    assert_eq!(hash.pairs.len(), 6);

    for (key, expected) in [(Object::from("one"), 1),
                            (Object::from("two"), 2),
                            (Object::from("three"), 3),
                            (int(4), 4),
                            (Object::Boolean(true), 5),
                            (Object::Boolean(false), 6)]
    {
        let hash_key = key.hash_key().unwrap();
        assert_eq!(hash.get(&hash_key), Some(&int(expected)), "for key {key}");
    }

    let cases = [("{\"foo\": 5}[\"foo\"]", int(5)),
                 ("{\"foo\": 5}[\"bar\"]", NULL),
                 ("let key = \"foo\"; {\"foo\": 5}[key]", int(5)),
                 ("{}[\"foo\"]", NULL),
                 ("{5: 5}[5]", int(5)),
                 ("{true: 5}[true]", int(5)),
                 ("{1: 1, 1: 2}[1]", int(2))];

    for (src, expected) in cases {
        assert_eq!(eval(src), expected, "for {src:?}");
    }
}

#[test]
fn hash_keys_follow_value_equality() {
    let hello1 = Object::from("Hello World");
    let hello2 = Object::from(String::from("Hello World"));
    let other = Object::from("My name is johnny");

    assert_eq!(hello1.hash_key(), hello2.hash_key());
    assert_ne!(hello1.hash_key(), other.hash_key());
    assert_ne!(int(1).hash_key(), Object::Boolean(true).hash_key());
    assert_eq!(NULL.hash_key(), None);
}

#[test]
fn program_result_is_last_statement() {
    assert_eq!(eval(""), NULL);
    assert_eq!(eval("1; 2; 3"), int(3));
}
