//! Tests for the prompt service using in-memory handles

use super::*;
use crate::Error;
use crate::app::services::field_cursor::{FieldType, FieldValue};
use pretty_assertions::assert_eq;
use std::io::Cursor;

type MemoryPrompt = PromptService<Cursor<Vec<u8>>, Vec<u8>>;

fn session(input: &str) -> MemoryPrompt {
    PromptService::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(service: MemoryPrompt) -> String {
    let (_, output) = service.into_parts();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_get_string_returns_raw_line() {
    let mut service = session("  hello world \r\n");

    assert_eq!(service.get_string("Name: ").unwrap(), "  hello world ");
    assert_eq!(transcript(service), "Name: ");
}

#[test]
fn test_get_string_accepts_empty_answer() {
    let mut service = session("\n");
    assert_eq!(service.get_string("Anything? ").unwrap(), "");
}

#[test]
fn test_get_integer_retries_with_message() {
    let mut service = session("abc\n4.5\n 42 \n");
    let options = PromptOptions::new("Age: ").with_invalid("Please enter a whole number");

    assert_eq!(service.get_integer(&options).unwrap(), 42);
    assert_eq!(
        transcript(service),
        "Age: Please enter a whole number\nAge: Please enter a whole number\nAge: "
    );
}

#[test]
fn test_retry_is_silent_without_message() {
    let mut service = session("x\n7\n");

    assert_eq!(service.get_short(&"Count: ".into()).unwrap(), 7);
    assert_eq!(transcript(service), "Count: Count: ");
}

#[test]
fn test_numeric_getters() {
    let mut service = session("-12\n9000000000\n2.5\n-0.125\n");
    let options = PromptOptions::new("> ");

    assert_eq!(service.get_short(&options).unwrap(), -12);
    assert_eq!(service.get_long(&options).unwrap(), 9_000_000_000);
    assert_eq!(service.get_float(&options).unwrap(), 2.5);
    assert_eq!(service.get_double(&options).unwrap(), -0.125);
}

#[test]
fn test_short_out_of_range_is_retried() {
    let mut service = session("70000\n700\n");
    assert_eq!(service.get_short(&"> ".into()).unwrap(), 700);
}

#[test]
fn test_get_char_rejects_empty() {
    let mut service = session("\nyes\n");
    let options = PromptOptions::new("Continue? ").with_invalid("Answer required");

    assert_eq!(service.get_char(&options).unwrap(), 'y');
    assert_eq!(transcript(service), "Continue? Answer required\nContinue? ");
}

#[test]
fn test_get_boolean_words() {
    let mut service = session("TRUE\n0\nmaybe\nFalse\n1\n");
    let options = PromptOptions::new("? ");

    assert!(service.get_boolean(&options).unwrap());
    assert!(!service.get_boolean(&options).unwrap());
    assert!(!service.get_boolean(&options).unwrap());
    assert!(service.get_boolean(&options).unwrap());
}

#[test]
fn test_input_closed_ends_loop() {
    let mut service = session("not a number\n");
    let options = PromptOptions::new("Value: ").with_invalid("Try again");

    match service.get_integer(&options) {
        Err(Error::InputClosed { prompt }) => assert_eq!(prompt, "Value:"),
        other => panic!("expected InputClosed, got {:?}", other),
    }
}

#[test]
fn test_get_typed_dispatch() {
    let mut service = session("  raw text\nseven\n7\n1.5\n");
    let options = PromptOptions::new("> ");

    assert_eq!(
        service.get_typed(FieldType::String, &options).unwrap(),
        FieldValue::String("  raw text".to_string())
    );
    assert_eq!(
        service.get_typed(FieldType::Long, &options).unwrap(),
        FieldValue::Long(7)
    );
    assert_eq!(
        service.get_typed(FieldType::Double, &options).unwrap(),
        FieldValue::Double(1.5)
    );
}

#[test]
fn test_print_and_println() {
    let mut service = session("");

    service.print("a").unwrap();
    service.println("b").unwrap();
    assert_eq!(transcript(service), "ab\n");
}

#[test]
fn test_prompt_options_from_str() {
    let options: PromptOptions = "Name: ".into();

    assert_eq!(options.prompt, "Name: ");
    assert!(options.on_invalid.is_none());
}
