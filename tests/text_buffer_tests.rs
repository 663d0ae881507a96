/// Text buffer tests
///
/// Append, single-position mutation and copy semantics
/// Run with: cargo test --test text_buffer_tests
use cabinet::{CabinetError, TextBuffer};

#[test]
fn test_append_scenario() {
    let mut buffer = TextBuffer::new("Ola");
    buffer.append("Mundo");
    assert_eq!(buffer.content(), "OlaMundo");
    assert_eq!(buffer.len(), 8);
}

#[test]
fn test_repeated_append_is_exact_concatenation() {
    let parts = ["a", "", "bc", "def", " ", "ghij"];
    let mut buffer = TextBuffer::default();
    let mut expected = String::new();
    for part in parts {
        buffer.append(part);
        expected.push_str(part);
        assert_eq!(buffer.as_str(), expected);
        assert_eq!(buffer.len(), expected.len());
    }
}

#[test]
fn test_set_char_at_changes_only_that_position() {
    let mut buffer = TextBuffer::new("abcdef");
    buffer.set_char_at(3, 'X').unwrap();
    assert_eq!(buffer, "abcXef");

    for (index, (before, after)) in "abcdef".chars().zip(buffer.as_str().chars()).enumerate() {
        if index == 3 {
            assert_eq!(after, 'X');
        } else {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_set_char_at_invalid_index() {
    let mut buffer = TextBuffer::new("abc");
    let err = buffer.set_char_at(10, 'z').unwrap_err();
    assert_eq!(err, CabinetError::IndexOutOfRange { index: 10, len: 3 });
    assert_eq!(buffer, "abc");
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_copy_is_independent() {
    let mut original = TextBuffer::new("Ola");
    let copy = original.clone();

    original.append("Mundo");
    original.set_char_at(0, 'o').unwrap();

    assert_eq!(copy, "Ola");
    assert_eq!(original, "olaMundo");
}

#[test]
fn test_assignment_replaces_content() {
    let source = TextBuffer::new("Ola");
    let mut destination = TextBuffer::new("Mundo");
    destination.clone_from(&source);
    assert_eq!(destination, "Ola");

    destination.append("!");
    assert_eq!(source, "Ola");
    assert_eq!(destination, "Ola!");
}

#[test]
fn test_assignment_from_own_copy_is_noop() {
    let mut buffer = TextBuffer::new("same");
    let copy = buffer.clone();
    buffer.clone_from(&copy);
    assert_eq!(buffer, "same");
}

#[test]
fn test_display_and_conversions() {
    let buffer: TextBuffer = "hello".into();
    assert_eq!(format!("<{}>", buffer), "<hello>");
    let view: &str = buffer.as_ref();
    assert_eq!(view, "hello");
    assert_eq!(buffer.char_count(), 5);
}
