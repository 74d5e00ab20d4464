use super::*;

#[test]
fn editing_respects_cursor_position() {
    let mut input = Input::default();
    for c in "helo".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.insert_char('l');
    assert_eq!(input.buf, "hello");

    input.move_right();
    input.backspace();
    assert_eq!(input.buf, "hell");

    input.move_left();
    input.move_left();
    input.delete();
    assert_eq!(input.buf, "hel");
}

#[test]
fn multibyte_chars_do_not_split() {
    let mut input = Input::default();
    for c in "añb".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "ab");
    assert_eq!(input.cursor, 1);
}

#[test]
fn masked_input_hides_contents() {
    let mut input = Input::masked();
    for c in "s3cr3t".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.display(), "******");
    assert_eq!(input.take(), "s3cr3t");
    assert!(input.buf.is_empty());
    assert_eq!(input.cursor, 0);
}
