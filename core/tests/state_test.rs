use quarter_core::core::state::FieldKind;
use quarter_core::core::{StateBuffer, StateError, StateReader, StateWriter};

#[test]
fn test_values_read_back_in_order() {
    let mut buf = StateBuffer::new();
    buf.put_int(-20);
    buf.put_int(1500);
    buf.put_bool(true);
    buf.put_int(3);
    assert_eq!(buf.len(), 4);

    assert_eq!(buf.get_int(), Ok(-20));
    assert_eq!(buf.get_int(), Ok(1500));
    assert_eq!(buf.get_bool(), Ok(true));
    assert_eq!(buf.get_int(), Ok(3));
    assert_eq!(buf.get_int(), Err(StateError::Exhausted));
}

#[test]
fn test_kind_mismatch_does_not_consume() {
    let mut buf = StateBuffer::new();
    buf.put_bool(false);

    assert_eq!(
        buf.get_int(),
        Err(StateError::TypeMismatch {
            expected: FieldKind::Int,
            found: FieldKind::Bool,
        })
    );
    assert_eq!(buf.get_bool(), Ok(false));
}

#[test]
fn test_rewind_replays_from_start() {
    let mut buf = StateBuffer::new();
    buf.put_int(7);
    assert_eq!(buf.get_int(), Ok(7));
    buf.rewind();
    assert_eq!(buf.get_int(), Ok(7));
}

#[test]
fn test_empty_buffer() {
    let mut buf = StateBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.get_bool(), Err(StateError::Exhausted));
}
