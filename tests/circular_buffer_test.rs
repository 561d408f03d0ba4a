use metro_surffaajat::data_structures::circular_buffer::CircularBuffer;

#[test]
fn overflow_keeps_capacity_and_evicts_oldest() {
    let capacity = 4;
    for k in 1..10 {
        let mut buffer = CircularBuffer::new(capacity);
        let inserted = capacity + k;
        for value in 0..inserted {
            buffer.add(value);
        }
        assert_eq!(buffer.len(), capacity);
        assert!(buffer.is_full());
        assert_eq!(buffer.back(), Some(&(inserted - 1)));
        assert_eq!(buffer[0], k);
        assert_eq!(buffer.front(), Some(&k));
        assert_eq!(
            buffer.iter().copied().collect::<Vec<_>>(),
            (k..inserted).collect::<Vec<_>>()
        );
    }
}

#[test]
fn filling_without_overflow_keeps_insertion_order() {
    let mut buffer = CircularBuffer::new(5);
    buffer.add('a');
    buffer.add('b');
    assert_eq!(buffer.len(), 2);
    assert!(!buffer.is_full());
    assert_eq!(buffer[0], 'a');
    assert_eq!(buffer[1], 'b');
    assert_eq!(buffer.iter().rev().collect::<String>(), "ba");
}

#[test]
fn back_mut_edits_newest_in_place() {
    let mut buffer = CircularBuffer::new(2);
    (0..3).for_each(|v| buffer.add(v));
    if let Some(newest) = buffer.back_mut() {
        *newest = 10;
    }
    buffer[0] += 100;
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![101, 10]);
}

#[test]
fn clear_resets_logical_order() {
    let mut buffer = CircularBuffer::new(3);
    (0..7).for_each(|v| buffer.add(v));
    buffer.clear();
    assert!(buffer.is_empty());
    buffer.add(1);
    assert_eq!(buffer[0], 1);
    assert_eq!(buffer.get(1), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn indexing_past_len_panics() {
    let mut buffer = CircularBuffer::new(3);
    buffer.add(1);
    let _ = buffer[1];
}
