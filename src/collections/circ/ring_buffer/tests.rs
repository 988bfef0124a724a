#![cfg(test)]

use std::collections::VecDeque;
use std::hash::{BuildHasher, RandomState};
use std::mem::{self, MaybeUninit};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::panic::assert_panics;
use crate::util::testing::{Lifecycle, Tracked, ZeroSizedType};

fn slots<T, const N: usize>() -> [MaybeUninit<T>; N] {
    [const { MaybeUninit::uninit() }; N]
}

fn contents<T: Copy>(ring: &RingBuffer<'_, T>) -> VecDeque<T> {
    ring.iter().copied().collect()
}

#[test]
fn test_capacity_queries() {
    let null: RingBuffer<u8> = RingBuffer::null();
    assert_eq!(null.cap(), 0);
    assert_eq!(null.max_len(), 0);
    assert!(null.is_empty());
    assert!(null.is_full(), "A buffer without slots should be both empty and full.");
    assert!(null.data().is_none());

    let mut mem = slots::<u8, 4>();
    let base = mem.as_mut_ptr().cast::<u8>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    assert_eq!(ring.cap(), 4);
    assert_eq!(ring.max_len(), ring.cap());
    assert_eq!(ring.data().map(|ptr| ptr.as_ptr()), Some(base));

    for i in 0..10 {
        ring.push_back(i);
        assert!(ring.len() <= ring.cap());
        assert_eq!(ring.is_full(), ring.len() == ring.cap());
        assert_eq!(ring.is_empty(), ring.len() == 0);
    }
    for _ in 0..10 {
        ring.pop_front();
        assert!(ring.len() <= ring.cap());
        assert_eq!(ring.is_full(), ring.len() == ring.cap());
        assert_eq!(ring.is_empty(), ring.len() == 0);
    }
}

#[test]
fn test_fifo_and_lifo() {
    let mut mem = slots::<usize, 5>();
    let mut ring = RingBuffer::from_slots(&mut mem);

    ring.extend(1..=5);
    for i in 1..=5 {
        assert_eq!(ring.pop_front(), Some(i), "Popping from the front should preserve order.");
    }
    assert_eq!(ring.pop_front(), None);

    ring.extend(1..=5);
    for i in (1..=5).rev() {
        assert_eq!(ring.pop_back(), Some(i), "Popping from the back should reverse order.");
    }
    assert_eq!(ring.pop_back(), None);

    ring.push_front(2);
    ring.push_front(1);
    ring.push_back(3);
    assert_eq!(contents(&ring), [1, 2, 3]);
    assert_eq!(ring.front(), Some(&1));
    assert_eq!(ring.back(), Some(&3));
}

#[test]
fn test_eviction() {
    let mut mem = slots::<i32, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2, 3]);

    ring.push_back(4);
    assert_eq!(contents(&ring), [2, 3, 4], "Pushing to the back of a full buffer evicts the front.");
    assert_eq!(ring.len(), 3);

    ring.push_front(0);
    assert_eq!(contents(&ring), [0, 2, 3], "Pushing to the front of a full buffer evicts the back.");
    assert_eq!(ring.len(), 3);

    *ring.emplace_back(|| 10) += 1;
    assert_eq!(contents(&ring), [2, 3, 11]);
    *ring.emplace_front(|| 20) += 2;
    assert_eq!(contents(&ring), [22, 2, 3]);
}

#[test]
fn test_eviction_drops_before_construction() {
    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.push_back(life.track(0));
    ring.push_back(life.track(1));

    ring.emplace_back(|| {
        assert_eq!(life.dropped(), 1, "The front should be dropped before constructing.");
        life.track(2)
    });
    assert_eq!(ring.front().map(|t| t.id), Some(1));

    ring.emplace_front(|| {
        assert_eq!(life.dropped(), 2, "The back should be dropped before constructing.");
        life.track(3)
    });
    assert_eq!(ring.iter().map(|t| t.id).collect::<VecDeque<_>>(), [3, 1]);

    drop(ring);
    assert_eq!(life.alive(), 0);
}

#[test]
fn test_panicking_constructor_leaves_buffer_valid() {
    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.push_back(life.track(0));
    ring.push_back(life.track(1));

    assert_panics!({
        ring.emplace_back(|| panic!("constructor failed"));
    });
    assert_eq!(ring.len(), 1, "The evicted element shouldn't be counted after a failed emplace.");
    assert_eq!(ring.front().map(|t| t.id), Some(1));
    assert_eq!(life.dropped(), 1);

    drop(ring);
    assert_eq!(life.dropped(), 2, "No element should be dropped twice.");
}

#[test]
fn test_full_cursor_range_is_one_lap() {
    let mut mem = slots::<char, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend(['x', 'a', 'b', 'c']);
    assert!(ring.is_full());

    let end = ring.cursor_end();
    let mut cursor = ring.cursor_begin();
    assert_eq!(cursor.slot(), end.slot(), "Full buffers have begin and end in the same slot.");
    assert!(end.is_lap_pending());

    let mut visited = VecDeque::new();
    while cursor != end {
        visited.push_back(*cursor.get().expect("cursor should be within the window"));
        cursor.move_next();
        assert!(visited.len() <= 3, "Iteration over a full buffer should stop after one lap.");
    }
    assert_eq!(visited, ['a', 'b', 'c']);
    assert!(!end.is_lap_pending());
    assert!(cursor == end, "The lap should only be counted once.");
}

#[test]
fn test_cursor_partial_and_empty() {
    let mut mem = slots::<u32, 4>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    assert!(ring.cursor_begin() == ring.cursor_end(), "An empty range should be empty.");
    assert!(!ring.cursor_end().is_lap_pending());

    ring.extend([1, 2, 3, 4, 5, 6]);
    ring.pop_front();
    assert_eq!(contents(&ring), [4, 5, 6]);

    let end = ring.cursor_end();
    assert!(end.get().is_none(), "The end of a partial buffer isn't live.");

    let mut cursor = ring.cursor_begin();
    let mut sum = 0;
    while cursor != end {
        // SAFETY: The cursor hasn't reached the end, so its slot is live.
        sum += unsafe { *cursor.get_unchecked() };
        cursor.move_next();
    }
    assert_eq!(sum, 15);

    let before = cursor.post_prev();
    assert!(before == end);
    assert_eq!(cursor.get(), Some(&6));
    let before = cursor.post_next();
    assert_eq!(before.get(), Some(&6));
    assert!(cursor == end);

    let mut wrap = ring.cursor_begin();
    for _ in 0..ring.cap() {
        wrap.move_prev();
    }
    assert_eq!(wrap.slot(), ring.cursor_begin().slot(), "Moving a full lap should wrap around.");

    let null: RingBuffer<u32> = RingBuffer::null();
    let mut begin = null.cursor_begin();
    begin.move_next();
    assert!(begin == null.cursor_end(), "A null buffer should have an empty range.");
    assert!(begin.get().is_none());
}

#[test]
fn test_cursors_from_different_buffers() {
    let mut mem_a = slots::<u8, 2>();
    let mut mem_b = slots::<u8, 2>();
    let a = RingBuffer::from_slots(&mut mem_a);
    let b = RingBuffer::from_slots(&mut mem_b);
    assert!(a.cursor_begin() != b.cursor_begin());
}

#[test]
fn test_end_cursors_compare_equal() {
    let mut mem = slots::<u8, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2]);

    let end = ring.cursor_end();
    let copy = end.clone();
    assert!(end == copy, "Two end cursors should be the same position.");
    assert!(
        end.is_lap_pending() && copy.is_lap_pending(),
        "Comparing two end cursors shouldn't use up either lap."
    );

    assert!(ring.cursor_begin() != end);
    assert!(!end.is_lap_pending());
    assert!(end != copy, "The copy should still have its own lap pending.");
    assert!(end == copy);
}

#[test]
fn test_wraparound_matches_deque() {
    let mut mem = slots::<usize, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    let mut model = VecDeque::new();

    for i in 0..10 {
        ring.push_back(i);
        model.push_back(i);
        assert_eq!(contents(&ring), model);

        assert_eq!(ring.pop_front(), model.pop_front());
        assert_eq!(contents(&ring), model);
        assert_eq!(ring.len(), model.len());
    }
}

#[test]
fn test_random_operations_match_deque() {
    const CAP: usize = 5;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut mem = slots::<u32, CAP>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    let mut model = VecDeque::new();

    for step in 0..2_000 {
        let value = rng.r#gen::<u32>();
        match rng.gen_range(0..6) {
            0 => {
                if model.len() == CAP {
                    model.pop_front();
                }
                model.push_back(value);
                ring.push_back(value);
            },
            1 => {
                if model.len() == CAP {
                    model.pop_back();
                }
                model.push_front(value);
                ring.push_front(value);
            },
            2 => assert_eq!(ring.pop_front(), model.pop_front()),
            3 => assert_eq!(ring.pop_back(), model.pop_back()),
            4 => {
                let index = rng.gen_range(0..=CAP);
                assert_eq!(ring.get(index), model.get(index));
            },
            _ => {
                assert!(ring.iter().rev().eq(model.iter().rev()));
            },
        }

        assert_eq!(contents(&ring), model, "Contents diverged at step {step}.");
        assert_eq!(ring.front(), model.front());
        assert_eq!(ring.back(), model.back());
    }
}

#[test]
fn test_take_leaves_null() {
    let mut mem = slots::<u16, 3>();
    let mut first = RingBuffer::from_slots(&mut mem);
    first.extend([7, 8]);
    let data = first.data();

    let second = mem::take(&mut first);
    assert!(first.is_empty());
    assert_eq!(first.cap(), 0);
    assert!(first.data().is_none());
    assert_eq!(second.data(), data, "Moving shouldn't change the underlying memory.");
    assert_eq!(contents(&second), [7, 8]);
}

#[test]
fn test_swap() {
    let mut mem_a = slots::<u8, 2>();
    let mut mem_b = slots::<u8, 4>();
    let mut a = RingBuffer::from_slots(&mut mem_a);
    let mut b = RingBuffer::from_slots(&mut mem_b);
    a.push_back(1);
    b.extend([2, 3, 4]);

    a.swap(&mut b);
    assert_eq!((a.cap(), b.cap()), (4, 2));
    assert_eq!(contents(&a), [2, 3, 4]);
    assert_eq!(contents(&b), [1]);
}

#[test]
fn test_drop() {
    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 5>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    for i in 0..5 {
        ring.push_back(life.track(i));
    }
    drop(ring.pop_front());
    drop(ring.pop_back());
    assert_eq!(life.dropped(), 2);

    let remaining = ring.len();
    drop(ring);
    assert_eq!(
        life.dropped(),
        2 + remaining,
        "Only live elements should be dropped, never vacant slots."
    );
    assert_eq!(life.alive(), 0);
}

#[test]
fn test_clear_after_wrap() {
    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    for i in 0..5 {
        ring.push_back(life.track(i));
    }
    assert_eq!(life.dropped(), 2);
    assert_eq!(ring.as_slices().1.len(), 2, "The window should wrap.");

    ring.clear();
    assert_eq!(life.alive(), 0);
    assert!(ring.is_empty());
    assert_eq!(ring.cap(), 3);

    ring.push_back(life.track(9));
    assert_eq!(ring.front().map(|t| t.id), Some(9));
}

#[test]
fn test_panicking_drop_still_drops_wrapped_window() {
    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.push_back(life.track(0));
    ring.push_back(life.track_panicking(1));
    ring.extend([life.track(2), life.track(3)]);
    assert_eq!(ring.as_slices().1.len(), 1, "The window should wrap.");
    assert_eq!(life.alive(), 3);

    assert_panics!({
        drop(ring);
    });
    assert_eq!(life.alive(), 0, "Every live element should be dropped despite the panic.");

    let mut mem = slots::<Tracked, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.push_back(life.track_panicking(4));
    ring.push_back(life.track(5));

    assert_panics!({
        ring.clear();
    });
    assert!(ring.is_empty());
    assert_eq!(life.alive(), 0);
}

#[test]
fn test_zst_support() {
    let mut mem = slots::<ZeroSizedType, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    for _ in 0..5 {
        ring.push_back(ZeroSizedType);
    }
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.iter().count(), 3);

    let end = ring.cursor_end();
    let mut cursor = ring.cursor_begin();
    let mut count = 0;
    while cursor != end {
        count += 1;
        cursor.move_next();
    }
    assert_eq!(count, 3, "Slots of zero-sized types should still be distinct.");

    assert_eq!(ring.pop_back(), Some(ZeroSizedType));
    assert_eq!(ring.len(), 2);
}

#[test]
fn test_zero_capacity() {
    assert_panics!({
        let mut ring: RingBuffer<u8> = RingBuffer::null();
        ring.push_back(1);
    });

    let mut mem = slots::<u8, 0>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    assert_eq!(ring.pop_front(), None);
    assert_eq!(ring.front(), None);
    ring.clear();
    assert_panics!({
        ring.push_front(1);
    });
}

#[test]
fn test_index() {
    let mut mem = slots::<u8, 3>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2, 3, 4]);
    assert_eq!(ring[0], 2);
    ring[2] = 40;
    assert_eq!(ring[2], 40);

    assert_panics!({
        let _ = &ring[3];
    });
}

#[test]
fn test_unchecked_access() {
    let mut mem = slots::<u8, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2, 3]);

    // SAFETY: The buffer holds two elements.
    unsafe {
        assert_eq!(*ring.front_unchecked(), 2);
        assert_eq!(*ring.back_unchecked(), 3);
        assert_eq!(ring.pop_back_unchecked(), 3);
        assert_eq!(ring.pop_front_unchecked(), 2);
    }
    assert!(ring.is_empty());
}

#[test]
fn test_cloned_pushes() {
    let mut mem = slots::<String, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    let value = String::from("copy");
    ring.push_back_cloned(&value);
    ring.push_front_cloned(&value);
    assert_eq!(value, "copy");
    assert!(ring.iter().all(|item| *item == value));
}

#[test]
fn test_iterators() {
    let mut mem = slots::<usize, 4>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend(0..6);

    for item in ring.iter_mut() {
        *item *= 2;
    }
    assert_eq!(contents(&ring), [4, 6, 8, 10]);

    let mut iter = ring.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next_back(), Some(&10));
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.next(), Some(&6));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut iter = ring.into_iter();
    assert_eq!(iter.next_back(), Some(10));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.len(), 2);

    let life = Lifecycle::new();
    let mut mem = slots::<Tracked, 4>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend((0..4).map(|i| life.track(i)));
    drop(ring.into_iter());
    assert_eq!(life.alive(), 0, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_as_mut_slices() {
    let mut mem = slots::<u8, 4>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2, 3, 4]);
    ring.pop_front();
    ring.pop_front();
    ring.extend([5, 6]);

    let (head, tail) = ring.as_mut_slices();
    assert_eq!((&*head, &*tail), (&[3, 4][..], &[5, 6][..]));
    head[0] = 30;
    tail[1] = 60;
    assert_eq!(contents(&ring), [30, 4, 5, 60]);
}

#[test]
fn test_equality_ordering_and_hash() {
    let mut mem_a = slots::<usize, 3>();
    let mut mem_b = slots::<usize, 5>();
    let mut a = RingBuffer::from_slots(&mut mem_a);
    let mut b = RingBuffer::from_slots(&mut mem_b);

    // Same contents, with a wrapped window on one side only.
    a.extend([0, 1, 2, 3]);
    b.extend([1, 2, 3]);
    assert_eq!(a, b, "Equality shouldn't depend on capacity or wrapping.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal buffers should hash equally.");

    b.push_back(0);
    assert!(a < b, "Buffers should compare lexicographically.");
    b.pop_back();
    b.pop_back();
    assert!(a > b);
    assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
}

#[test]
fn test_formatting() {
    let mut mem = slots::<u8, 2>();
    let mut ring = RingBuffer::from_slots(&mut mem);
    ring.extend([1, 2, 3]);
    assert_eq!(format!("{ring}"), "[2, 3]");
    assert_eq!(
        format!("{ring:?}"),
        "RingBuffer { contents: [2, 3], len: 2, cap: 2 }"
    );
}
