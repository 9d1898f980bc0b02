//! First occurrence of either of two bytes, one word at a time.
//!
//! The finder consumes the unaligned head of the buffer byte-by-byte, then
//! tests one native word per step: XOR the window against a lane-broadcast
//! copy of each target and look for a zero lane. Individual bytes are only
//! touched again inside a window that tested positive, so the common case
//! costs one load, two XORs, and a handful of bit operations per word.

use crate::cursor::WordCursor;

/// `0x0101...01` -- the unit of every byte lane.
const LANE_LSB: usize = usize::MAX / 0xFF;

/// `0x8080...80` -- the high bit of every byte lane.
const LANE_MSB: usize = LANE_LSB << 7;

/// Broadcast a byte into every lane of a word.
#[inline]
fn broadcast(target: u8) -> usize {
    LANE_LSB * usize::from(target)
}

/// Whether any byte lane of `x` is zero.
///
/// The borrow in `x - LANE_LSB` can smear into the lane above a zero lane,
/// so the expression is only trusted as a whole-word predicate, never for
/// lane positions. Positions are recovered byte-by-byte by the caller.
#[inline]
fn has_zero_lane(x: usize) -> bool {
    (x.wrapping_sub(LANE_LSB) & !x & LANE_MSB) != 0
}

/// Whether any byte lane of `word` equals the byte broadcast in `pattern`.
#[inline]
fn contains_byte(word: usize, pattern: usize) -> bool {
    has_zero_lane(word ^ pattern)
}

/// Find the first occurrence of either `a` or `b` in `haystack`.
///
/// Returns the smallest index whose byte equals either target, or `None`
/// if neither occurs. Passing the same byte twice degenerates to a
/// single-byte search.
///
/// # Examples
///
/// ```
/// assert_eq!(twochr::find_either(b"hello world", b'o', b'w'), Some(4));
/// assert_eq!(twochr::find_either(b"hello world", b'w', b'o'), Some(4));
/// assert_eq!(twochr::find_either(b"hello", b'z', b'q'), None);
/// ```
pub fn find_either(haystack: &[u8], a: u8, b: u8) -> Option<usize> {
    let mut cursor = WordCursor::new(haystack);

    // Alignment prologue: the first window may be partial, so test its
    // bytes one at a time. The word loop below then only ever sees full
    // windows loaded from word-aligned addresses.
    while cursor.remaining() > 0 && !cursor.window_is_full() {
        let pos = haystack.len() - cursor.remaining();
        let byte = cursor.next_byte();
        if byte == a || byte == b {
            return Some(pos);
        }
    }

    let pattern_a = broadcast(a);
    let pattern_b = broadcast(b);
    while cursor.remaining() > 0 {
        if contains_byte(cursor.word(), pattern_a) || contains_byte(cursor.word(), pattern_b) {
            // Some lane matched. Walk the window testing both targets, so
            // the leftmost occurrence of either wins even when both land
            // in the same word. A full window is guaranteed to contain the
            // match; the short final window can get here on a zero-filled
            // slot matching a 0x00 target, in which case the walk runs out
            // of real bytes and the search ends empty.
            while cursor.remaining() > 0 {
                let pos = haystack.len() - cursor.remaining();
                let byte = cursor.next_byte();
                if byte == a || byte == b {
                    return Some(pos);
                }
            }
            return None;
        }
        cursor.skip_word();
    }
    None
}
