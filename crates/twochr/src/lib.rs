//! Word-at-a-time search for either of two bytes in a byte buffer.
//!
//! Two cooperating pieces: [`WordCursor`] loads the buffer in native-word
//! windows while hiding alignment and byte order from its caller, and
//! [`find_either`] drives it with a per-word zero-lane bit test, touching
//! individual bytes only in the unaligned head and inside a word known to
//! contain a hit.
//!
//! The scan allocates nothing, contains no `unsafe`, and uses no vector
//! registers. Native word loads and a handful of bit operations are the
//! whole trick.

mod cursor;
mod find;

pub use cursor::{WordCursor, WORD_BYTES};
pub use find::find_either;
