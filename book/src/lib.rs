mod key;
mod polyglot;

pub use key::polyglot_key;
pub use polyglot::{decode_move, BookEntry, BookError, OpeningBook};
