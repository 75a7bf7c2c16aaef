use std::fs;
use std::path::{Path, PathBuf};

use cozy_chess::{File, Move, Piece, Rank, Square};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use thiserror::Error;
use utils::Position;

use crate::key::polyglot_key;

const ENTRY_SIZE: usize = 16;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read opening book {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed opening book: {0} bytes is not a whole number of entries")]
    Malformed(usize),
}

/// One book move for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    pub mv: Move,
    pub weight: u16,
    pub learn: u32,
}

#[derive(Debug, Clone, Copy)]
struct RawEntry {
    key: u64,
    raw_move: u16,
    weight: u16,
    learn: u32,
}

/// A Polyglot opening book held in memory, sorted by position key.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: Vec<RawEntry>,
}

impl OpeningBook {
    /// A book without entries. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let book = Self::from_bytes(&bytes)?;
        log::info!(
            "Loaded {} entries from opening book {}",
            book.len(),
            path.display()
        );
        Ok(book)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BookError> {
        if bytes.len() % ENTRY_SIZE != 0 {
            return Err(BookError::Malformed(bytes.len()));
        }

        let mut entries: Vec<RawEntry> = bytes
            .chunks_exact(ENTRY_SIZE)
            .map(|chunk| RawEntry {
                key: read_be(&chunk[0..8]),
                raw_move: read_be(&chunk[8..10]) as u16,
                weight: read_be(&chunk[10..12]) as u16,
                learn: read_be(&chunk[12..16]) as u32,
            })
            .collect();
        entries.sort_by_key(|entry| entry.key);

        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Book moves for `position`, in file order. Entries whose move is not legal here
    /// are skipped.
    pub fn lookup(&self, position: &Position) -> Vec<BookEntry> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        let Some(key) = polyglot_key(position) else {
            return Vec::new();
        };

        let legal = position.legal_moves();
        let start = self.entries.partition_point(|entry| entry.key < key);

        self.entries[start..]
            .iter()
            .take_while(|entry| entry.key == key)
            .map(|entry| BookEntry {
                mv: decode_move(entry.raw_move),
                weight: entry.weight,
                learn: entry.learn,
            })
            .filter(|entry| legal.contains(&entry.mv))
            .collect()
    }

    /// Picks a book move at random, weighted by entry weight. When every weight is zero
    /// the pick is uniform.
    pub fn weighted_choice(&self, position: &Position) -> Option<Move> {
        let entries = self.lookup(position);
        if entries.is_empty() {
            return None;
        }

        let mut rng = thread_rng();
        let weights = entries.iter().map(|entry| entry.weight as u32);
        let chosen = match WeightedIndex::new(weights) {
            Ok(distribution) => &entries[distribution.sample(&mut rng)],
            Err(_) => entries.choose(&mut rng)?,
        };
        Some(chosen.mv)
    }
}

/// Decodes a Polyglot move: to-file in bits 0-2, to-rank 3-5, from-file 6-8,
/// from-rank 9-11 and the promotion piece in 12-14.
///
/// Castling comes out as the king taking its own rook, which is also how cozy-chess
/// represents it.
pub fn decode_move(raw: u16) -> Move {
    let square = |bits: u16| {
        Square::new(
            File::index((bits & 7) as usize),
            Rank::index(((bits >> 3) & 7) as usize),
        )
    };

    let promotion = match (raw >> 12) & 7 {
        1 => Some(Piece::Knight),
        2 => Some(Piece::Bishop),
        3 => Some(Piece::Rook),
        4 => Some(Piece::Queen),
        _ => None,
    };

    Move {
        from: square(raw >> 6),
        to: square(raw),
        promotion,
    }
}

#[inline(always)]
fn read_be(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_KEY: u64 = 0x463b96181691fc9c;

    fn encode(from: Square, to: Square, promotion: u16) -> u16 {
        (promotion << 12)
            | ((from.rank() as u16) << 9)
            | ((from.file() as u16) << 6)
            | ((to.rank() as u16) << 3)
            | to.file() as u16
    }

    fn entry_bytes(key: u64, raw_move: u16, weight: u16) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(ENTRY_SIZE);
        bytes.extend_from_slice(&key.to_be_bytes());
        bytes.extend_from_slice(&raw_move.to_be_bytes());
        bytes.extend_from_slice(&weight.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes
    }

    fn start_book(weights: [u16; 2]) -> OpeningBook {
        let mut bytes = Vec::new();
        // Stored out of order on purpose
        bytes.extend(entry_bytes(0x823c9b50fd114196, encode(Square::E7, Square::E5, 0), 5));
        bytes.extend(entry_bytes(START_KEY, encode(Square::E2, Square::E4, 0), weights[0]));
        bytes.extend(entry_bytes(START_KEY, encode(Square::E2, Square::E5, 0), 100));
        bytes.extend(entry_bytes(START_KEY, encode(Square::D2, Square::D4, 0), weights[1]));
        OpeningBook::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_decode_castling() {
        let mv = decode_move(encode(Square::E1, Square::H1, 0));
        assert_eq!(
            mv,
            Move {
                from: Square::E1,
                to: Square::H1,
                promotion: None
            }
        );
        assert_eq!(decode_move(263), mv);
    }

    #[test]
    fn test_decode_promotion() {
        let queen = decode_move(19512);
        assert_eq!(
            queen,
            Move {
                from: Square::A7,
                to: Square::A8,
                promotion: Some(Piece::Queen)
            }
        );

        let knight = decode_move(encode(Square::B2, Square::B1, 1));
        assert_eq!(knight.promotion, Some(Piece::Knight));
        assert_eq!(knight.from, Square::B2);
        assert_eq!(knight.to, Square::B1);
    }

    #[test]
    fn test_lookup_skips_illegal_moves() {
        let book = start_book([10, 20]);
        assert_eq!(book.len(), 4);

        let entries = book.lookup(&Position::new());
        let moves: Vec<Move> = entries.iter().map(|entry| entry.mv).collect();
        assert_eq!(
            moves,
            vec![
                decode_move(encode(Square::E2, Square::E4, 0)),
                decode_move(encode(Square::D2, Square::D4, 0)),
            ]
        );
        assert_eq!(entries[1].weight, 20);
    }

    #[test]
    fn test_lookup_after_move() {
        let book = start_book([10, 20]);
        let mut position = Position::new();
        let mv = position.parse_uci("e2e4").unwrap();
        position.push(mv);

        let choice = book.weighted_choice(&position).unwrap();
        assert_eq!(position.format_uci(choice), "e7e5");
    }

    #[test]
    fn test_weighted_choice_ignores_zero_weight() {
        let book = start_book([0, 7]);
        let position = Position::new();
        for _ in 0..20 {
            let mv = book.weighted_choice(&position).unwrap();
            assert_eq!(position.format_uci(mv), "d2d4");
        }
    }

    #[test]
    fn test_weighted_choice_all_zero_is_uniform() {
        let book = start_book([0, 0]);
        let position = Position::new();
        let mv = book.weighted_choice(&position).unwrap();
        assert!(["e2e4", "d2d4"].contains(&position.format_uci(mv).as_str()));
    }

    #[test]
    fn test_miss_returns_none() {
        let book = start_book([1, 1]);
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(book.lookup(&position).is_empty());
        assert_eq!(book.weighted_choice(&position), None);
        assert_eq!(OpeningBook::empty().weighted_choice(&Position::new()), None);
    }

    #[test]
    fn test_malformed_length() {
        let bytes = vec![0u8; ENTRY_SIZE + 1];
        assert!(matches!(
            OpeningBook::from_bytes(&bytes),
            Err(BookError::Malformed(17))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = OpeningBook::load("/nonexistent/book.bin");
        assert!(matches!(result, Err(BookError::Io { .. })));
    }
}
