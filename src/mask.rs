//! The liveness mask and its run-length view.

use crate::error::{LivemaskError, Result};
use crate::huffman;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Tracks which commitments are live. Essentially a sparse bit vector whose
/// length is fixed at construction; every transform produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessMask {
    bits: Vec<bool>,
}

impl LivenessMask {
    /// Draws a uniformly random arrangement of `live` live and `total - live`
    /// consumed commitments. The RNG is injected so callers can seed it.
    pub fn random<R: Rng + ?Sized>(total: usize, live: usize, rng: &mut R) -> Result<Self> {
        if live > total {
            return Err(LivemaskError::InvalidInput(format!(
                "live count {} exceeds total {}",
                live, total
            )));
        }
        let mut bits = vec![true; live];
        bits.resize(total, false);
        bits.shuffle(rng);
        Ok(Self { bits })
    }

    /// Parses a positional 0/1 rendering, the inverse of
    /// [`to_text`](Self::to_text).
    pub fn from_text(text: &str) -> Result<Self> {
        let bits = text
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(LivemaskError::InvalidInput(format!(
                    "unexpected character {:?} in mask string",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { bits })
    }

    /// Renders the mask as a string of zeros and ones, one per commitment.
    pub fn to_text(&self) -> String {
        self.bits
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn count_live(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Splits the mask into the lengths of its maximal consumed runs, one run
    /// before each live commitment plus the trailing (possibly empty) run.
    /// The result always holds `count_live() + 1` entries.
    pub fn to_rle(&self) -> Vec<u64> {
        let mut runs = Vec::new();
        let mut current = 0u64;
        for &bit in &self.bits {
            if bit {
                runs.push(current);
                current = 0;
            } else {
                current += 1;
            }
        }
        runs.push(current);
        runs
    }

    /// Rebuilds a mask from its run lengths, re-inserting a single live
    /// commitment between consecutive runs.
    pub fn from_rle(runs: &[u64]) -> Self {
        let mut bits = Vec::new();
        for (i, &run) in runs.iter().enumerate() {
            if i > 0 {
                bits.push(true);
            }
            bits.resize(bits.len() + run as usize, false);
        }
        Self { bits }
    }

    /// Compresses this mask into a self-describing Huffman bitstream over its
    /// run lengths.
    pub fn compress(&self) -> Result<Vec<bool>> {
        huffman::compress(&self.to_rle())
    }

    /// Recovers a mask from a bitstream produced by
    /// [`compress`](Self::compress).
    pub fn decompress(bits: &[bool]) -> Result<Self> {
        Ok(Self::from_rle(&huffman::decompress(bits)?))
    }
}

impl fmt::Display for LivenessMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rle_example() {
        let mask = LivenessMask::from_text("01001010").unwrap();
        assert_eq!(mask.to_rle(), vec![1, 2, 1, 1, 0]);
    }

    #[test]
    fn test_rle_bijection() {
        for text in ["", "0", "1", "01001010", "0000", "1111", "100101", "10"] {
            let mask = LivenessMask::from_text(text).unwrap();
            assert_eq!(LivenessMask::from_rle(&mask.to_rle()), mask);
        }
    }

    #[test]
    fn test_rle_symbol_count() {
        for text in ["", "0", "1", "01001010", "0000", "1111"] {
            let mask = LivenessMask::from_text(text).unwrap();
            assert_eq!(mask.to_rle().len(), mask.count_live() + 1);
        }
    }

    #[test]
    fn test_text_round_trip() {
        let mask = LivenessMask::from_text("0101100").unwrap();
        assert_eq!(mask.to_text(), "0101100");
        assert_eq!(mask.to_string(), "0101100");
    }

    #[test]
    fn test_invalid_text_rejected() {
        let err = LivenessMask::from_text("0102").unwrap_err();
        assert!(matches!(err, LivemaskError::InvalidInput(_)));
    }

    #[test]
    fn test_random_counts() {
        let mut rng = StdRng::seed_from_u64(17);
        let mask = LivenessMask::random(100, 30, &mut rng).unwrap();
        assert_eq!(mask.len(), 100);
        assert_eq!(mask.count_live(), 30);
    }

    #[test]
    fn test_random_edge_cases() {
        let mut rng = StdRng::seed_from_u64(17);

        let none_live = LivenessMask::random(10, 0, &mut rng).unwrap();
        assert_eq!(none_live.count_live(), 0);

        let all_live = LivenessMask::random(10, 10, &mut rng).unwrap();
        assert_eq!(all_live.count_live(), 10);

        assert!(LivenessMask::random(5, 6, &mut rng).is_err());
    }

    #[test]
    fn test_compress_round_trip() {
        for text in ["", "0", "1", "01001010", "0000", "1111", "0001000000010"] {
            let mask = LivenessMask::from_text(text).unwrap();
            let bits = mask.compress().unwrap();
            assert_eq!(LivenessMask::decompress(&bits).unwrap(), mask);
        }
    }

    #[test]
    fn test_compress_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(5);
        let mask = LivenessMask::random(512, 40, &mut rng).unwrap();
        let bits = mask.compress().unwrap();
        assert_eq!(LivenessMask::decompress(&bits).unwrap(), mask);
    }
}
