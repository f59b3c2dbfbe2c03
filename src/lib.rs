//! # livemask
//!
//! Compresses sparse commitment liveness masks with a run-length transform
//! followed by a self-describing Huffman prefix code.
//!
//! A liveness mask is an ordered vector of booleans, `true` for a live
//! commitment. Masks that are mostly one value carry little information, so
//! the mask is first rewritten as the lengths of its consumed runs and those
//! run lengths are then Huffman coded. The code tree travels in front of the
//! payload, so the bitstream decodes with no out-of-band state.
//!
//! ## Quick Start
//!
//! ```rust
//! use livemask::LivenessMask;
//!
//! let mask = LivenessMask::from_text("01001010").unwrap();
//! let bits = mask.compress().unwrap();
//! let restored = LivenessMask::decompress(&bits).unwrap();
//! assert_eq!(mask, restored);
//! ```
//!
//! ### Random masks
//!
//! Generation takes the RNG by reference so callers can seed it:
//!
//! ```rust
//! use livemask::LivenessMask;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mask = LivenessMask::random(64, 12, &mut rng).unwrap();
//! assert_eq!(mask.count_live(), 12);
//! ```
//!
//! ### Measuring compression
//!
//! ```rust
//! use livemask::{report, LivenessMask};
//!
//! let mask = LivenessMask::from_text("00010010000001000000").unwrap();
//! let stats = report::measure(&mask).unwrap();
//! assert!(stats.round_trip_ok);
//! println!("{} bits per live commitment", stats.bits_per_live);
//! ```

pub mod bits;
pub mod cli;
pub mod error;
pub mod huffman;
pub mod mask;
pub mod report;

// Re-export commonly used types for convenience
pub use error::{LivemaskError, Result};
pub use huffman::CodeTree;
pub use mask::LivenessMask;
pub use report::{measure, CompressionReport};

/// Compresses a mask given as 0/1 text into a bitstream.
///
/// Convenience wrapper over [`LivenessMask::from_text`] and
/// [`LivenessMask::compress`].
///
/// # Example
///
/// ```rust
/// let bits = livemask::compress_text("0100100010").unwrap();
/// assert_eq!(livemask::decompress_to_text(&bits).unwrap(), "0100100010");
/// ```
pub fn compress_text(mask_text: &str) -> Result<Vec<bool>> {
    LivenessMask::from_text(mask_text)?.compress()
}

/// Decompresses a bitstream back into the 0/1 text of its mask.
pub fn decompress_to_text(bits: &[bool]) -> Result<String> {
    Ok(LivenessMask::decompress(bits)?.to_text())
}

/// livemask library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
