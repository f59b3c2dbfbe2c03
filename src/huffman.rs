//! Huffman prefix coding over run-length symbols.
//!
//! The code tree is rebuilt per compression call from the symbol frequencies
//! and shipped in front of the payload in a self-describing form, so the
//! bitstream decodes with no out-of-band state.

use crate::bits::{bits_to_int, int_to_bits, BitCursor};
use crate::error::{LivemaskError, Result};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A (sub)tree of Huffman codes. Left edges read as `0`, right edges as `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTree {
    Leaf {
        symbol: u64,
        /// Occurrence count. `None` on trees reconstructed from a bitstream,
        /// where counts are not transmitted and decoding never needs them.
        weight: Option<u64>,
    },
    Internal {
        left: Box<CodeTree>,
        right: Box<CodeTree>,
        weight: Option<u64>,
    },
}

/// Min-heap entry during construction. `seq` keeps equal weights ordered by
/// insertion so a single build is deterministic; which equal-weight subtree
/// ends up left or right carries no meaning.
struct HeapEntry {
    weight: u64,
    seq: usize,
    tree: CodeTree,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the lowest weight pops first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl CodeTree {
    /// Builds a code tree for the given symbol sequence by greedily merging
    /// the two lowest-weight subtrees until one remains. A single distinct
    /// symbol yields a lone leaf; an empty sequence is an error.
    pub fn build(symbols: &[u64]) -> Result<Self> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let mut heap: BinaryHeap<HeapEntry> = counts
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, count))| HeapEntry {
                weight: count,
                seq,
                tree: CodeTree::Leaf {
                    symbol,
                    weight: Some(count),
                },
            })
            .collect();

        let mut seq = heap.len();
        loop {
            let low = match heap.pop() {
                Some(entry) => entry,
                None => {
                    return Err(LivemaskError::InvalidInput(
                        "cannot build a Huffman tree from an empty symbol sequence".to_string(),
                    ))
                }
            };
            let high = match heap.pop() {
                Some(entry) => entry,
                None => return Ok(low.tree),
            };

            let weight = low.weight + high.weight;
            heap.push(HeapEntry {
                weight,
                seq,
                tree: CodeTree::Internal {
                    left: Box::new(low.tree),
                    right: Box::new(high.tree),
                    weight: Some(weight),
                },
            });
            seq += 1;
        }
    }

    /// Maps every symbol to its codeword, the root-to-leaf path with `0` for
    /// left and `1` for right. A lone leaf gets the empty codeword.
    pub fn codeword_map(&self) -> HashMap<u64, Vec<bool>> {
        let mut map = HashMap::new();
        self.collect_codewords(Vec::new(), &mut map);
        map
    }

    fn collect_codewords(&self, prefix: Vec<bool>, map: &mut HashMap<u64, Vec<bool>>) {
        match self {
            CodeTree::Leaf { symbol, .. } => {
                map.insert(*symbol, prefix);
            }
            CodeTree::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                left.collect_codewords(left_prefix, map);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                right.collect_codewords(right_prefix, map);
            }
        }
    }

    /// Appends the self-describing form of this tree, pre-order: `0`
    /// introduces an internal node followed by both subtrees; `1` introduces a
    /// leaf followed by the symbol's bit-length in unary (k zeros, then a
    /// terminating one) and the k symbol bits LSB-first. Symbol 0 has
    /// bit-length zero, so its leaf is just the two one-bits.
    pub fn serialize(&self, out: &mut Vec<bool>) {
        match self {
            CodeTree::Leaf { symbol, .. } => {
                out.push(true);
                let symbol_bits = int_to_bits(*symbol);
                out.resize(out.len() + symbol_bits.len(), false);
                out.push(true);
                out.extend_from_slice(&symbol_bits);
            }
            CodeTree::Internal { left, right, .. } => {
                out.push(false);
                left.serialize(out);
                right.serialize(out);
            }
        }
    }

    /// Parses one tree from the cursor, consuming exactly the bits
    /// [`serialize`](Self::serialize) produced for it. Parsed nodes carry no
    /// weight.
    pub fn parse(cursor: &mut BitCursor) -> Result<Self> {
        if cursor.next()? {
            Self::parse_leaf(cursor)
        } else {
            let left = Box::new(Self::parse(cursor)?);
            let right = Box::new(Self::parse(cursor)?);
            Ok(CodeTree::Internal {
                left,
                right,
                weight: None,
            })
        }
    }

    fn parse_leaf(cursor: &mut BitCursor) -> Result<Self> {
        let mut length = 0usize;
        while !cursor.next()? {
            length += 1;
        }
        if length > u64::BITS as usize {
            return Err(LivemaskError::InvalidInput(format!(
                "symbol length of {} bits exceeds the representable range",
                length
            )));
        }
        let symbol = bits_to_int(cursor.take(length)?);
        Ok(CodeTree::Leaf {
            symbol,
            weight: None,
        })
    }
}

/// Compresses a symbol sequence into a bitstream carrying its own code tree.
pub fn compress(symbols: &[u64]) -> Result<Vec<bool>> {
    let tree = CodeTree::build(symbols)?;
    let map = tree.codeword_map();

    let mut bits = Vec::new();
    tree.serialize(&mut bits);
    let tree_bits = bits.len();

    if let CodeTree::Leaf { .. } = tree {
        // Every codeword is empty, so the payload carries one marker bit per
        // occurrence instead; the decoder counts them back out.
        bits.resize(bits.len() + symbols.len(), false);
    } else {
        for symbol in symbols {
            bits.extend_from_slice(&map[symbol]);
        }
    }

    log::debug!(
        "compressed {} symbols into {} tree bits + {} payload bits",
        symbols.len(),
        tree_bits,
        bits.len() - tree_bits
    );
    Ok(bits)
}

/// Decompresses a bitstream produced by [`compress`], recovering the original
/// symbol sequence. Fails with `TruncatedInput` if the stream ends mid-tree or
/// mid-codeword.
pub fn decompress(bits: &[bool]) -> Result<Vec<u64>> {
    let mut cursor = BitCursor::new(bits);
    let tree = CodeTree::parse(&mut cursor)?;

    let mut symbols = Vec::new();
    if let CodeTree::Leaf { symbol, .. } = &tree {
        // Lone-leaf stream: one marker bit per occurrence.
        while !cursor.is_empty() {
            cursor.next()?;
            symbols.push(*symbol);
        }
        return Ok(symbols);
    }

    while !cursor.is_empty() {
        let mut node = &tree;
        loop {
            match node {
                CodeTree::Leaf { symbol, .. } => {
                    symbols.push(*symbol);
                    break;
                }
                CodeTree::Internal { left, right, .. } => {
                    node = if cursor.next()? {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    };
                }
            }
        }
    }
    Ok(symbols)
}
