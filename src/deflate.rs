/*!
# Zopffli: Deflate.

This module is the public entry point sitting on top of `zopflipng`'s
squeeze pass: it owns the output bit buffer ([`ZopfliOut`]), chunks the
caller's bytes into master blocks, and drives [`zopflipng::deflate_part`]
across each one to produce a complete DEFLATE stream.
*/

use super::{
	Options,
	zopflipng::{
		deflate_part,
		reset_dynamic_length_cache,
		SplitPoints,
		ZopfliState,
		ZOPFLI_MASTER_BLOCK_SIZE,
	},
};



#[must_use]
/// # Deflate.
///
/// Compress `arr` to a complete DEFLATE stream using the iterative optimal
/// LZ77 parser, per `options`.
///
/// # Panics
///
/// This will panic if an internal invariant is violated; that would
/// indicate a bug in this crate rather than anything wrong with the input.
pub fn deflate(arr: &[u8], options: Options) -> Vec<u8> {
	let mut out = ZopfliOut::new();
	let mut state = ZopfliState::new();
	let mut splits = SplitPoints::new();
	let numiterations = options.numiterations();
	let verbosity = options.verbosity();

	// The RLE cache lives for the duration of a single `deflate` call; reset
	// it now so a previous call's blocks can't leak into this one's.
	reset_dynamic_length_cache();

	for chunk in DeflateIter::new(arr) {
		deflate_part(
			&mut state,
			&mut splits,
			numiterations,
			verbosity,
			chunk.end == arr.len(),
			arr.get(..chunk.end).unwrap_or(arr),
			chunk.start,
			&mut out,
		).expect("deflate: internal invariant violated");
	}

	out.into_vec()
}



/// # Deflate Chunk.
///
/// A half-open `start..end` range within the caller's buffer, no larger
/// than `ZOPFLI_MASTER_BLOCK_SIZE`.
struct DeflateChunk {
	/// # Start.
	start: usize,

	/// # End.
	end: usize,
}

/// # Deflate Chunk Iterator.
///
/// This yields [`DeflateChunk`]s covering `arr` from the beginning,
/// advancing by `ZOPFLI_MASTER_BLOCK_SIZE` each time.
struct DeflateIter<'a> {
	/// # Source.
	arr: &'a [u8],

	/// # Current Position.
	pos: usize,
}

impl<'a> DeflateIter<'a> {
	/// # New.
	const fn new(arr: &'a [u8]) -> Self { Self { arr, pos: 0 } }
}

impl<'a> Iterator for DeflateIter<'a> {
	type Item = DeflateChunk;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos < self.arr.len() || (self.pos == 0 && self.arr.is_empty()) {
			let start = self.pos;
			let end = self.arr.len().min(start + ZOPFLI_MASTER_BLOCK_SIZE);
			self.pos = end.max(start + 1);
			Some(DeflateChunk { start, end })
		}
		else { None }
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}
}

impl<'a> ExactSizeIterator for DeflateIter<'a> {
	fn len(&self) -> usize {
		if self.arr.is_empty() { usize::from(self.pos == 0) }
		else { (self.arr.len() - self.pos).div_ceil(ZOPFLI_MASTER_BLOCK_SIZE) }
	}
}



/// # Output Bit Buffer.
///
/// This wraps an owned, growable byte buffer with the bit-level writes the
/// DEFLATE block writers need: single bits, small fixed-width runs, and
/// whole unaligned Huffman codes, plus the byte-aligned writes an
/// uncompressed block requires.
///
/// Unlike the FFI-backed version this is modeled on, there are no raw
/// pointers here; `Vec::push`/`extend_from_slice` already amortize their
/// growth, so there's no need to hand-roll a doubling allocator.
pub(crate) struct ZopfliOut {
	/// # Buffer.
	buf: Vec<u8>,

	/// # Bit Position (0-7) Within the Last Byte.
	bp: u8,
}

impl ZopfliOut {
	/// # New Instance.
	pub(crate) const fn new() -> Self {
		Self { buf: Vec::new(), bp: 0 }
	}

	/// # Into Vec.
	pub(crate) fn into_vec(self) -> Vec<u8> { self.buf }
}

impl ZopfliOut {
	#[inline]
	/// # Add Bit.
	pub(crate) fn add_bit(&mut self, bit: u8) {
		if self.bp == 0 { self.buf.push(0); }
		if let Some(last) = self.buf.last_mut() { *last |= bit << self.bp; }
		self.bp = self.bp.wrapping_add(1) & 7;
	}

	/// # Add Multiple Bits.
	pub(crate) fn add_bits(&mut self, symbol: u32, length: u32) {
		for i in 0..length {
			let bit = (symbol >> i) & 1;
			self.add_bit(bit as u8);
		}
	}

	#[inline]
	/// # Add Multiple Bits (Const Length).
	///
	/// Same as `ZopfliOut::add_bits`, but with lengths known at compile time.
	pub(crate) fn add_fixed_bits<const N: u8>(&mut self, symbol: u32) {
		const { assert!(1 < N); }
		for i in const { 0..N } {
			let bit = (symbol >> i) & 1;
			self.add_bit(bit as u8);
		}
	}

	/// # Add Huffman Bits.
	///
	/// Same as `ZopfliOut::add_bits`, but written most-significant-bit
	/// first, the order Huffman codes are conventionally packed in.
	pub(crate) fn add_huffman_bits(&mut self, symbol: u32, length: u32) {
		for i in (0..length).rev() {
			let bit = (symbol >> i) & 1;
			self.add_bit(bit as u8);
		}
	}

	#[allow(clippy::cast_possible_truncation)]
	/// # Add Non-Compressed Block.
	///
	/// Uncompressed blocks are byte-aligned and capped at `u16::MAX` bytes
	/// apiece, so a long uncompressed run gets split across as many
	/// sub-blocks as it takes.
	pub(crate) fn add_uncompressed_block(
		&mut self,
		last_block: bool,
		arr: &[u8],
		instart: usize,
		inend: usize,
	) {
		let block = arr.get(instart..inend).unwrap_or_default();
		let iter = block.chunks(usize::from(u16::MAX));
		let len = iter.len().saturating_sub(1);
		for (i, piece) in iter.enumerate() {
			let blocksize = piece.len();
			let nlen = ! blocksize;
			let really_last_block = i == len;

			self.add_bit(u8::from(last_block && really_last_block));
			self.add_bit(0);
			self.add_bit(0);

			// Ignore bits of input up to the next byte boundary.
			self.bp = 0;

			self.buf.push((blocksize % 256) as u8);
			self.buf.push((blocksize.wrapping_div(256) % 256) as u8);
			self.buf.push((nlen % 256) as u8);
			self.buf.push((nlen.wrapping_div(256) % 256) as u8);
			self.buf.extend_from_slice(piece);
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_deflate_iter_empty() {
		let iter = DeflateIter::new(b"");
		let chunks: Vec<_> = iter.map(|c| (c.start, c.end)).collect();
		assert_eq!(chunks, vec![(0, 0)]);
	}

	#[test]
	fn t_deflate_iter_single_chunk() {
		let arr = vec![0_u8; 100];
		let chunks: Vec<_> = DeflateIter::new(&arr).map(|c| (c.start, c.end)).collect();
		assert_eq!(chunks, vec![(0, 100)]);
	}

	#[test]
	fn t_deflate_iter_multi_chunk() {
		let arr = vec![0_u8; ZOPFLI_MASTER_BLOCK_SIZE * 2 + 10];
		let chunks: Vec<_> = DeflateIter::new(&arr).map(|c| (c.start, c.end)).collect();
		assert_eq!(
			chunks,
			vec![
				(0, ZOPFLI_MASTER_BLOCK_SIZE),
				(ZOPFLI_MASTER_BLOCK_SIZE, ZOPFLI_MASTER_BLOCK_SIZE * 2),
				(ZOPFLI_MASTER_BLOCK_SIZE * 2, ZOPFLI_MASTER_BLOCK_SIZE * 2 + 10),
			],
		);
	}

	#[test]
	fn t_add_bits_roundtrip() {
		let mut out = ZopfliOut::new();
		out.add_bits(0b101, 3);
		out.add_bits(0b11, 2);
		// 0b101 (lsb-first: 1,0,1) then 0b11 (1,1) packed into one byte:
		// bit0=1 bit1=0 bit2=1 bit3=1 bit4=1 -> 0b0001_1101.
		assert_eq!(out.buf, vec![0b0001_1101]);
	}

	#[test]
	fn t_add_uncompressed_block() {
		let mut out = ZopfliOut::new();
		let data = b"hello world";
		out.add_uncompressed_block(true, data, 0, data.len());
		// Header byte, then 4 length bytes, then the data itself.
		assert_eq!(out.buf.len(), 1 + 4 + data.len());
		assert_eq!(&out.buf[5..], data);
	}
}
