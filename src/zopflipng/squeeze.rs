/*!
# Zopffli: Squeeze.

This module holds the two public-within-crate entry points to the iterative
optimal LZ77 parse: [`optimal`], which alternates forward/backward squeeze
passes with statistics refinement until it converges (or runs out of
iterations), and [`optimal_fixed`], a single pass scored against the fixed
Huffman tree instead of a statistics table.

The actual forward pass (the dynamic-programming shortest path over the
block) and backward trace live in `hash.rs`/`cache.rs`; this module is the
iteration driver sitting on top of them — warm start, reparse, stagnation
detection, and the best-so-far bookkeeping.
*/

use super::{
	blocks::calculate_block_size_dynamic,
	LZ77Store,
	stats::{
		RanState,
		SymbolStats,
	},
	ZopfliError,
	ZopfliRange,
	ZopfliState,
};



#[derive(Debug, Clone, Copy, Default)]
/// # Iteration Diagnostics.
///
/// Controls the `Iteration N: B bit` progress lines `optimal` writes to
/// stderr. Neither flag changes the parse; they only affect whether (and how
/// often) it talks about itself while running.
pub(crate) struct Verbosity {
	/// # Log Improving Iterations.
	verbose: bool,

	/// # Log Every Iteration.
	verbose_more: bool,
}

impl Verbosity {
	/// # New Instance.
	pub(crate) const fn new(verbose: bool, verbose_more: bool) -> Self {
		Self { verbose, verbose_more }
	}
}



/// # Optimal LZ77 Parse.
///
/// This is the iterative optimal parser described by the crate's squeeze
/// pass: it warm-starts from a greedy parse, then alternates forward/
/// backward squeeze passes scored by a statistics-derived cost model,
/// re-deriving those statistics from each pass's own output.
///
/// The best parse seen — judged by the true dynamic-block bit cost, not the
/// cost model's own estimate — is written to `store`; `scratch_store` is
/// iteration-local working space the caller provides so repeated calls don't
/// need to allocate a new one each time.
///
/// `arr` is expected to be pre-sliced to the block's end (`arr.len()` is
/// `inend`); `instart` marks the block's start within it.
pub(crate) fn optimal(
	state: &mut ZopfliState,
	arr: &[u8],
	instart: usize,
	numiterations: i32,
	verbosity: Verbosity,
	store: &mut LZ77Store,
	scratch_store: &mut LZ77Store,
) -> Result<(), ZopfliError> {
	// An empty block has nothing to parse; this is a no-op, not an error.
	if instart >= arr.len() { return Ok(()); }

	// Anything non-empty should fit within a single master block; if it
	// doesn't, that's a genuine caller bug, not an empty-block no-op.
	let range = ZopfliRange::new(instart, arr.len())?;

	// Reset the main cache for the current blocksize.
	state.init_lmc(range.len().get());

	// Warm start: a greedy parse gives us a reasonable first cost model.
	scratch_store.clear();
	state.greedy(arr, instart, scratch_store, Some(instart))?;

	let mut current_stats = SymbolStats::new();
	current_stats.load_store(scratch_store);
	current_stats.crunch();

	// Dummy best/last bookkeeping.
	let mut ran = RanState::new();
	let mut best_stats = SymbolStats::new();
	let mut last_cost = 0;
	let mut best_cost = u32::MAX;

	// `last_ran` tracks the iteration index a perturbation last occurred at;
	// `-1` means it hasn't happened yet.
	let mut last_ran = -1;
	for i in 0..numiterations.max(0) {
		scratch_store.clear();

		// The forward/backward squeeze pass, scored by the current stats.
		state.optimal_run(arr, instart, Some(&current_stats), scratch_store)?;

		// The objective we actually minimise: the true dynamic-Huffman bit
		// cost of the parse, not the cost model's own estimate of it.
		let current_cost = calculate_block_size_dynamic(
			scratch_store,
			0,
			scratch_store.len(),
		)?;

		if verbosity.verbose_more || (verbosity.verbose && current_cost < best_cost) {
			eprintln!("Iteration {i}: {current_cost} bit");
		}

		// A new best!
		if current_cost < best_cost {
			store.replace(scratch_store);
			best_stats = current_stats;
			best_cost = current_cost;
		}

		// Copy the stats to last_stats, clear, and repopulate with the
		// current store's own symbol frequencies.
		let last_stats = current_stats;
		current_stats.clear();
		current_stats.load_store(scratch_store);
		current_stats.crunch();

		// Once perturbation has kicked in at least once, damp oscillation by
		// blending this iteration's stats with the previous iteration's.
		if last_ran != -1 {
			current_stats = SymbolStats::add_weighted(&current_stats, 1.0, &last_stats, 0.5);
			current_stats.crunch();
		}

		// Stagnation: two consecutive iterations landed on the same true
		// cost. Restore the best-known stats and jog them with the PRNG.
		if 5 < i && current_cost == last_cost {
			current_stats = best_stats;
			current_stats.randomize(&mut ran);
			current_stats.crunch();
			last_ran = i;
		}

		last_cost = current_cost;
	}

	Ok(())
}

/// # Optimal LZ77 Parse (Fixed Tree).
///
/// A single forward/backward squeeze pass scored against the fixed Huffman
/// tree rather than a statistics table. There is no iteration, no warm
/// start, and no PRNG — `hash.rs`'s forward pass already treats a missing
/// stats table as "use the fixed-tree cost model".
///
/// As with [`optimal`], `arr` is pre-sliced to the block's end.
pub(crate) fn optimal_fixed(
	state: &mut ZopfliState,
	arr: &[u8],
	instart: usize,
	store: &mut LZ77Store,
) -> Result<(), ZopfliError> {
	if instart >= arr.len() { return Ok(()); }
	let range = ZopfliRange::new(instart, arr.len())?;
	state.init_lmc(range.len().get());
	state.optimal_run(arr, instart, None, store)
}



#[cfg(test)]
mod test {
	use super::*;

	#[allow(clippy::cast_possible_truncation)]
	/// # Decode an LZ77 Store Back to Bytes.
	///
	/// This is the crate-internal equivalent of the round-trip law: walk
	/// the emitted symbols and rebuild the original byte range.
	fn decode(arr: &[u8], instart: usize, store: &LZ77Store) -> Vec<u8> {
		let mut out = Vec::new();
		let mut pos = instart;
		for e in &store.entries {
			if e.dist <= 0 {
				out.push(e.litlen as u8 as u8);
				pos += 1;
			}
			else {
				let length = e.litlen as u16 as usize;
				let dist = e.dist as u16 as usize;
				let start = out.len() - dist;
				for i in 0..length { let b = out[start + i]; out.push(b); }
				pos += length;
			}
		}
		let _ = arr;
		out
	}

	#[test]
	fn t_empty_block_is_noop() {
		let mut state = ZopfliState::new();
		let mut store = LZ77Store::new();
		let mut scratch = LZ77Store::new();
		optimal(&mut state, b"", 0, 5, Verbosity::default(), &mut store, &mut scratch)
			.expect("optimal failed on empty block");
		assert_eq!(store.len(), 0);

		optimal_fixed(&mut state, b"", 0, &mut store).expect("optimal_fixed failed on empty block");
		assert_eq!(store.len(), 0);
	}

	#[test]
	fn t_single_literal() {
		let mut state = ZopfliState::new();
		let mut store = LZ77Store::new();
		let mut scratch = LZ77Store::new();
		let arr = b"A";
		optimal(&mut state, arr, 0, 3, Verbosity::default(), &mut store, &mut scratch)
			.expect("optimal failed");
		assert_eq!(store.len(), 1);
		assert_eq!(decode(arr, 0, &store), arr);
	}

	#[test]
	fn t_coverage_and_reconstruction() {
		let mut state = ZopfliState::new();
		let mut store = LZ77Store::new();
		let mut scratch = LZ77Store::new();
		let arr = b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again";
		optimal(&mut state, arr, 0, 8, Verbosity::default(), &mut store, &mut scratch)
			.expect("optimal failed");
		assert_eq!(decode(arr, 0, &store), arr.to_vec());
	}

	#[test]
	fn t_fixed_reconstruction() {
		let mut state = ZopfliState::new();
		let mut store = LZ77Store::new();
		let arr = vec![0_u8; 1000];
		optimal_fixed(&mut state, &arr, 0, &mut store).expect("optimal_fixed failed");
		assert_eq!(decode(&arr, 0, &store), arr);
	}

	#[test]
	fn t_determinism() {
		let arr = b"abababababababababababababababababababab ABCDEFG abababab";
		let mut state1 = ZopfliState::new();
		let mut store1 = LZ77Store::new();
		let mut scratch1 = LZ77Store::new();
		optimal(&mut state1, arr, 0, 12, Verbosity::default(), &mut store1, &mut scratch1)
			.expect("optimal failed (1)");

		let mut state2 = ZopfliState::new();
		let mut store2 = LZ77Store::new();
		let mut scratch2 = LZ77Store::new();
		optimal(&mut state2, arr, 0, 12, Verbosity::default(), &mut store2, &mut scratch2)
			.expect("optimal failed (2)");

		assert_eq!(store1.len(), store2.len());
		for (a, b) in store1.entries.iter().zip(store2.entries.iter()) {
			assert_eq!(a.litlen as u16, b.litlen as u16);
			assert_eq!(a.dist, b.dist);
			assert_eq!(a.pos, b.pos);
		}
	}
}
