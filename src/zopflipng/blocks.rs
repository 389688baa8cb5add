/*!
# Zopffli: Blocks.

This module contains the deflate entrypoint and all of the block-related odds
and ends that didn't make it into other modules.
*/

use dactyl::NoHash;
use std::collections::HashSet;
use super::{
	ArrayD,
	ArrayLL,
	DeflateSym,
	DISTANCE_BITS,
	DISTANCE_VALUES,
	encode_tree,
	FIXED_SYMBOLS_D,
	FIXED_SYMBOLS_LL,
	FIXED_TREE_D,
	FIXED_TREE_LL,
	get_dynamic_lengths,
	LENGTH_SYMBOLS_BITS_VALUES,
	LZ77Store,
	squeeze::{
		optimal,
		optimal_fixed,
		Verbosity,
	},
	zopfli_error,
	ZopfliError,
	ZopfliOut,
	ZopfliState,
};



/// # Length Symbol Extra Bits.
const LENGTH_EXTRA_BITS: [u32; 29] = [
	0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2,
	3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// # Minimum Split Distance.
const MINIMUM_SPLIT_DISTANCE: usize = 10;

/// # Max Split Points.
const MAX_SPLIT_POINTS: usize = 14;



/// # Split Point Scratch.
///
/// This holds three sets of block split points for use during the deflate
/// passes. Each set can hold up to 14 points (one less than
/// `BLOCKSPLITTING_MAX`).
///
/// A single instance of this struct is (re)used for all deflate passes on a
/// given image to reduce allocation overhead.
pub(crate) struct SplitPoints {
	slice1: [usize; MAX_SPLIT_POINTS],
	slice2: [usize; MAX_SPLIT_POINTS],
	done: HashSet<usize, NoHash>,
}

impl SplitPoints {
	/// # New Instance.
	pub(crate) fn new() -> Self {
		Self {
			slice1: [0; MAX_SPLIT_POINTS],
			slice2: [0; MAX_SPLIT_POINTS],
			done: HashSet::with_hasher(NoHash::default()),
		}
	}
}

impl SplitPoints {
	/// # Uncompressed Split Pass.
	///
	/// This sets the uncompressed split points, by way of first setting the
	/// LZ77 split points.
	///
	/// In terms of order-of-operations, this must be called _before_ the
	/// second-stage LZ77 pass as it would otherwise blow away that data.
	fn split_raw(&mut self, arr: &[u8], instart: usize, state: &mut ZopfliState, store: &mut LZ77Store)
	-> Result<usize, ZopfliError> {
		// Populate an LZ77 store from a greedy pass. This results in better
		// block choices than a full optimal pass.
		state.greedy(arr, instart, store, None)?;

		// Do an LZ77 pass.
		let len = self.split_lz77(store)?;

		// Find the corresponding uncompressed positions.
		if 0 < len && len <= MAX_SPLIT_POINTS {
			let mut pos = instart;
			let mut j = 0;
			for (i, e) in store.entries.iter().enumerate().take(self.slice2[len - 1] + 1) {
				if i == self.slice2[j] {
					self.slice1[j] = pos;
					j += 1;
					if j == len { return Ok(len); }
				}
				pos += e.length() as usize;
			}

			Err(zopfli_error!())
		}
		else { Ok(len) }
	}

	/// # LZ77 Split Pass.
	///
	/// This sets the LZ77 split points according to convoluted cost
	/// evaluations.
	fn split_lz77(&mut self, store: &LZ77Store) -> Result<usize, ZopfliError> {
		// This won't work on tiny files.
		if store.len() < MINIMUM_SPLIT_DISTANCE { return Ok(0); }

		// Get started!
		self.done.clear();
		let mut lstart = 0;
		let mut lend = store.len();
		let mut last = 0;
		let mut len = 0;
		loop {
			let (llpos, llcost) = find_minimum_cost(store, lstart + 1, lend)?;
			if llpos <= lstart || llpos >= lend {
				return Err(zopfli_error!());
			}

			// Ignore points we've already covered.
			if llpos == lstart + 1 || calculate_block_size_auto_type(store, lstart, lend)? < llcost {
				self.done.insert(lstart);
			}
			else {
				// Mark it as a split point and add it sorted.
				self.slice2[len] = llpos;
				len += 1;

				// Keep the list sorted.
				if last > llpos { self.slice2[..len].sort_unstable(); }
				else { last = llpos; }

				// Stop if we've split the maximum number of times.
				if len == MAX_SPLIT_POINTS { break; }
			}

			// Look for a split and adjust the start/end accordingly. If we don't
			// find one or the remaining distance is too small to continue, we're
			// done!
			if ! find_largest_splittable_block(
				store.len(),
				&self.done,
				&self.slice2[..len],
				&mut lstart,
				&mut lend,
			) { break; }
		}

		Ok(len)
	}

	/// # Split Best.
	///
	/// Compare the optimal raw split points with a dedicated lz77 pass and
	/// return whichever is predicted to compress better.
	fn split(
		&mut self,
		numiterations: i32,
		verbosity: Verbosity,
		arr: &[u8],
		instart: usize,
		store: &mut LZ77Store,
		store2: &mut LZ77Store,
		state: &mut ZopfliState,
	) -> Result<&[usize], ZopfliError> {
		// Start by splitting uncompressed.
		let limit = self.split_raw(arr, instart, state, store2)?.min(MAX_SPLIT_POINTS);
		store2.clear();

		// Now some LZ77 funny business.
		let mut cost1 = 0;
		let mut store3 = LZ77Store::new();
		for i in 0..=limit {
			let start = if i == 0 { instart } else { self.slice1[i - 1] };
			let end = if i < limit { self.slice1[i] } else { arr.len() };

			// This assertion is redundant as we explicitly check range sanity
			// earlier and later in the pipeline.
			debug_assert!(start <= end && end <= arr.len());

			// Make another store.
			optimal(
				state,
				arr.get(..end).ok_or(zopfli_error!())?,
				start,
				numiterations,
				verbosity,
				store2,
				&mut store3,
			)?;
			cost1 += calculate_block_size_auto_type(store2, 0, store2.len())?;

			// Append its data to our main store.
			store.steal_entries(store2);

			// Save the chunk size to our best.
			if i < limit { self.slice2[i] = store.len(); }
		}
		drop(store3);

		// Try a second pass, recalculating the LZ77 splits with the updated
		// store details.
		if 1 < limit {
			// Move slice2 over to slice1 so we can repopulate slice2.
			self.slice1.copy_from_slice(self.slice2.as_slice());

			let limit2 = self.split_lz77(store)?.min(MAX_SPLIT_POINTS);
			let mut cost2 = 0;
			for i in 0..=limit2 {
				let start = if i == 0 { 0 } else { self.slice2[i - 1] };
				let end = if i < limit2 { self.slice2[i] } else { store.len() };
				cost2 += calculate_block_size_auto_type(store, start, end)?;
			}

			// It's better!
			if cost2 < cost1 { Ok(&self.slice2[..limit2]) }
			else { Ok(&self.slice1[..limit]) }
		}
		else { Ok(&self.slice2[..limit]) }
	}
}



/// # Deflate a Part.
///
/// Input is deflated in chunks of at most a million bytes. This does all the
/// work there is to do for one such chunk.
///
/// More specifically, this explores different possible split points for the
/// chunk, then writes the resulting blocks to the output.
pub(crate) fn deflate_part(
	state: &mut ZopfliState,
	splits: &mut SplitPoints,
	numiterations: i32,
	verbosity: Verbosity,
	last_block: bool,
	arr: &[u8],
	instart: usize,
	out: &mut ZopfliOut,
) -> Result<(), ZopfliError> {
	let mut store = LZ77Store::new();
	let mut store2 = LZ77Store::new();

	// Find the split points.
	let best = splits.split(
		numiterations,
		verbosity,
		arr,
		instart,
		&mut store,
		&mut store2,
		state,
	)?;

	// Write the data!
	for i in 0..=best.len() {
		let start = if i == 0 { 0 } else { best[i - 1] };
		let end = if i < best.len() { best[i] } else { store.len() };
		add_lz77_block_auto_type(
			i == best.len() && last_block,
			&store,
			&mut store2,
			state,
			arr,
			start,
			end,
			out,
		)?;
	}

	Ok(())
}



#[repr(u8)]
#[derive(Clone, Copy, Eq, PartialEq)]
/// # Block Type.
///
/// This enum is mainly used to specify the type of block size to calculate.
enum BlockType {
	Uncompressed = 0_u8,
	Fixed = 1_u8,
	Dynamic = 2_u8,
}



/// # Add LZ77 Block.
///
/// Add a deflate block with the given LZ77 data to the output.
fn add_lz77_block(
	btype: BlockType,
	last_block: bool,
	store: &LZ77Store,
	arr: &[u8],
	lstart: usize,
	lend: usize,
	out: &mut ZopfliOut,
) -> Result<(), ZopfliError> {
	// Uncompressed blocks are easy!
	if matches!(btype, BlockType::Uncompressed) {
		let (instart, inend) = store.byte_range(lstart, lend)?;
		out.add_uncompressed_block(last_block, arr, instart, inend);
		return Ok(());
	}

	// Add some bits.
	out.add_bit(u8::from(last_block));
	out.add_bit((btype as u8) & 1);
	out.add_bit(((btype as u8) & 2) >> 1);

	// Write the rest according to the block type!
	if matches!(btype, BlockType::Fixed) {
		add_lz77_block_fixed(store, lstart, lend, out)
	}
	else {
		add_lz77_block_dynamic(store, lstart, lend, out)
	}
}

#[inline(never)]
/// # Add LZ77 Block (Dynamic).
///
/// This finishes the work started by `add_lz77_block`.
fn add_lz77_block_dynamic(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
	out: &mut ZopfliOut,
) -> Result<(), ZopfliError> {
	// Build the lengths first.
	let (extra, _, ll_lengths, d_lengths) = get_dynamic_lengths(
		store,
		lstart,
		lend,
	)?;
	encode_tree(&ll_lengths, &d_lengths, extra, out)?;

	// Now we need the symbols.
	let ll_symbols = ArrayLL::<u32>::llcl_symbols(&ll_lengths)?;
	let d_symbols = ArrayD::<u32>::llcl_symbols(&d_lengths)?;

	// Write all the data!
	add_lz77_data(
		store, lstart, lend, &ll_symbols, &ll_lengths, &d_symbols, &d_lengths, out
	)?;

	// Finish up by writting the end symbol.
	out.add_huffman_bits(ll_symbols[256], ll_lengths[256] as u32);
	Ok(())
}

/// # Add LZ77 Block (Fixed).
///
/// This finishes the work started by `add_lz77_block`.
fn add_lz77_block_fixed(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
	out: &mut ZopfliOut,
) -> Result<(), ZopfliError> {
	// Write all the data!
	add_lz77_data(
		store, lstart, lend,
		&FIXED_SYMBOLS_LL, &FIXED_TREE_LL, &FIXED_SYMBOLS_D, &FIXED_TREE_D,
		out
	)?;

	// Finish up by writting the end symbol.
	out.add_huffman_bits(FIXED_SYMBOLS_LL[256], FIXED_TREE_LL[256] as u32);
	Ok(())
}

#[allow(
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::too_many_arguments,
)]
/// # Add LZ77 Block (Automatic Type).
///
/// This calculates the expected output sizes for all three block types, then
/// writes the best one to the output file.
fn add_lz77_block_auto_type(
	last_block: bool,
	store: &LZ77Store,
	fixed_store: &mut LZ77Store,
	state: &mut ZopfliState,
	arr: &[u8],
	lstart: usize,
	lend: usize,
	out: &mut ZopfliOut
) -> Result<(), ZopfliError> {
	// If the block is empty, we can assume a fixed-tree layout.
	if lstart >= lend {
		out.add_bits(u32::from(last_block), 1);
		out.add_bits(1, 2);
		out.add_bits(0, 7);
		return Ok(());
	}

	// Calculate the three costs.
	let uncompressed_cost = calculate_block_size_uncompressed(store, lstart, lend)?;
	let fixed_cost = calculate_block_size_fixed(store, lstart, lend);
	let dynamic_cost = calculate_block_size_dynamic(store, lstart, lend)?;

	// Fixed stores are only useful up to a point; we can skip the overhead
	// if the store is big or the dynamic cost estimate is unimpressive.
	if
		(store.len() < 1000 || fixed_cost * 10 <= dynamic_cost * 11) &&
		try_lz77_expensive_fixed(
			store, fixed_store, state, uncompressed_cost, dynamic_cost,
			arr, lstart, lend, last_block,
			out,
		)?
	{
		return Ok(());
	}

	// Which type?
	let btype =
		if uncompressed_cost < fixed_cost && uncompressed_cost < dynamic_cost { BlockType::Uncompressed }
		else if fixed_cost < dynamic_cost { BlockType::Fixed }
		else { BlockType::Dynamic };

	// Save it!
	add_lz77_block(btype, last_block, store, arr, lstart, lend, out)
}

#[allow(
	clippy::cast_sign_loss,
	clippy::too_many_arguments,
)]
/// # Add LZ77 Data.
///
/// This adds all lit/len/dist codes from the lists as huffman symbols, but not
/// the end code (256).
fn add_lz77_data(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
	ll_symbols: &ArrayLL<u32>,
	ll_lengths: &ArrayLL<DeflateSym>,
	d_symbols: &ArrayD<u32>,
	d_lengths: &ArrayD<DeflateSym>,
	out: &mut ZopfliOut
) -> Result<(), ZopfliError> {
	for e in store.entries.get(lstart..lend).ok_or(zopfli_error!())? {
		// Length only.
		if e.dist <= 0 {
			if (e.litlen as u16) >= 256 {
				return Err(zopfli_error!());
			}
			if ll_lengths[e.litlen as usize].is_zero() { return Err(zopfli_error!()); }

			out.add_huffman_bits(
				ll_symbols[e.litlen as usize],
				ll_lengths[e.litlen as usize] as u32,
			);
		}
		// Length and distance.
		else {
			let (symbol, bits, value) = LENGTH_SYMBOLS_BITS_VALUES[e.litlen as usize];
			if ll_lengths[symbol as usize].is_zero() { return Err(zopfli_error!()); }

			out.add_huffman_bits(
				ll_symbols[symbol as usize],
				ll_lengths[symbol as usize] as u32,
			);
			out.add_bits(u32::from(value), bits);

			// Now the distance bits.
			if d_lengths[e.d_symbol as usize].is_zero() { return Err(zopfli_error!()); }
			out.add_huffman_bits(
				d_symbols[e.d_symbol as usize],
				d_lengths[e.d_symbol as usize] as u32,
			);
			out.add_bits(
				u32::from(DISTANCE_VALUES[e.dist as usize]),
				u32::from(DISTANCE_BITS[e.d_symbol as usize]),
			);
		}
	}

	Ok(())
}

#[allow(clippy::cast_possible_truncation)] // The maximum blocksize is only 1 million.
/// # Calculate Block Size (Uncompressed).
fn calculate_block_size_uncompressed(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
) -> Result<u32, ZopfliError> {
	let (instart, inend) = store.byte_range(lstart, lend)?;
	let blocksize = (inend - instart) as u32;

	// Blocks larger than u16::MAX need to be split.
	let blocks = blocksize.div_ceil(65_535);
	Ok(blocks * 40 + blocksize * 8)
}

/// # Calculate Block Size (Fixed).
fn calculate_block_size_fixed(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
) -> u32 {
	// The end symbol is always included.
	let mut size = FIXED_TREE_LL[256] as u32;

	// Loop the store if we have data to loop.
	let slice = store.entries.as_slice();
	if lstart < lend && lend <= slice.len() {
		// Make sure the end does not exceed the store!
		for e in &slice[lstart..lend] {
			if e.dist <= 0 {
				size += FIXED_TREE_LL[e.litlen as usize] as u32;
			}
			else {
				size += LENGTH_SYMBOLS_BITS_VALUES[e.litlen as usize].1;
				size += FIXED_TREE_LL[e.ll_symbol as usize] as u32;
				size += u32::from(DISTANCE_BITS[e.d_symbol as usize]);
				size += FIXED_TREE_D[e.d_symbol as usize] as u32;
			}
		}
	}

	size
}

#[inline(never)]
/// # Calculate Block Size (Dynamic).
pub(super) fn calculate_block_size_dynamic(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
) -> Result<u32, ZopfliError> {
	get_dynamic_lengths(store, lstart, lend).map(|(_, size, _, _)| size.get())
}

/// # Calculate Best Block Size (in Bits).
fn calculate_block_size_auto_type(
	store: &LZ77Store,
	lstart: usize,
	lend: usize,
) -> Result<u32, ZopfliError> {
	let uncompressed_cost = calculate_block_size_uncompressed(store, lstart, lend)?;

	// We can skip the expensive fixed-cost calculations for large blocks since
	// they're unlikely ever to use it.
	let fixed_cost =
		if 1000 < store.len() { uncompressed_cost }
		else { calculate_block_size_fixed(store, lstart, lend) };

	let dynamic_cost = calculate_block_size_dynamic(store, lstart, lend)?;

	// If uncompressed is better than everything, return it.
	if uncompressed_cost < fixed_cost && uncompressed_cost < dynamic_cost {
		Ok(uncompressed_cost)
	}
	// Otherwise choose the smaller of fixed and dynamic.
	else if fixed_cost < dynamic_cost { Ok(fixed_cost) }
	else { Ok(dynamic_cost) }
}

#[allow(clippy::similar_names)]
/// # Find Largest Splittable Block.
///
/// This finds the largest available block for splitting, evenly spreading the
/// load if a limited number of blocks are requested.
///
/// Returns `false` if no blocks are found.
fn find_largest_splittable_block(
	lz77size: usize,
	done: &HashSet<usize, NoHash>,
	splitpoints: &[usize],
	lstart: &mut usize,
	lend: &mut usize,
) -> bool {
	let mut best = 0;
	for i in 0..=splitpoints.len() {
		let start =
			if i == 0 { 0 }
			else { splitpoints[i - 1] };
		let end =
			if i < splitpoints.len() { splitpoints[i] }
			else { lz77size - 1 };

		// We found a match!
		if best < end - start && ! done.contains(&start) {
			*lstart = start;
			*lend = end;
			best = end - start;
		}
	}
	MINIMUM_SPLIT_DISTANCE <= best
}

/// # Minimum Split Cost.
///
/// Return the index of the smallest split cost between `start..end`.
fn find_minimum_cost(
	store: &LZ77Store,
	mut start: usize,
	mut end: usize,
) -> Result<(usize, u32), ZopfliError> {
	// Keep track of the original start/end points.
	let split_start = start - 1;
	let split_end = end;

	let mut best_cost = u32::MAX;
	let mut best_idx = start;

	// Small chunks don't need much.
	if end - start < 1024 {
		for i in start..end {
			let cost = split_cost(store, split_start, i, split_end)?;
			if cost < best_cost {
				best_cost = cost;
				best_idx = i;
			}
		}
		return Ok((best_idx, best_cost));
	}

	// Divide and conquer.
	let mut p = [0_usize; MINIMUM_SPLIT_DISTANCE - 1];
	let mut last_best_cost = u32::MAX;
	while MINIMUM_SPLIT_DISTANCE <= end - start {
		let mut best_p_idx = 0;
		for (i, pp) in p.iter_mut().enumerate() {
			*pp = start + (i + 1) * ((end - start).wrapping_div(MINIMUM_SPLIT_DISTANCE));
			let line_cost =
				if best_idx == *pp { last_best_cost }
				else { split_cost(store, split_start, *pp, split_end)? };

			if i == 0 || line_cost < best_cost {
				best_cost = line_cost;
				best_p_idx = i;
			}
		}

		// No improvement; we're done.
		if last_best_cost < best_cost { break; }

		// Nudge the boundaries and back again.
		best_idx = p[best_p_idx];
		if 0 < best_p_idx { start = p[best_p_idx - 1]; }
		if best_p_idx + 1 < p.len() { end = p[best_p_idx + 1]; }

		last_best_cost = best_cost;
	}

	Ok((best_idx, last_best_cost))
}

/// # Split Block Cost.
///
/// Return the sum of the estimated costs of the left and right sections of the
/// data.
fn split_cost(store: &LZ77Store, start: usize, mid: usize, end: usize) -> Result<u32, ZopfliError> {
	let a = calculate_block_size_auto_type(store, start, mid)?;
	let b = calculate_block_size_auto_type(store, mid, end)?;
	Ok(a + b)
}

#[allow(clippy::too_many_arguments)]
/// # (Maybe) Add LZ77 Expensive Fixed Block.
///
/// This runs the full suite of fixed-tree tests on the data and writes it to
/// the output if it is indeed better than the uncompressed/dynamic variants.
///
/// Returns `true` if data was written.
fn try_lz77_expensive_fixed(
	store: &LZ77Store,
	fixed_store: &mut LZ77Store,
	state: &mut ZopfliState,
	uncompressed_cost: u32,
	dynamic_cost: u32,
	arr: &[u8],
	lstart: usize,
	lend: usize,
	last_block: bool,
	out: &mut ZopfliOut,
) -> Result<bool, ZopfliError> {
	let (instart, inend) = store.byte_range(lstart, lend)?;

	// Run all the expensive fixed-cost checks.
	fixed_store.clear();
	optimal_fixed(
		state,
		arr.get(..inend).ok_or(zopfli_error!())?,
		instart,
		fixed_store,
	)?;

	// Find the resulting cost.
	let fixed_cost = calculate_block_size_fixed(
		fixed_store,
		0,
		fixed_store.len(),
	);

	// If it is better than dynamic, and uncompressed isn't better than both
	// fixed and dynamic, it's the best and worth writing!
	if fixed_cost < dynamic_cost && (fixed_cost <= uncompressed_cost || dynamic_cost <= uncompressed_cost) {
		add_lz77_block(BlockType::Fixed, last_block, fixed_store, arr, 0, fixed_store.len(), out)
			.map(|()| true)
	}
	else { Ok(false) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_fixed_symbols() {
		assert_eq!(
			ArrayLL::<u32>::llcl_symbols(&FIXED_TREE_LL),
			Ok(FIXED_SYMBOLS_LL),
		);
		assert_eq!(
			ArrayD::<u32>::llcl_symbols(&FIXED_TREE_D),
			Ok(FIXED_SYMBOLS_D),
		);
	}

}
