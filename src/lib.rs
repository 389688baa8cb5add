/*!
# Zopffli

An iterative optimal LZ77 parser and DEFLATE encoder, modeled on the
squeeze pass of Google's Zopfli.

The squeeze pass finds a near-optimal sequence of literal/length/distance
symbols for a window of bytes by repeatedly re-parsing the block under a
cost model refined from the previous pass's own statistics. This crate
wraps that pass with the rest of what a DEFLATE encoder needs around it —
block splitting, Huffman tree construction, and bitstream output — behind
a single [`deflate`] entry point.
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

mod deflate;
mod zopflipng;

pub use deflate::deflate;
use zopflipng::Verbosity;

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Parse Options.
///
/// Tunables for a [`deflate`] call. None of these change what a given input
/// *could* parse to optimally — they trade search effort for speed, or turn
/// on diagnostic output — so two calls with identical options against
/// identical bytes always produce identical output.
pub struct Options {
	/// # Iteration Count.
	///
	/// How many refine-and-reparse rounds the statistics-driven cost model
	/// runs before the best parse found is returned. Larger values search
	/// harder at the cost of linear slowdown; Zopfli's own defaults range
	/// from the teens (fast presets) to the low hundreds (max compression).
	iterations: u32,

	/// # Verbose Logging.
	///
	/// When set, each iteration that improves on the best block size found
	/// so far is printed to stderr as it happens.
	verbose: bool,

	/// # Extra-Verbose Logging.
	///
	/// When set, every iteration is printed to stderr, not just the ones
	/// that improve on the running best.
	verbose_more: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			iterations: 15,
			verbose: false,
			verbose_more: false,
		}
	}
}

impl Options {
	#[must_use]
	/// # New Instance.
	///
	/// Starts from the default of 15 iterations with logging disabled.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Iterations.
	///
	/// # Panics
	///
	/// This will panic if `iterations` is zero; at least one pass is
	/// required to produce a parse at all.
	pub const fn with_iterations(mut self, iterations: u32) -> Self {
		assert!(iterations != 0, "iterations must be non-zero");
		self.iterations = iterations;
		self
	}

	#[must_use]
	/// # With Verbose Logging.
	pub const fn with_verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	#[must_use]
	/// # With Extra-Verbose Logging.
	pub const fn with_verbose_more(mut self, verbose_more: bool) -> Self {
		self.verbose_more = verbose_more;
		self
	}
}

impl Options {
	#[allow(clippy::cast_possible_wrap)]
	/// # Iterations (As Signed).
	///
	/// The squeeze pass counts iterations with an `i32`; this converts our
	/// public `u32` down to that, saturating at `i32::MAX` in the
	/// astronomically unlikely event someone asks for more than two billion
	/// rounds.
	pub(crate) const fn numiterations(self) -> i32 {
		if self.iterations > i32::MAX as u32 { i32::MAX }
		else { self.iterations as i32 }
	}

	/// # Verbosity.
	pub(crate) const fn verbosity(self) -> Verbosity {
		Verbosity::new(self.verbose, self.verbose_more)
	}
}

impl fmt::Display for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!(
			"Options {{ iterations: {}, verbose: {}, verbose_more: {} }}",
			self.iterations,
			self.verbose,
			self.verbose_more,
		))
	}
}
