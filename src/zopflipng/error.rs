/*!
# Zopflipng: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Internal Error.
///
/// This crate uses `Result` return types in place of conditionally-panicking
/// assertions throughout the optimal-parse pipeline: cost arrays, path
/// traces, and match verification all have invariants that "cannot" be
/// violated, but we'd rather bubble up a diagnosable error than silently
/// produce corrupt output (or, worse, let a release build skip the check
/// entirely).
///
/// The struct stores the source location of the failed check so the message
/// is useful without needing a debugger.
pub(crate) struct ZopfliError {
	/// # Source File.
	file: &'static str,

	/// # Source Line.
	line: u32,
}

impl ZopfliError {
	/// # New Error.
	pub(crate) const fn new(file: &'static str, line: u32) -> Self {
		Self { file, line }
	}
}

impl fmt::Display for ZopfliError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!(
			"internal invariant violation at {}:{}",
			self.file,
			self.line,
		))
	}
}

impl std::error::Error for ZopfliError {}



/// # Error Macro.
///
/// Builds a `ZopfliError` carrying the call site's file and line, always —
/// regardless of whether debug assertions are enabled. Sanity checks in this
/// crate are load-bearing, not a debug-only nicety.
macro_rules! zopfli_error { () => (ZopfliError::new(file!(), line!())); }

/// # Expose the macro to the rest of the module.
pub(super) use zopfli_error;
