use std::cell::Cell;

thread_local! {
	static GLOBAL_OPTIONS: Cell<GlobalOptions> = const { Cell::new(GlobalOptions::new()) };
}

pub(crate) fn global_options() -> GlobalOptions {
	GLOBAL_OPTIONS.with(Cell::get)
}

/// Limits shared by every read on the current thread
///
/// Unlike [`ParseOptions`](crate::config::ParseOptions), these aren't passed to each read. They are
/// set once with [`apply_global_options`], and stay in effect for the thread until replaced.
///
/// # Examples
///
/// ```rust
/// use id3dec::config::{GlobalOptions, apply_global_options};
///
/// // Reject any frame payload over 1 MiB
/// apply_global_options(GlobalOptions::new().allocation_limit(1024 * 1024));
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
#[non_exhaustive]
pub struct GlobalOptions {
	pub(crate) allocation_limit: usize,
}

impl GlobalOptions {
	/// The default per-frame allocation limit, 16 MiB
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `GlobalOptions` holding the defaults
	#[must_use]
	pub const fn new() -> Self {
		Self {
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// The largest frame payload or extended header, in bytes, that will be read into memory
	///
	/// This only applies to data that is actually decoded. Unknown frames, and pictures skipped
	/// with [`ParseOptions::read_cover_art`](crate::config::ParseOptions::read_cover_art), are
	/// never buffered. A decoded item over the limit fails the whole read with
	/// [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::config::{GlobalOptions, apply_global_options};
	///
	/// // Tags with large embedded artwork
	/// apply_global_options(GlobalOptions::new().allocation_limit(64 * 1024 * 1024));
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}
}

impl Default for GlobalOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// Replace the [`GlobalOptions`] of the current thread
pub fn apply_global_options(options: GlobalOptions) {
	GLOBAL_OPTIONS.with(|global_options| global_options.set(options));
}
