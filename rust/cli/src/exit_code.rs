//! Process exit codes returned by [`crate::run`].

/// The command finished; for `play` and `sim` every game reached an end.
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid settings, a game that could not be set up, or an
/// I/O failure. The reason is printed on stderr.
pub const ERROR: i32 = 2;
