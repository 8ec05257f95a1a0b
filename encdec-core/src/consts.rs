//! Constants used by the encdec ciphers and configuration.

/// The number of letters in the ASCII alphabet, per case.
pub const LETTER_ALPHABET_SIZE: i64 = 26;

/// The modulus of the Unicode shift.
///
/// This is one less than the number of 16-bit code units, so code unit `0xFFFF` wraps to `0`
/// and does not survive a round trip.
pub const UNICODE_ALPHABET_SIZE: i64 = 0xFFFF;

/// The textual form of [`Mode::Encrypt`][`crate::cipher::Mode::Encrypt`].
pub const MODE_ENCRYPT: &str = "enc";

/// The textual form of [`Mode::Decrypt`][`crate::cipher::Mode::Decrypt`].
pub const MODE_DECRYPT: &str = "dec";

/// Allowed values for the mode option.
pub const MODES: &[&str] = &[MODE_ENCRYPT, MODE_DECRYPT];

/// The textual form of [`Algorithm::Unicode`][`crate::cipher::Algorithm::Unicode`].
pub const ALG_UNICODE: &str = "unicode";

/// The textual form of [`Algorithm::Shift`][`crate::cipher::Algorithm::Shift`].
pub const ALG_SHIFT: &str = "shift";

/// Allowed values for the algorithm option.
pub const ALGORITHMS: &[&str] = &[ALG_UNICODE, ALG_SHIFT];

/// Default shift amount.
pub const DEFAULT_SHIFT: i64 = 0;
