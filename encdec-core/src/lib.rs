//! # encdec core library
#![deny(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links
)]
//! encdec encrypts and decrypts text with a shift cipher. It is a teaching-grade substitution
//! cipher and offers no security whatsoever.
//!
//! Two alphabet models are available:
//!
//! * [`Algorithm::Shift`][`cipher::Algorithm::Shift`]: ASCII letters are rotated within their
//! case, around an alphabet of 26. Everything else is left alone.
//!
//! * [`Algorithm::Unicode`][`cipher::Algorithm::Unicode`]: every UTF-16 code unit is rotated
//! around an alphabet of 65535 (see [`consts::UNICODE_ALPHABET_SIZE`]).
//!
//! ## Examples
//!
//! ### Transforming a string
//!
//! ```
//! use encdec_core::cipher::{Algorithm, Cipher};
//!
//! let cipher = Cipher::new(Algorithm::Shift, 3);
//!
//! let sealed = cipher.encrypt_str("abcXYZ");
//! assert_eq!(sealed, "defABC");
//! assert_eq!(cipher.decrypt_str(&sealed), "abcXYZ");
//! ```
//!
//! ### Running a pipeline
//!
//! A [`Config`][`config::Config`] describes one run. The [`Pipeline`][`pipeline::Pipeline`]
//! reads the whole message once, transforms it and writes it once.
//!
//! ```
//! use encdec_core::cipher::{Algorithm, Mode};
//! use encdec_core::config::Config;
//! use encdec_core::pipeline::Pipeline;
//! # use encdec_core::error::Error;
//!
//! # fn main() -> Result<(), Error> {
//! let config = Config {
//!     mode: Mode::Decrypt,
//!     algorithm: Algorithm::Unicode,
//!     shift: 1,
//!     data: Some("b".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut stdout = Vec::new();
//! Pipeline::new(&config).run_with(&mut stdout)?;
//! assert_eq!(stdout, b"a\n");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod config;
pub mod consts;
pub mod endpoint;
pub mod error;
pub mod pipeline;

#[doc(hidden)]
pub use consts::*;
