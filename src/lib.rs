//! Streaming implementations of the [SHA-256][1] and SHA-1 cryptographic
//! hash algorithms, as defined in FIPS 180-2.
//!
//! Data is absorbed incrementally and the digest produced on demand:
//!
//! ```
//! use sha_stream::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"hello ").update(b"world");
//! let digest = hasher.digest();
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! When the `asm` feature is enabled (the default) and the target supports
//! it, compression is routed through an accelerated backend selected once at
//! startup. Both backends produce bit-identical digests.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2

#![deny(clippy::all, clippy::perf, clippy::correctness)]
#![allow(clippy::unreadable_literal)]

mod consts;
mod encoding;
mod error;
mod platform;
mod sha1;
mod sha1_utils;
mod sha256;
mod sha256_utils;

pub use crate::encoding::{DigestEncoding, DigestOutput, Encoding};
pub use crate::error::{Error, Result};
pub use crate::sha1::{sha1, Sha1};
pub use crate::sha256::{sha256, Sha256};
