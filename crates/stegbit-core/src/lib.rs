//! # Stegbit Core API
//!
//! Hides an arbitrary payload inside the body of any carrier file by
//! overwriting a chosen bit of selected cover bytes, and reads it back out.
//! The stego file keeps the cover's exact byte length. One payload can also
//! be fragmented over several covers and recombined in order.
//!
//! The scheme is driven entirely by [`StegOptions`]: initial offset, skip
//! gaps between blocks, block size, hidden bit position, starting bit order
//! and flip cadence, plus an optional in-band password. The decoder must be
//! given the same options, they are never embedded.
//!
//! # Usage Examples
//!
//! ## Hide a file inside a cover
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let dir = tempdir().expect("Failed to create temporary directory");
//! let cover = dir.path().join("cover.bin");
//! let payload = dir.path().join("payload.txt");
//! std::fs::write(&cover, vec![0u8; 4096]).unwrap();
//! std::fs::write(&payload, "Hello, World!").unwrap();
//!
//! stegbit_core::api::encode::prepare()
//!     .with_cover(&cover)
//!     .with_payload(&payload)
//!     .using_password("SuperSecret42")
//!     .with_output(dir.path().join("stego.bin"))
//!     .execute()
//!     .expect("Failed to hide payload in cover");
//! ```
//!
//! ## Read the payload back out
//!
//! ```rust,no_run
//! stegbit_core::api::decode::prepare()
//!     .from_stego_file("stego.bin")
//!     .using_password("SuperSecret42")
//!     .into_output("recovered.txt")
//!     .execute()
//!     .expect("Failed to recover payload");
//! ```
//!
//! ## Stream level
//!
//! [`encoder::encode_frame`] and [`decoder::decode_frame`] run the same
//! codec over any [`std::io::Read`]/[`std::io::Write`] pair, no files
//! involved.

pub mod api;
pub mod bits;
pub mod capacity;
pub mod commands;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod multi;
pub mod options;
pub mod result;
pub mod scalar;

mod frame;

pub use crate::capacity::EncodeValidation;
pub use crate::error::StegError;
pub use crate::multi::{MultiDecodeEntry, MultiEncodeEntry};
pub use crate::options::{Endian, StegOptions};
pub use crate::result::Result;

/// Stable outcome codes of the codec.
///
/// `InvalidPassword` is deliberately a value, not an error: the stego file
/// is present and well formed, it just is not yours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StegStatus {
    EncodingSuccessful = 0,
    DecodingSuccessful = 1,
    InvalidPassword = 2,
}
