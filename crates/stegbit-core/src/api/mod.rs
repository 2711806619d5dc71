//! Fluent entry points over the file-level commands.
//!
//! ```no_run
//! use stegbit_core::api;
//!
//! api::encode::prepare()
//!     .with_cover("cover.bin")
//!     .with_payload("secret.pdf")
//!     .with_output("innocuous.bin")
//!     .using_password("rosebud")
//!     .execute()
//!     .expect("Failed to hide payload");
//! ```

pub mod decode;
pub mod encode;
