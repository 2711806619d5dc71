use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::StegError;
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Prepares the encode API for further configuration
pub fn prepare() -> EncodeApi {
    EncodeApi::default()
}

#[derive(Default, Debug)]
pub struct EncodeApi {
    cover: Option<PathBuf>,
    payload: Option<PathBuf>,
    output: Option<PathBuf>,
    amount: Option<u64>,
    options: StegOptions,
}

impl EncodeApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: StegOptions) -> Self {
        self.options = options;
        self
    }

    /// The carrier file whose bytes the payload hides in, used readonly
    pub fn with_cover<P: AsRef<Path>>(mut self, cover: P) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    /// The file to hide
    pub fn with_payload<P: AsRef<Path>>(mut self, payload: P) -> Self {
        self.payload = Some(payload.as_ref().to_path_buf());
        self
    }

    /// Hide only the first `amount` bytes of the payload file
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Where the stego file is written
    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the in-band password, overriding whatever the options carry.
    /// When combined with `with_options`, call this afterwards.
    pub fn using_password(mut self, password: impl Into<String>) -> Self {
        self.options.set_password(password);
        self
    }

    /// Runs the encode and blocks until the stego file is written
    pub fn execute(self) -> Result<StegStatus> {
        let Some(cover) = self.cover else {
            return Err(StegError::CoverNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(StegError::PayloadNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegError::TargetNotSet);
        };

        match self.amount {
            Some(amount) => {
                commands::encode_amount(cover, payload, amount, output, &self.options)
            }
            None => commands::encode(cover, payload, output, &self.options),
        }
    }
}
