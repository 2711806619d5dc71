use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::StegError;
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Prepares the decode API for further configuration
pub fn prepare() -> DecodeApi {
    DecodeApi::default()
}

#[derive(Default, Debug)]
pub struct DecodeApi {
    stego: Option<PathBuf>,
    output: Option<PathBuf>,
    options: StegOptions,
}

impl DecodeApi {
    /// Use the given codec options; they must match the encoding side
    pub fn with_options(mut self, options: StegOptions) -> Self {
        self.options = options;
        self
    }

    /// The stego file carrying hidden data
    pub fn from_stego_file<P: AsRef<Path>>(mut self, stego: P) -> Self {
        self.stego = Some(stego.as_ref().to_path_buf());
        self
    }

    /// Where the recovered payload is written
    pub fn into_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the in-band password to check against, overriding whatever the
    /// options carry. When combined with `with_options`, call this afterwards.
    pub fn using_password(mut self, password: impl Into<String>) -> Self {
        self.options.set_password(password);
        self
    }

    /// Runs the decode and blocks until the payload is recovered
    pub fn execute(self) -> Result<StegStatus> {
        let Some(stego) = self.stego else {
            return Err(StegError::StegoNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegError::TargetNotSet);
        };

        commands::decode(stego, output, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_both_apis() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = temp_dir.path().join("cover.bin");
        let payload = temp_dir.path().join("payload.bin");
        let stego = temp_dir.path().join("stego.bin");
        let recovered = temp_dir.path().join("recovered.bin");
        fs::write(&cover, vec![0xC3u8; 2048]).unwrap();
        fs::write(&payload, b"builders all the way down").unwrap();

        crate::api::encode::prepare()
            .with_cover(&cover)
            .with_payload(&payload)
            .with_output(&stego)
            .using_password("tok3n")
            .execute()
            .expect("Failed to encode");

        let status = prepare()
            .from_stego_file(&stego)
            .into_output(&recovered)
            .using_password("tok3n")
            .execute()
            .expect("Failed to decode");

        assert_eq!(status, StegStatus::DecodingSuccessful);
        assert_eq!(fs::read(&recovered).unwrap(), b"builders all the way down");
    }

    #[test]
    fn validation_stego_input_is_set() {
        assert!(matches!(
            prepare().execute().unwrap_err(),
            StegError::StegoNotSet
        ));
    }

    #[test]
    fn validation_output_is_set() {
        assert!(matches!(
            prepare().from_stego_file("x").execute().unwrap_err(),
            StegError::TargetNotSet
        ));
    }
}
