//! Optional TOML configuration for the CLI
//!
//! ```toml
//! [unwrap]
//! comment_policy = "hold"      # or "split"
//! empty_input = "emit-nothing" # or "emit-empty-line"
//!
//! [wrap]
//! width = 72
//! ```
//!
//! Command-line flags override values from the file.

use serde::Deserialize;
use spicewrap_format::{AssembleOpts, CommentPolicy, EmptyInput, SpiceError, WrapConfig};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub unwrap: UnwrapSection,
    pub wrap: WrapSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnwrapSection {
    pub comment_policy: Option<CommentPolicy>,
    pub empty_input: Option<EmptyInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapSection {
    pub width: Option<usize>,
}

impl FileConfig {
    /// Load from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| format!("reading config {} failed: {e}", path.display()))?;
        let config: FileConfig = toml::from_str(&text).map_err(|e| {
            SpiceError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    pub fn assemble_opts(
        &self,
        comment_policy: Option<CommentPolicy>,
        empty_input: Option<EmptyInput>,
    ) -> AssembleOpts {
        AssembleOpts {
            comment_policy: comment_policy
                .or(self.unwrap.comment_policy)
                .unwrap_or_default(),
            empty_input: empty_input.or(self.unwrap.empty_input).unwrap_or_default(),
        }
    }

    pub fn wrap_config(&self, width: Option<usize>) -> Result<WrapConfig, SpiceError> {
        match width.or(self.wrap.width) {
            Some(width) => WrapConfig::new(width),
            None => Ok(WrapConfig::default()),
        }
    }
}
