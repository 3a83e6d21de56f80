//! spicewrap Test Utilities
//!
//! Shared netlist fixtures, golden outputs and helpers for the spicewrap crates.

use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Instance and parameter statements using `+` continuations
pub const TEST1_SP: &str = "\
* Sense amplifier slice

.subckt senseamp LP SENPB VBLH VPP PCH

MX_m2
+LP SENPB
+VBLH VPP PCH
+w='2.5*4' l=0.1 nf=4

MMXM11 biasp1 i50ua VSSA VSSA nch_18_mac
+ l=2e-07 m=1 nf=5
+ nfin=20 w=4.61e-06
R1 LP SENPB 1k
.ends senseamp
";

/// Golden unwrapped form of [`TEST1_SP`]
pub const TEST1_UNWRAPPED: &str = "\
* Sense amplifier slice
.subckt senseamp LP SENPB VBLH VPP PCH
MX_m2 LP SENPB VBLH VPP PCH w='2.5*4' l=0.1 nf=4
MMXM11 biasp1 i50ua VSSA VSSA nch_18_mac l=2e-07 m=1 nf=5 nfin=20 w=4.61e-06
R1 LP SENPB 1k
.ends senseamp
";

/// Comment statements using `*+` continuations
pub const TEST2_SP: &str = "\
* Lorem ipsum dolor sit amet, consectetur
*+ adipiscing elit, sed do eiusmod tempor
*+ incididunt ut labore et dolore magna aliqua.
.param vdd=1.8
+ vss=0
** Plain comment
";

/// Golden unwrapped form of [`TEST2_SP`]
pub const TEST2_UNWRAPPED: &str = "\
* Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
.param vdd=1.8 vss=0
** Plain comment
";

/// Parameter statement interrupted by standalone comments
pub const INTERLEAVED_SP: &str = "\
.param a=1
+ b='1+3+xy'
** Comment 1
** Comment 2
+ c=42
+ last=-1
";

/// Long plain paragraph used for wrap goldens
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// [`LOREM_IPSUM`] as a comment statement
pub const LOREM_IPSUM_COMMENT: &str = "* Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// [`LOREM_IPSUM`] wrapped at width 50
pub const LOREM_WRAPPED_50: [&str; 10] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing",
    "+ elit, sed do eiusmod tempor incididunt ut labore",
    "+ et dolore magna aliqua. Ut enim ad minim veniam,",
    "+ quis nostrud exercitation ullamco laboris nisi",
    "+ ut aliquip ex ea commodo consequat. Duis aute",
    "+ irure dolor in reprehenderit in voluptate velit",
    "+ esse cillum dolore eu fugiat nulla pariatur.",
    "+ Excepteur sint occaecat cupidatat non proident,",
    "+ sunt in culpa qui officia deserunt mollit anim",
    "+ id est laborum.",
];

/// [`LOREM_IPSUM_COMMENT`] wrapped at width 50
pub const LOREM_COMMENT_WRAPPED_50: [&str; 11] = [
    "* Lorem ipsum dolor sit amet, consectetur",
    "*+ adipiscing elit, sed do eiusmod tempor",
    "*+ incididunt ut labore et dolore magna aliqua. Ut",
    "*+ enim ad minim veniam, quis nostrud exercitation",
    "*+ ullamco laboris nisi ut aliquip ex ea commodo",
    "*+ consequat. Duis aute irure dolor in",
    "*+ reprehenderit in voluptate velit esse cillum",
    "*+ dolore eu fugiat nulla pariatur. Excepteur sint",
    "*+ occaecat cupidatat non proident, sunt in culpa",
    "*+ qui officia deserunt mollit anim id est",
    "*+ laborum.",
];

/// Builder for physical netlist text
#[derive(Debug, Default)]
pub struct NetlistBuilder {
    lines: Vec<String>,
}

impl NetlistBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement start line
    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// Add a `+` continuation line
    pub fn cont(mut self, text: &str) -> Self {
        self.lines.push(format!("+ {}", text));
        self
    }

    /// Add a `*+` continuation line
    pub fn comment_cont(mut self, text: &str) -> Self {
        self.lines.push(format!("*+ {}", text));
        self
    }

    /// Add a standalone comment line
    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(format!("* {}", text));
        self
    }

    /// Add a blank line
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Physical lines built so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render as newline-terminated text
    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Temporary directory holding a netlist written to disk
pub struct NetlistFile {
    _dir: TempDir,
    /// Path of the written netlist
    pub path: PathBuf,
    /// Path reserved for output next to the netlist
    pub output: PathBuf,
}

/// Write `contents` to `name` inside a fresh temporary directory
pub fn write_netlist(name: &str, contents: &str) -> io::Result<NetlistFile> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    let output = dir.path().join(format!("{}.out", name));
    fs::write(&path, contents)?;
    Ok(NetlistFile {
        _dir: dir,
        path,
        output,
    })
}
