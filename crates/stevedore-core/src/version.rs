use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A plain `major.minor.patch` release version.
///
/// Parsed through [`semver`] but restricted to the bare three-component
/// form: pre-release and build metadata are rejected, since release
/// branches and image tags are derived from the numeric components alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseVersion {
    /// `"{major}.{minor}"`, the release-line identifier.
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// A non-zero patch marks a hotfix onto an existing release line.
    pub fn is_hotfix(&self) -> bool {
        self.patch > 0
    }

    /// Name of the release branch for this version's line.
    pub fn release_branch(&self) -> String {
        format!("release-v{}", self.major_minor())
    }

    /// Name of the annotated git tag for this version.
    pub fn tag_name(&self) -> String {
        format!("v{self}")
    }
}

impl FromStr for ReleaseVersion {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parsed = semver::Version::parse(input).map_err(|_| Error::InvalidVersion {
            input: input.to_owned(),
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(Error::InvalidVersion {
                input: input.to_owned(),
            });
        }

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
