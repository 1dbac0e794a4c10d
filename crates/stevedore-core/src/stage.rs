use std::path::{Path, PathBuf};

/// Deploy descriptor expected by `eb deploy` at the working-directory root.
pub const DOCKERRUN_FILE: &str = "Dockerrun.aws.json";

/// Per-environment Elastic Beanstalk settings file.
pub const SETTINGS_FILE: &str = "01_settings.config";

/// Directory `eb` reads environment option settings from.
pub const EBEXTENSIONS_DIR: &str = ".ebextensions";

/// Staged deploy files for one `eb deploy` invocation.
///
/// Copies the per-environment `Dockerrun.aws.json` and settings file into
/// the locations the eb CLI expects, and removes them again on drop. The
/// guard must outlive the deploy call; cleanup runs whether the call
/// succeeded, failed, or panicked, so a failed deploy never leaves stale
/// descriptors behind for the next run.
#[derive(Debug)]
pub struct StagedDeployFiles {
    dockerrun: PathBuf,
    settings: PathBuf,
    ebextensions: PathBuf,
    created_ebextensions: bool,
}

impl StagedDeployFiles {
    /// Stage `{environment_dir}/Dockerrun.aws.json` and
    /// `{environment_dir}/01_settings.config` into `work_dir`.
    ///
    /// The descriptor is parsed as JSON before anything is written, so a
    /// malformed file fails fast with nothing staged.
    pub fn stage(environment_dir: &Path, work_dir: &Path) -> Result<Self, StageError> {
        let descriptor_src = environment_dir.join(DOCKERRUN_FILE);
        let settings_src = environment_dir.join(SETTINGS_FILE);

        let descriptor =
            std::fs::read_to_string(&descriptor_src).map_err(|e| StageError::ReadSource {
                path: descriptor_src.clone(),
                source: e,
            })?;
        serde_json::from_str::<serde_json::Value>(&descriptor).map_err(|e| {
            StageError::InvalidDescriptor {
                path: descriptor_src.clone(),
                source: e,
            }
        })?;

        let dockerrun = work_dir.join(DOCKERRUN_FILE);
        std::fs::write(&dockerrun, &descriptor).map_err(|e| StageError::CopyFile {
            path: dockerrun.clone(),
            source: e,
        })?;

        let ebextensions = work_dir.join(EBEXTENSIONS_DIR);
        let created_ebextensions = !ebextensions.exists();
        if created_ebextensions {
            if let Err(e) = std::fs::create_dir_all(&ebextensions) {
                remove_quietly(&dockerrun);
                return Err(StageError::Create {
                    path: ebextensions,
                    source: e,
                });
            }
        }

        let settings = ebextensions.join(SETTINGS_FILE);
        if let Err(e) = std::fs::copy(&settings_src, &settings) {
            remove_quietly(&dockerrun);
            if created_ebextensions {
                let _ = std::fs::remove_dir(&ebextensions);
            }
            return Err(StageError::CopyFile {
                path: settings_src,
                source: e,
            });
        }

        Ok(Self {
            dockerrun,
            settings,
            ebextensions,
            created_ebextensions,
        })
    }
}

impl Drop for StagedDeployFiles {
    fn drop(&mut self) {
        remove_quietly(&self.dockerrun);
        remove_quietly(&self.settings);
        if self.created_ebextensions {
            // Only removed when this run created it; fails (and is ignored)
            // if other settings files live there.
            let _ = std::fs::remove_dir(&self.ebextensions);
        }
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("failed to remove staged file {}: {e}", path.display());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("failed to read deploy file {path}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON")]
    InvalidDescriptor {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to create directory {path}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy deploy file to {path}")]
    CopyFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
