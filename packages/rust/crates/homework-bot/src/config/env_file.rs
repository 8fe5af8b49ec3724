use std::path::{Path, PathBuf};

use anyhow::Context;

/// Seed the process environment from a dotenv file.
///
/// An explicit `path` must load. Without one, `.env` is searched from the
/// current directory upwards and may be absent, but a file that exists and
/// fails to parse or read is still an error.
pub fn load_env_file(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => optional_env_file(dotenvy::dotenv()),
    }
}

fn optional_env_file(
    loaded: Result<PathBuf, dotenvy::Error>,
) -> anyhow::Result<Option<PathBuf>> {
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(error).context("failed to load .env"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_default_env_file_is_skipped() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(optional_env_file(Err(missing)), Ok(None)));
    }

    #[test]
    fn malformed_default_env_file_is_reported() {
        let malformed = dotenvy::Error::LineParse("PRACTICUM TOKEN".to_string(), 10);
        let error = optional_env_file(Err(malformed)).expect_err("parse error must surface");
        assert!(error.to_string().contains(".env"));
    }

    #[test]
    fn unreadable_default_env_file_is_reported() {
        let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(optional_env_file(Err(denied)).is_err());
    }

    #[test]
    fn explicit_env_file_must_exist() {
        let path = std::env::temp_dir().join("homework-bot-no-such-env-file");
        let error = load_env_file(Some(&path)).expect_err("missing explicit file must fail");
        assert!(error.to_string().contains("homework-bot-no-such-env-file"));
    }
}
