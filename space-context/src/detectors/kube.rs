//! Kubernetes context detection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// The one kubeconfig field the prompt shows.
#[derive(Debug, Default, Deserialize)]
struct KubeConfig {
    #[serde(rename = "current-context", default)]
    current_context: Option<String>,
}

/// Path of the kubeconfig under `home`.
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

/// Read the active context from `<home>/.kube/config`.
///
/// A missing file, an empty document, or an unset context are all `Ok(None)`.
pub fn current_context(home: &Path) -> Result<Option<String>, Error> {
    let path = config_path(home);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(Error::Io { path, source }),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let config: KubeConfig =
        serde_yaml::from_str(&content).map_err(|source| Error::Yaml { path, source })?;

    Ok(config.current_context.filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(home: &Path, content: &str) {
        fs::create_dir_all(home.join(".kube")).unwrap();
        fs::write(config_path(home), content).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let home = tempfile::tempdir().unwrap();
        assert_eq!(current_context(home.path()).unwrap(), None);
    }

    #[test]
    fn test_current_context() {
        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            "apiVersion: v1\nkind: Config\ncurrent-context: prod-eu\ncontexts: []\n",
        );
        assert_eq!(
            current_context(home.path()).unwrap(),
            Some("prod-eu".to_string())
        );
    }

    #[test]
    fn test_unset_and_empty_context() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "apiVersion: v1\nkind: Config\n");
        assert_eq!(current_context(home.path()).unwrap(), None);

        write_config(home.path(), "current-context: \"\"\n");
        assert_eq!(current_context(home.path()).unwrap(), None);

        write_config(home.path(), "\n");
        assert_eq!(current_context(home.path()).unwrap(), None);
    }

    #[test]
    fn test_malformed_yaml() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "current-context: [unclosed\n");
        let err = current_context(home.path()).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
    }

    #[test]
    fn test_unreadable_path() {
        let home = tempfile::tempdir().unwrap();
        // A directory where the file should be
        fs::create_dir_all(config_path(home.path())).unwrap();
        let err = current_context(home.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
