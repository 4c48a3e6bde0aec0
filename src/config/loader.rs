use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;

/// Read and parse the YAML config; the path ends up in every error message
/// because this runs before logging is set up.
pub fn load_from_file(file_path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("error reading config file {}", file_path.display()))?;
    let config: Config = serde_yml::from_str(&contents)
        .with_context(|| format!("malformed config file {}", file_path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = load_from_file(Path::new("/nonexistent/mdm-unassign.yml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/mdm-unassign.yml"));
    }

    #[test]
    fn garbage_yaml_is_rejected() {
        let dir = std::env::temp_dir().join("mdm_unassign_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yml");
        std::fs::write(&path, "tenant_id: [unclosed").unwrap();
        assert!(load_from_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
