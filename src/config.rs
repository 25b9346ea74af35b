use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuizstoreConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Settings after applying CLI overrides and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub database: PathBuf,
    pub host: String,
    pub port: u16,
}

impl QuizstoreConfig {
    /// CLI flag > config file > built-in default
    pub fn resolve(
        &self,
        database: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) -> ServeSettings {
        ServeSettings {
            database: self.resolve_database(database),
            host: host
                .or_else(|| self.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(self.port).unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn resolve_database(&self, database: Option<PathBuf>) -> PathBuf {
        database
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| default_database_path_in(Path::new(".")))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("quizstore.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".quizstore").join("quizstore.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QuizstoreConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QuizstoreConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &QuizstoreConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Add the `.quizstore/` data directory to the project's `.gitignore`
pub fn ensure_gitignore(project_root: &Path) -> anyhow::Result<()> {
    let gitignore_path = project_root.join(".gitignore");
    let entry = ".quizstore/";

    let mut content = if gitignore_path.exists() {
        std::fs::read_to_string(&gitignore_path)?
    } else {
        String::new()
    };
    if content.lines().any(|line| line.trim() == entry) {
        return Ok(());
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(entry);
    content.push('\n');
    std::fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizstore.toml");
        let config = QuizstoreConfig {
            database: Some("data/quiz.db".to_string()),
            host: None,
            port: Some(9000),
        };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        assert!(write_config(&path, &config, true).is_ok());
    }

    #[test]
    fn test_partial_file_parses() {
        let config: QuizstoreConfig = toml::from_str("port = 8080\n").unwrap();
        assert_eq!(config.port, Some(8080));
        assert!(config.database.is_none());
    }

    #[test]
    fn test_resolve_precedence() {
        let config = QuizstoreConfig {
            database: Some("from-file.db".to_string()),
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
        };

        let settings = config.resolve(Some(PathBuf::from("from-cli.db")), None, None);
        assert_eq!(settings.database, PathBuf::from("from-cli.db"));
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9000);

        let defaults = QuizstoreConfig::default().resolve(None, None, Some(1234));
        assert_eq!(defaults.database, default_database_path_in(Path::new(".")));
        assert_eq!(defaults.host, DEFAULT_HOST);
        assert_eq!(defaults.port, 1234);
    }

    #[test]
    fn test_ensure_gitignore_appends_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "target").unwrap();

        ensure_gitignore(dir.path()).unwrap();
        ensure_gitignore(dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(contents, "target\n.quizstore/\n");
    }
}
