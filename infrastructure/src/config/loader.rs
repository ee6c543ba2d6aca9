//! Configuration loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["memchat.toml", ".memchat.toml"];

/// Well-known variables and the config keys they fill
const ENV_KEYS: [(&str, &str); 3] = [
    ("DATABASE_URL", "vector_store.config.connection_string"),
    ("SUPABASE_URL", "auth.supabase_url"),
    ("SUPABASE_KEY", "auth.supabase_key"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `.env` from the working directory into the process environment.
    ///
    /// Values in the file replace variables already set in the shell.
    /// Returns the path of the file that was loaded, if any.
    pub fn load_dotenv() -> Option<PathBuf> {
        match dotenvy::dotenv_override() {
            Ok(path) => {
                debug!("loaded environment from {}", path.display());
                Some(path)
            }
            Err(_) => None,
        }
    }

    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment.merge(Self::environment()))
    }

    /// Load defaults and environment only (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        Self::extract(Self::defaults().merge(Self::environment()))
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn environment() -> Figment {
        let mut figment = Figment::new();
        for (var, key) in ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment.merge(Env::prefixed("MEMCHAT_").split("__"))
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/memchat/config.toml if set,
    /// otherwise falls back to ~/.config/memchat/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("memchat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for (var, _) in ENV_KEYS {
            let mark = if std::env::var_os(var).is_some() {
                "SET  "
            } else {
                "     "
            };
            println!("  [{}] Env:     {}", mark, var);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Flag:    {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./memchat.toml or ./.memchat.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const FILE_CONFIG: &str = r#"
[vector_store]
provider = "memory"

[vector_store.config]
collection_name = "notes"
connection_string = "postgresql://file-host/db"

[llm.config]
model = "qwen3:8b"
temperature = 0.7

[chat]
memory_limit = 5
"#;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("memchat"));
    }

    #[test]
    fn test_load_defaults_keeps_collection() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.vector_store.config.collection_name, "memories");
            assert_eq!(config.vector_store.config.embedding_model_dims, 768);
            assert_eq!(config.chat.memory_limit, 3);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", FILE_CONFIG)?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.vector_store.provider, "memory");
            assert_eq!(config.vector_store.config.collection_name, "notes");
            assert_eq!(config.vector_store.config.embedding_model_dims, 768);
            assert_eq!(config.llm.config.model, "qwen3:8b");
            assert_eq!(config.llm.config.max_tokens, 2000);
            assert_eq!(config.chat.memory_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file("memchat.toml", "[chat]\ndefault_user_id = \"bob\"")?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.chat.default_user_id, "bob");
            assert!(ConfigLoader::load_defaults().unwrap().chat.default_user_id != "bob");
            Ok(())
        });
    }

    #[test]
    fn test_well_known_variables_fill_config() {
        Jail::expect_with(|jail| {
            jail.set_env(
                "DATABASE_URL",
                "postgresql://postgres:pw@db.x.supabase.co:5432/postgres",
            );
            jail.set_env("SUPABASE_URL", "https://x.supabase.co");
            jail.set_env("SUPABASE_KEY", "eyJhbGciOiJIUzI1NiJ9.e30.abc");
            jail.set_env("MEMCHAT_CHAT__MEMORY_LIMIT", "5");

            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(
                config.vector_store.config.connection_string,
                "postgresql://postgres:pw@db.x.supabase.co:5432/postgres"
            );
            assert_eq!(config.auth.supabase_url, "https://x.supabase.co");
            assert_eq!(config.auth.supabase_key, "eyJhbGciOiJIUzI1NiJ9.e30.abc");
            assert_eq!(config.chat.memory_limit, 5);
            assert!(config.validate().is_ok());
            assert!(config.validate_auth().is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_environment_beats_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", FILE_CONFIG)?;
            jail.set_env("DATABASE_URL", "postgresql://env-host/db");
            jail.set_env("MEMCHAT_CHAT__MEMORY_LIMIT", "8");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(
                config.vector_store.config.connection_string,
                "postgresql://env-host/db"
            );
            assert_eq!(config.chat.memory_limit, 8);
            assert_eq!(config.vector_store.config.collection_name, "notes");
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_replaces_shell_variables() {
        Jail::expect_with(|jail| {
            jail.set_env("MEMCHAT_LLM__CONFIG__MODEL", "from-shell");
            jail.create_file(".env", "MEMCHAT_LLM__CONFIG__MODEL=from-dotenv\n")?;

            assert!(ConfigLoader::load_dotenv().is_some());
            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.llm.config.model, "from-dotenv");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[chat]\nmemory_limit = \"many\"")?;

            let err = ConfigLoader::load(Some(Path::new("broken.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }
}
