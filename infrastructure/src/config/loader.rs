//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tool-reasoner";
const PROJECT_FILES: [&str; 2] = ["reasoner.toml", ".reasoner.toml"];
const ENV_PREFIX: &str = "REASONER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `REASONER_*` (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./reasoner.toml` or `./.reasoner.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/tool-reasoner/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::figment(global.as_deref(), project.as_deref(), config_path.map(|p| p.as_path()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/tool-reasoner/config.toml if set,
    /// otherwise falls back to ~/.config/tool-reasoner/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* (e.g. {}GEMINI__MODEL)", ENV_PREFIX, ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
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
    use reasoner_domain::OutputFormat;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert!(config.output.show_reasoning);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tool-reasoner"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[gemini]\nmodel = \"gemini-1.5-pro\"\ntemperature = 0.5\n",
        )
        .unwrap();
        fs::write(&explicit, "[gemini]\nmodel = \"gemini-2.0-flash\"\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(&global), None, Some(&explicit))
            .extract()
            .unwrap();

        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert!((config.gemini.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.gemini.max_output_tokens, 1000);
    }

    #[test]
    fn test_project_file_sections_merge() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("reasoner.toml");
        fs::write(&project, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, Some(&project), None)
            .extract()
            .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(&path)).extract();
        assert!(result.is_err());
    }
}
