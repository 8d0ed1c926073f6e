//! Configuration management

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub chart: ChartConfig,
    pub lexicon: LexiconConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of emotions shown in the summary and emotion chart
    pub top_emotions: usize,
    /// Directory for chart images (defaults to the input file's directory)
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Font family for captions and labels
    pub font: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// VADER-format polarity lexicon replacing the bundled word list
    pub polarity_path: Option<String>,
    /// NRC EmoLex word-level file replacing the bundled emotion lexicon
    pub emotion_path: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(Self::environment())
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations, falling back to defaults plus environment
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = [
            "sentiment.toml",
            "sentiment.yaml",
            "~/.config/sentiment-analyzer/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                tracing::debug!(path = %expanded, "Using configuration file");
                return Self::load(expanded.as_ref());
            }
        }

        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;
        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("SENTIMENT")
            .prefix_separator("_")
            .separator("__")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.report.top_emotions == 0 {
            anyhow::bail!("report.top_emotions must be at least 1");
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            anyhow::bail!("chart dimensions must be non-zero");
        }
        Ok(())
    }
}

impl ReportConfig {
    /// Configured output directory with `~` expanded
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_emotions: 10,
            output_dir: None,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            font: "sans-serif".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.report.top_emotions, 10);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 400);
        assert!(config.report.output_dir.is_none());
        assert!(config.lexicon.polarity_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[report]\ntop_emotions = 5\n").unwrap();
        assert_eq!(config.report.top_emotions, 5);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.font, "sans-serif");
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            [report]
            top_emotions = 3
            output_dir = "/tmp/charts"

            [chart]
            width = 1024
            height = 512
            font = "serif"

            [lexicon]
            emotion_path = "/data/emolex.txt"
        "#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.report.output_dir(), Some(PathBuf::from("/tmp/charts")));
        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.font, "serif");
        assert_eq!(config.lexicon.emotion_path.as_deref(), Some("/data/emolex.txt"));
    }

    #[test]
    fn test_serde_toml_direct() {
        let config: Config = toml::from_str("[chart]\nheight = 300\n").unwrap();
        assert_eq!(config.chart.height, 300);
        assert_eq!(config.report.top_emotions, 10);
    }

    #[test]
    fn test_rejects_zero_top_emotions() {
        let err = Config::from_toml_str("[report]\ntop_emotions = 0\n").unwrap_err();
        assert!(err.to_string().contains("top_emotions"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[chart]\nwidth = 640").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.chart.width, 640);
    }

    #[test]
    fn test_tilde_output_dir_expands() {
        let report = ReportConfig {
            top_emotions: 10,
            output_dir: Some("~/charts".to_string()),
        };
        let dir = report.output_dir().unwrap();
        assert!(!dir.to_string_lossy().starts_with('~'));
    }
}
