//! CLI configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `save.bin`.
    pub save_dir: PathBuf,
    /// Directory holding the content files; bundled content when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory for the log file.
    pub log_dir: PathBuf,
    /// Seed for the runtime random stream; OS entropy when unset.
    pub seed: Option<u64>,
    pub incubator_slots: u8,
    /// Pause between strikes when replaying a bout.
    pub replay_delay: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            data_dir: None,
            log_dir: default_log_dir(),
            seed: None,
            incubator_slots: 4,
            replay_delay: Duration::from_millis(150),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRAGONKEEP_SAVE_DIR` - Directory for the save file (default: platform-specific)
    /// - `DRAGONKEEP_DATA_DIR` - Content directory (default: bundled content)
    /// - `DRAGONKEEP_LOG_DIR` - Log directory (default: platform-specific)
    /// - `DRAGONKEEP_SEED` - Random seed (default: OS entropy)
    /// - `DRAGONKEEP_INCUBATOR_SLOTS` - Incubator capacity (default: 4)
    /// - `DRAGONKEEP_REPLAY_DELAY_MS` - Combat replay pacing (default: 150)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("DRAGONKEEP_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        config.data_dir = env::var("DRAGONKEEP_DATA_DIR").ok().map(PathBuf::from);
        if let Ok(dir) = env::var("DRAGONKEEP_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("DRAGONKEEP_SEED");
        if let Some(slots) = read_env::<u8>("DRAGONKEEP_INCUBATOR_SLOTS") {
            config.incubator_slots = slots.max(1);
        }
        if let Some(millis) = read_env::<u64>("DRAGONKEEP_REPLAY_DELAY_MS") {
            config.replay_delay = Duration::from_millis(millis);
        }

        config
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "dragonkeep")
}

/// - Linux: `~/.local/share/dragonkeep`
/// - macOS: `~/Library/Application Support/dragonkeep`
/// - Fallback: `./save_data`
fn default_save_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/dragonkeep/logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
