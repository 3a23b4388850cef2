use std::path::PathBuf;

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub log_file: PathBuf,
    pub prompt: bool, // False suppresses the "choose an animal" line
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("errors.log"),
            prompt: true,
        }
    }
}
