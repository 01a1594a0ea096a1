use std::path::PathBuf;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub top_level_rules: usize,
    pub total_rules: usize,
    pub unknown_transforms: Vec<String>,
}
