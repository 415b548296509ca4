use std::path::PathBuf;

/// Runtime configuration for the life screensaver
#[derive(Clone)]
pub struct LifeConfig {
    pub time_step: f32,
    pub seed: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub print: bool,
    pub generations: u32,
    pub export: Option<PathBuf>,
}
