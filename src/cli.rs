use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spheretrace")]
#[command(about = "Path traces a scene of spheres into a PPM or PNG image")]
pub struct Args {
    /// Scene description file; read from stdin when omitted
    pub scene: Option<PathBuf>,

    /// Output image (.png for PNG, anything else for PPM); PPM on stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the scene's samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Override the scene's image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Seed for the per-pixel random streams
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Worker threads (0 lets rayon decide)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
