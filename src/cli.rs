use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec3A;
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Parse a vector written as `x,y,z`.
pub fn parse_vec3(s: &str) -> Result<Vec3A, String> {
    let parts = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid component '{}': {}", part.trim(), e))
        })
        .collect::<Result<Vec<f32>, String>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3A::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma-separated components, got {}", parts.len())),
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "hitcore")]
#[command(about = "Cast a ray into a sphere scene and report the nearest hit")]
pub struct Args {
    /// Scene description (JSON)
    #[arg(short, long, default_value = "scenes/three_spheres.json")]
    pub scene: PathBuf,

    /// Ray origin as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub origin: Vec3A,

    /// Ray direction as x,y,z (need not be normalized)
    #[arg(long, default_value = "0,0,-1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub direction: Vec3A,

    /// Lower bound of the accepted ray parameter (exclusive)
    #[arg(long, default_value_t = 0.001, allow_hyphen_values = true)]
    pub t_min: f32,

    /// Upper bound of the accepted ray parameter (exclusive)
    #[arg(long, default_value_t = f32::INFINITY, allow_hyphen_values = true)]
    pub t_max: f32,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vec3_accepts_three_components() {
        assert_eq!(parse_vec3("1,-2, 3.5").unwrap(), Vec3A::new(1.0, -2.0, 3.5));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["hitcore"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scenes/three_spheres.json"));
        assert_eq!(args.origin, Vec3A::ZERO);
        assert_eq!(args.direction, Vec3A::NEG_Z);
        assert_eq!(args.t_min, 0.001);
        assert!(args.t_max.is_infinite());
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
    }

    #[test]
    fn negative_components_and_bounds() {
        let args = Args::try_parse_from([
            "hitcore",
            "--origin",
            "-1,0,-5",
            "--direction",
            "0,0,1",
            "--t-min",
            "-10",
            "--t-max",
            "100",
            "--debug-level",
            "trace",
        ])
        .unwrap();
        assert_eq!(args.origin, Vec3A::new(-1.0, 0.0, -5.0));
        assert_eq!(args.t_min, -10.0);
        assert_eq!(args.t_max, 100.0);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Trace);
    }
}
