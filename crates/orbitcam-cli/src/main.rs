//! Orbitcam CLI - Command-line interface for the orbit camera rig

mod commands;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, pose, simulate};

#[derive(Parser)]
#[command(name = "orbitcam")]
#[command(about = "Headless driver for the third-person orbit camera rig", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an input script and print every camera pose
    Simulate {
        /// Path to the script file (TOML)
        script: String,

        /// Path to a rig config file
        #[arg(long)]
        config: Option<String>,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Compute a single camera pose
    Pose {
        /// Horizontal angle
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        yaw: f32,

        /// Vertical angle, clamped to the config's pitch bounds
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pitch: f32,

        /// Orbit distance, clamped to the config's distance bounds
        #[arg(long, default_value = "10")]
        distance: f32,

        /// Subject position (comma-separated x,y,z)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        subject: Option<[f32; 3]>,

        /// Read yaw and pitch as degrees instead of radians
        #[arg(long)]
        degrees: bool,

        /// Path to a rig config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate a config file and print the effective config
    Config {
        /// Path to the config file (defaults are printed when omitted)
        path: Option<String>,
    },
}

/// Parse an `x,y,z` argument such as `--subject 1,0,-2`
fn parse_vec3(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 comma-separated values, got {}", parts.len()));
    }
    let x: f32 = parts[0].trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y: f32 = parts[1].trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    let z: f32 = parts[2].trim().parse().map_err(|e| format!("invalid z: {}", e))?;
    Ok([x, y, z])
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate {
            script,
            config,
            format,
        } => simulate::run(&script, config.as_deref(), &format),
        Commands::Pose {
            yaw,
            pitch,
            distance,
            subject,
            degrees,
            config,
        } => pose::run(pose::PoseArgs {
            yaw,
            pitch,
            distance,
            subject,
            degrees,
            config,
        }),
        Commands::Config { path } => config::run(path.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1,2,3"), Ok([1.0, 2.0, 3.0]));
        assert_eq!(parse_vec3(" -1.5, 0 ,4"), Ok([-1.5, 0.0, 4.0]));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn test_cli_parses_pose() {
        let cli = Cli::try_parse_from([
            "orbitcam", "pose", "--yaw", "-90", "--degrees", "--subject", "1,2,3",
        ])
        .unwrap();
        match cli.command {
            Commands::Pose {
                yaw,
                degrees,
                subject,
                ..
            } => {
                assert_eq!(yaw, -90.0);
                assert!(degrees);
                assert_eq!(subject, Some([1.0, 2.0, 3.0]));
            }
            _ => panic!("expected pose command"),
        }
    }
}
