//! Configuration for the imgsim application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use imgsim_core::filter::FilterKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Complete configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input image path (None = generate test image)
    pub input_file: Option<PathBuf>,

    /// Directory for output PNGs
    pub out_dir: PathBuf,

    // === Simulation ===
    /// Random seed (channel noise and randomized defaults)
    pub seed: u64,

    /// Noise level in percent, 0-50 (per-bit flip probability * 100)
    pub noise_percent: u8,

    /// Restoration filter selection
    pub filter: FilterKind,

    /// Side length images are resized/generated to (square)
    pub size: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments provided, generates randomized defaults using a
    /// time-based seed. If --seed is provided, uses that seed for all
    /// randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut out_dir: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut noise_percent: Option<u8> = None;
        let mut filter: Option<FilterKind> = None;
        let mut size: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out-dir" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out-dir requires a path".to_string());
                    }
                    out_dir = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--noise" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--noise requires a percent (0-50)".to_string());
                    }
                    let value: u8 = args[i].parse().map_err(|_| "invalid noise percent")?;
                    if value > 50 {
                        return Err(format!("noise percent {value} outside 0-50"));
                    }
                    noise_percent = Some(value);
                }
                "--no-noise" => {
                    noise_percent = Some(0);
                }
                "--filter" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--filter requires none|median|gaussian|mean".to_string());
                    }
                    filter = Some(args[i].parse().map_err(|e| format!("{e}"))?);
                }
                "--size" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--size requires a number".to_string());
                    }
                    let value: usize = args[i].parse().map_err(|_| "invalid size")?;
                    if value == 0 {
                        return Err("size must be at least 1".to_string());
                    }
                    size = Some(value);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            input_file,
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from("./out")),
            seed,
            noise_percent: noise_percent.unwrap_or_else(|| {
                // Bias toward small noise levels
                let r: f64 = rng.gen();
                (r * r * 50.0).round() as u8
            }),
            filter: filter
                .unwrap_or_else(|| FilterKind::ALL[rng.gen_range(0..FilterKind::ALL.len())]),
            size: size.unwrap_or(128),
            print_config,
            print_metrics,
        };

        Ok(config)
    }

    /// Per-bit flip probability derived from the noise percent.
    pub fn flip_probability(&self) -> f64 {
        self.noise_percent as f64 / 100.0
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Input image: {}",
            self.input_file
                .as_ref()
                .map_or("(generate test image)", |p| p.to_str().unwrap_or("?"))
        );
        println!("Output dir: {}", self.out_dir.display());
        println!();
        println!("Seed: {}", self.seed);
        println!("Image size: {}x{}", self.size, self.size);
        println!("Noise level: {}%", self.noise_percent);
        println!("Filter: {}", self.filter);
        println!();
    }
}

fn print_help() {
    println!("imgsim: Educational image transmission chain simulator");
    println!();
    println!("USAGE:");
    println!("    imgsim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>        Input image (default: generate test image)");
    println!("    --out-dir <PATH>   Output directory for PNGs (default: ./out)");
    println!("    --seed <N>         Random seed for determinism");
    println!();
    println!("    --noise <PERCENT>  Bit-flip noise level 0-50 (default: random 0-50)");
    println!("    --no-noise         Disable noise (same as --noise 0)");
    println!("    --filter <NAME>    none|median|gaussian|mean (default: random)");
    println!("    --size <N>         Square size images are resized to (default: 128)");
    println!();
    println!("    --print-config     Print resolved configuration");
    println!("    --no-metrics       Don't print the metrics summary");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    imgsim                                  # Run with random defaults");
    println!("    imgsim --seed 42                        # Deterministic run");
    println!("    imgsim --in photo.png --filter median   # Denoise a real image");
    println!("    imgsim --no-noise --filter none         # Lossless pass-through");
    println!();
}
