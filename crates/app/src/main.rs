//! imgsim: Educational image transmission chain simulator.
//!
//! Loads (or generates) an 8-bit grayscale image, runs it through the
//! core pipeline — bitstream encoding, bit-flip noise channel,
//! reconstruction, restoration filter, error metrics — and writes the
//! noisy and restored images as PNGs.

mod config;
mod imgio;
mod input_gen;

use config::Config;
use imgsim_core::channel::ChannelConfig;
use imgsim_core::pipeline::run_simulation;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    // Load the input image, or generate one when no file was given
    let (image, generated) = match &config.input_file {
        Some(path) => (imgio::load_grayscale(path, config.size)?, false),
        None => {
            println!(
                "No input image; generating a {}x{} test image (seed {})",
                config.size, config.size, config.seed
            );
            (
                input_gen::generate_test_image(config.seed, config.size, config.size),
                true,
            )
        }
    };

    let channel = ChannelConfig::new(config.flip_probability(), config.seed);
    let result = run_simulation(&image, &channel, config.filter).map_err(|e| e.to_string())?;

    if config.print_metrics {
        result.print_summary();
    }

    if generated {
        imgio::save_png(&result.original, &config.out_dir.join("original.png"))?;
    }
    imgio::save_png(&result.noisy, &config.out_dir.join("noisy.png"))?;
    imgio::save_png(&result.restored, &config.out_dir.join("restored.png"))?;

    println!("Wrote noisy.png and restored.png to {}", config.out_dir.display());

    Ok(())
}
