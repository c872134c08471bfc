#![deny(unsafe_code)]
//! CLI binary for the colorspeak description-to-color system.
//!
//! Subcommands:
//! - `resolve <description..>` — turn free text into a color
//! - `name <hex>` — look up the localized name of an exact color
//! - `convert <hex>` — print a color in another representation
//! - `kelvin <temperature>` — black-body temperature to RGB
//! - `nearest <hex> <candidates..>` — perceptually closest candidate

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use colorspeak_core::{
    rgb_from_kelvin, ColorConvert, ColorDistance, DeltaE2000, RgbColor,
};
use colorspeak_resolve::{ColorResolver, MatchStrategy};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "colorspeak", about = "Natural-language color resolution CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Target representation for `convert`.
#[derive(Clone, Copy, ValueEnum)]
enum Repr {
    Hsv,
    Hls,
    Cmyk,
    Spectral,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a free-text description to a color.
    Resolve {
        /// The description, e.g. "dark dusty rose".
        #[arg(required = true)]
        description: Vec<String>,

        /// BCP-47 language tag for the dictionaries.
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Similarity strategy: exact, levenshtein, damerau-levenshtein,
        /// jaro-winkler.
        #[arg(short, long, default_value = "damerau-levenshtein")]
        strategy: String,

        /// Snap the result to the closest dictionary color.
        #[arg(long)]
        snap: bool,

        /// Directory of per-language resource files.
        #[arg(long)]
        resources: Option<PathBuf>,
    },
    /// Look up the localized name of an exact color.
    Name {
        /// Hex color, e.g. "#FF007F".
        hex: String,

        /// BCP-47 language tag for the dictionaries.
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Directory of per-language resource files.
        #[arg(long)]
        resources: Option<PathBuf>,
    },
    /// Print a color in another representation.
    Convert {
        /// Hex color, e.g. "#FF007F".
        hex: String,

        /// Target representation.
        #[arg(short, long, value_enum)]
        to: Repr,
    },
    /// Convert a black-body temperature in kelvin to RGB.
    Kelvin {
        /// Temperature in kelvin (1000 to 40000).
        temperature: u32,
    },
    /// Find the candidate perceptually closest to a color.
    Nearest {
        /// Hex color to match against.
        hex: String,

        /// Candidate hex colors.
        #[arg(required = true)]
        candidates: Vec<String>,
    },
}

fn parse_strategy(name: &str) -> Result<MatchStrategy, CliError> {
    match name {
        "exact" => Ok(MatchStrategy::Exact),
        "levenshtein" => Ok(MatchStrategy::Levenshtein),
        "damerau-levenshtein" => Ok(MatchStrategy::DamerauLevenshtein),
        "jaro-winkler" => Ok(MatchStrategy::JaroWinkler),
        other => Err(CliError::Input(format!("unknown strategy: {other}"))),
    }
}

fn parse_hex(hex: &str) -> Result<RgbColor, CliError> {
    RgbColor::from_hex(hex).map_err(|e| CliError::Input(e.to_string()))
}

fn resolver_for(resources: Option<PathBuf>) -> ColorResolver {
    match resources {
        Some(dir) => ColorResolver::with_resource_dir(dir),
        None => ColorResolver::new(),
    }
}

fn print_color(color: &RgbColor, json: bool) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "hex": color.to_hex(),
            "rgb": [color.r, color.g, color.b],
            "alpha": color.a,
            "name": color.name,
            "description": color.description,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        match &color.name {
            Some(name) => println!("{name}: {}", color.to_hex()),
            None => println!("{}", color.to_hex()),
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Resolve {
            description,
            lang,
            strategy,
            snap,
            resources,
        } => {
            let description = description.join(" ");
            let strategy = parse_strategy(&strategy)?;
            let resolver = resolver_for(resources);
            match resolver.resolve(&description, &lang, strategy, snap)? {
                Some(color) => print_color(&color, cli.json)?,
                None => {
                    if cli.json {
                        println!("{}", serde_json::json!({ "match": false }));
                    } else {
                        eprintln!("no color terms in \"{description}\"");
                    }
                }
            }
        }
        Command::Name {
            hex,
            lang,
            resources,
        } => {
            let color = parse_hex(&hex)?;
            let resolver = resolver_for(resources);
            let name = resolver.lookup_name(&color, &lang)?;
            if cli.json {
                let info = serde_json::json!({ "hex": color.to_hex(), "name": name });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{name}");
            }
        }
        Command::Convert { hex, to } => {
            let color = parse_hex(&hex)?;
            let info = match to {
                Repr::Hsv => {
                    let hsv = color.to_hsv();
                    serde_json::json!({ "h": hsv.h, "s": hsv.s, "v": hsv.v })
                }
                Repr::Hls => {
                    let hls = color.to_hls();
                    serde_json::json!({ "h": hls.h, "l": hls.l, "s": hls.s })
                }
                Repr::Cmyk => {
                    let cmyk = color.to_cmyk();
                    serde_json::json!({
                        "c": cmyk.c, "m": cmyk.m, "y": cmyk.y, "k": cmyk.k
                    })
                }
                Repr::Spectral => {
                    let spectral = color.as_spectral()?;
                    serde_json::json!({
                        "wavelength_nm": spectral.wavelength(),
                        "name": spectral.name,
                    })
                }
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{info}");
            }
        }
        Command::Kelvin { temperature } => {
            let color = rgb_from_kelvin(temperature)
                .map_err(|e| CliError::Input(e.to_string()))?;
            print_color(&color, cli.json)?;
        }
        Command::Nearest { hex, candidates } => {
            let target = parse_hex(&hex)?;
            let candidates = candidates
                .iter()
                .map(|c| parse_hex(c))
                .collect::<Result<Vec<_>, _>>()?;
            let oracle = DeltaE2000;
            match colorspeak_core::nearest(&target, &candidates, &oracle) {
                Some(best) => {
                    if cli.json {
                        let info = serde_json::json!({
                            "hex": best.to_hex(),
                            "distance": oracle.distance(&target, best),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        println!("{}", best.to_hex());
                    }
                }
                None => return Err(CliError::Input("no candidates given".into())),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
