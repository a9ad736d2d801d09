use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use markov_gen_core::io::{read_config, read_text};
use markov_gen_core::model::config::{Config, DEFAULT_ORDER};
use markov_gen_core::model::corpus::Corpus;
use markov_gen_core::model::generator::Generator;

/// Learns word sequences from a text file and prints new text that resembles it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text file to learn from
    file: PathBuf,

    /// Number of previous words used as context (1 to 4)
    #[arg(short, long, default_value_t = DEFAULT_ORDER as u8, value_parser = clap::value_parser!(u8).range(1..=4))]
    order: u8,

    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Character budget of the generated output
    #[arg(short, long)]
    max_chars: Option<usize>,

    /// Sentences of this many characters or fewer are not learned
    #[arg(long)]
    min_threshold: Option<usize>,

    /// Attempts before giving up on a word or sentence that does not fit
    #[arg(long)]
    try_limit: Option<usize>,

    /// Characters that end a sentence, e.g. ".!?"
    #[arg(long)]
    terminators: Option<String>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of outputs to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print the learned corpus as JSON instead of generating text
    #[arg(long)]
    dump: bool,
}

impl Args {
    /// Builds the configuration: file (or defaults), then flag overrides.
    fn config(&self) -> markov_gen_core::Result<Config> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(max_chars) = self.max_chars {
            config.set_max_chars(max_chars)?;
        }
        if let Some(min_threshold) = self.min_threshold {
            config.min_threshold = min_threshold;
        }
        if let Some(try_limit) = self.try_limit {
            config.try_limit = try_limit;
        }
        if let Some(terminators) = &self.terminators {
            config.set_terminators(terminators)?;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config()?;
    let text = read_text(&args.file)?;

    // The context size is a const generic, pick the matching corpus type
    match args.order {
        1 => run::<1>(&args, &text, &config),
        2 => run::<2>(&args, &text, &config),
        3 => run::<3>(&args, &text, &config),
        4 => run::<4>(&args, &text, &config),
        n => Err(format!("Unsupported order {n}, expected 1 to 4").into()),
    }
}

/// Trains a corpus of order `N` and prints either its dump or generated text.
fn run<const N: usize>(args: &Args, text: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = Corpus::<N>::from_text(text, config);
    info!(
        "corpus of order {} built: {} keys, {} transitions",
        N,
        corpus.len(),
        corpus.transition_count()
    );

    if args.dump {
        println!("{}", corpus.dump()?);
        return Ok(());
    }

    match args.seed {
        Some(seed) => print_outputs(Generator::with_rng(&corpus, StdRng::seed_from_u64(seed)), args.count),
        None => print_outputs(Generator::new(&corpus), args.count),
    }
    Ok(())
}

fn print_outputs<const N: usize, R: Rng>(mut generator: Generator<'_, N, R>, count: usize) {
    for _ in 0..count {
        println!("{}", generator.generate());
    }
}
