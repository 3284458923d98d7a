mod result;

use std::io::BufWriter;
use std::io::Write;

use clap::Parser;
use clap::ValueEnum;
use fizzbuzz::FizzBuzz;
use fizzbuzz::Size;
use fizzbuzz::Term;
use fizzbuzz::asserts::FIZZBUZZ_ASSERT_LEVEL_DEFINITION;
use fizzbuzz::asserts::FIZZBUZZ_ASSERT_MODERATE;
use log::LevelFilter;
use log::debug;
use log::error;
use log::info;
use log::warn;
use result::FizzBuzzResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    allow_negative_numbers = true
)]
struct Args {
    /// The number of terms of the sequence to print.
    ///
    /// Values which are not integers, or integers smaller than 1, are rejected.
    ///
    /// Possible values: i64 (at least 1)
    #[arg(default_value_t = Size::DEFAULT, verbatim_doc_comment)]
    size: Size,

    /// Determines how the sequence is produced and printed.
    ///
    /// - The "each" mode produces the terms one at a time and prints every term on its own line
    /// - The "array" mode produces the whole sequence first and prints it as a single list, e.g.
    ///   `[1, 2, "Fizz", 4, "Buzz"]`
    #[arg(short = 'm', long, value_enum, default_value_t, verbatim_doc_comment)]
    mode: OutputMode,

    /// Enables log message output on stderr.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Print the terms lazily, one per line.
    #[default]
    Each,
    /// Collect all terms and print them as a list.
    Array,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> FizzBuzzResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose);

    if FIZZBUZZ_ASSERT_LEVEL_DEFINITION >= FIZZBUZZ_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the FizzBuzz assert level is set to {FIZZBUZZ_ASSERT_LEVEL_DEFINITION}, meaning every produced term is checked."
        );
    }

    let fizzbuzz = FizzBuzz::with_size(args.size);
    debug!("Printing {} terms in {:?} mode", fizzbuzz.size(), args.mode);

    let stdout = std::io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    match args.mode {
        OutputMode::Each => write_each(&fizzbuzz, &mut output)?,
        OutputMode::Array => write_array(&fizzbuzz.to_vec(), &mut output)?,
    }

    output.flush()?;

    Ok(())
}

fn write_each(fizzbuzz: &FizzBuzz, output: &mut impl Write) -> std::io::Result<()> {
    fizzbuzz.try_for_each_term(|term| writeln!(output, "{term}"))
}

fn write_array(terms: &[Term], output: &mut impl Write) -> std::io::Result<()> {
    write!(output, "[")?;

    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            write!(output, ", ")?;
        }

        match term {
            Term::Number(number) => write!(output, "{number}")?,
            Term::Label(label) => write!(output, "{:?}", label.as_str())?,
        }
    }

    writeln!(output, "]")
}
