use clap::Parser;

/// Poisson probability mass function as an ASCII histogram.
#[derive(Parser)]
#[command(
    name = "poisplot",
    version,
    about = "Render the Poisson distribution for a rate parameter as an ASCII histogram"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Rate parameter, between 1 and 50 inclusive.
    ///
    /// Collected raw so that missing or extra values are reported the same
    /// way as an out-of-range value.
    #[arg(value_name = "LAMBDA", num_args = 0.., allow_negative_numbers = true)]
    pub lambda: Vec<String>,
}

impl Cli {
    /// Positional arguments in the shape the report entry point takes.
    pub fn lambda_args(&self) -> Vec<Option<&str>> {
        self.lambda.iter().map(|s| Some(s.as_str())).collect()
    }
}
