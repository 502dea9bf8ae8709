use clap::Parser;

mod keypath;
mod render;
mod report;
mod workflow;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "workflow-doc")]
#[command(about = "utility for generating workflow documentation", long_about = None)]
struct Cli {
    /// Enable debug output.
    #[arg(long)]
    debug: bool,

    /// Path(s) to the workflow files to report on.
    #[arg(required = true, num_args = 1..)]
    workflows: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    report::run(&cli.workflows, cli.debug, &mut stdout.lock())
}
