use colored::Colorize;
use json_iface::cli::CommandLineInterface;
use tracing_subscriber::EnvFilter;

fn main() {
    // stderr only: `--stdout` output must stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
