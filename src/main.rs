use edition_dates::Cli;

fn main() -> anyhow::Result<()> {
    Cli::run()
}
