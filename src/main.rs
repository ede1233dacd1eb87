use anyhow::Result;
use clap::Parser;
use std::io;
use std::process;

use tokcount::cli::Cli;
use tokcount::tokenizers::TiktokenTokenizer;
use tokcount::utils::logging;

fn try_main(cli: &Cli) -> Result<()> {
    let tokenizer = TiktokenTokenizer::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tokcount::run(&cli.words, io::stdin().lock(), &mut out, &tokenizer)?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::initialize();

    if let Err(e) = try_main(&cli) {
        eprintln!("Erro: {}", e);
        process::exit(1);
    }
}
