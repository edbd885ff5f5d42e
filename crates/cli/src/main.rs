use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;

use bouquet_cli::{Config, InputSource, LineSink, Records, ingest_designs, ingest_stems};
use bouquet_composer::Composer;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    bouquet_observability::init(config.log_format, &config.log_level);

    if let Err(err) = run(&config) {
        tracing::error!(error = %format!("{err:#}"), "run aborted");
        return Err(err);
    }
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match &config.input {
        InputSource::Stdin => Box::new(io::stdin().lock()),
        InputSource::File(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
    };
    let mut records = Records::new(reader);

    let catalog = ingest_designs(&mut records).context("reading designs")?;
    let mut composer = Composer::new(catalog);

    let mut sink = LineSink::new(io::stdout().lock(), config.output_format);
    let summary =
        ingest_stems(&mut records, &mut composer, &mut sink).context("reading stems")?;

    tracing::info!(
        stems = summary.stems,
        bouquets = summary.bouquets,
        leftover = summary.leftover,
        "stream finished"
    );
    Ok(())
}
