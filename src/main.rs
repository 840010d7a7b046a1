use anyhow::Result;
use clap::Parser;
use log::info;

use callisto_day::cli::Args;
use callisto_day::data::{assemble, sequence};
use callisto_day::remote::fits::HttpFitsSource;
use callisto_day::remote::DayQuery;
use callisto_day::{output, remote};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let query = DayQuery {
        station: args.station.clone(),
        year: args.year,
        month: args.month,
        day: args.day,
    };

    let client = remote::client()?;
    let day_url = query.day_url();
    info!("listing {day_url}");
    let files = remote::listing::list_day_files(&client, &query)?;
    let ordered = sequence::sequence(&files, &args.start_time, &day_url)?;
    info!("{} file(s) for {}", ordered.len(), query.station);

    let bursts = if args.save_burst_labels {
        Some(remote::bursts::fetch_burst_list(&client, &query)?)
    } else {
        None
    };

    let source = HttpFitsSource::new(&client);
    let assembly = assemble::assemble(&ordered, bursts.as_deref(), &source, &day_url)?;

    let out_dir = std::env::current_dir()?;
    let spec_path = output::spectrogram_path(&out_dir, &query);
    output::write_spectrogram(&spec_path, &assembly.spectrogram)?;
    info!(
        "wrote {} ({} channels x {} samples)",
        spec_path.display(),
        assembly.spectrogram.nrows(),
        assembly.spectrogram.ncols()
    );

    if args.save_burst_labels {
        let labels = output::labels_path(&out_dir, &query);
        output::write_burst_ranges(&labels, &assembly.burst_ranges)?;
        info!(
            "wrote {} ({} range(s))",
            labels.display(),
            assembly.burst_ranges.len()
        );
    }

    Ok(())
}
