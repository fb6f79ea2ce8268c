// Entry point and menu-driven CLI flow.
//
// - [1] loads the JSON dataset into the session (once). A failed load ends
//   the program.
// - [2] prints KPIs, the analysis text and top-N tables, and writes the chart
//   descriptions as JSON.
// - [3] searches/filters the table and optionally shows one row in detail.
// - [4] exports the full dataset as CSV.
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use usage_dash::config::{Cli, Config};
use usage_dash::dashboard::{Analysis, Kpis, SOURCE_NOTE};
use usage_dash::session::{self, LoadState};
use usage_dash::util::format_int;
use usage_dash::{charts, export, output, ranking, Bucket, FilterQuery, Metric, Result};

/// Print `label` and read one trimmed line. `None` on EOF.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn handle_load(cfg: &Config) {
    match session::global().load(&cfg.data_path) {
        Ok((dataset, report)) => {
            println!(
                "Loaded {} countries from {} ({} numbered from source position).\n",
                format_int(dataset.len()),
                cfg.data_path.display(),
                format_int(report.backfilled_ordinals)
            );
        }
        Err(usage_dash::Error::AlreadyLoaded) => {
            println!("Data is already loaded for this session.\n");
        }
        Err(e) => {
            eprintln!("Data not found or invalid: {}", e);
            eprintln!("Make sure the dataset file is available, then restart.\n");
        }
    }
}

fn handle_dashboard(cfg: &Config) -> Result<()> {
    let dataset = session::global().dataset()?;

    println!("Key metrics\n");
    for line in Kpis::compute(dataset)?.lines() {
        println!("  {}", line);
    }
    println!();

    println!("Analysis\n");
    for line in Analysis::compute(dataset)?.narrative() {
        println!("  {}", line);
    }
    println!("\n{}\n", SOURCE_NOTE);

    for metric in [Metric::Mobile, Metric::Computer] {
        let top = ranking::top_n_signed(dataset, metric, cfg.top_n)?;
        println!("Top {} by {} usage\n", top.leaders.len(), metric);
        output::preview_table_rows(&top.leaders, top.leaders.len());
        println!("All other countries combined: {}%\n", top.remainder);
    }

    let specs = charts::all_charts(dataset)?;
    let path = cfg.charts_path();
    output::write_json(&path, &specs)?;
    println!("({} chart descriptions written to {})\n", specs.len(), path.display());
    Ok(())
}

fn handle_search() -> Result<()> {
    let dataset = session::global().dataset()?;
    let text = prompt("Search country: ").unwrap_or_default();
    println!(
        "Filter: {}",
        Bucket::ALL.map(|b| b.as_str()).join(" | ")
    );
    let bucket: Bucket = prompt("Enter filter (blank for none): ")
        .unwrap_or_default()
        .parse()?;

    let rows = FilterQuery::new(text, bucket).apply(dataset);
    println!();
    output::preview_table_rows(&rows, rows.len());

    if rows.is_empty() {
        return Ok(());
    }
    let pick = prompt("Show detail for No (blank to skip): ").unwrap_or_default();
    if pick.is_empty() {
        return Ok(());
    }
    match pick.parse::<u32>().ok().and_then(|no| rows.iter().find(|r| r.ordinal == no)) {
        Some(record) => println!("\n{}\n", output::record_detail(record)),
        None => println!("No row {} in the current table.\n", pick),
    }
    Ok(())
}

fn handle_export(cfg: &Config) -> Result<()> {
    let dataset = session::global().dataset()?;
    let path = export::write_export(dataset, &cfg.out_dir)?;
    println!(
        "Exported {} rows to {} ({}).\n",
        format_int(dataset.len()),
        path.display(),
        export::EXPORT_MIME
    );
    Ok(())
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {}\n", e);
    }
}

fn main() {
    let cfg = Config::from(Cli::parse());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.default_log_level())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    loop {
        println!("Mobile vs Computer Internet Usage");
        println!("[1] Load data");
        println!("[2] Dashboard");
        println!("[3] Search / filter table");
        println!("[4] Export CSV");
        println!("[0] Exit\n");
        let Some(choice) = prompt("Enter choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => {
                handle_load(&cfg);
                if session::global().state() == LoadState::Failed {
                    break;
                }
            }
            "2" => report(handle_dashboard(&cfg)),
            "3" => report(handle_search()),
            "4" => report(handle_export(&cfg)),
            "0" => {
                println!("Exiting the program.");
                break;
            }
            _ => println!("Invalid choice. Please enter 0-4.\n"),
        }
    }
}
