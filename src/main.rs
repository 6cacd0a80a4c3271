#[macro_use]
extern crate clap;
extern crate uitslag;

use std::process;
use std::time::Instant;

use clap::{App, Arg};

use uitslag::configuration;
use uitslag::console;
use uitslag::importer::ElectionData;
use uitslag::kiesraad;
use uitslag::output;

fn main() {
    let matches = App::new("uitslag")
        .version(crate_version!())
        .about("Dutch parliamentary election results importer and explorer")
        .arg(
            Arg::with_name("config")
                .help("TOML import task file naming the results CSV")
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(true)
                .value_name("FILE")
                .help("write the imported model as JSON to this file"),
        )
        .arg(
            Arg::with_name("batch")
                .long("batch")
                .help("print the country summary and exit, skipping the interactive search"),
        )
        .get_matches();

    let task = match configuration::read_config(matches.value_of("config").unwrap()) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let rows = match kiesraad::data::uitslag::load(&task.dataset) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("unable to read {}: {}", task.dataset, e);
            process::exit(1);
        }
    };
    let mut data = ElectionData::new();
    data.ingest(&rows);
    println!(
        "imported {} rows from {} in {:?}",
        rows.len(),
        task.dataset,
        start.elapsed()
    );

    console::print_country_summary(&task.description, &data);

    if let Some(path) = matches.value_of("json") {
        if let Err(e) = output::write_json(path, &task, &data) {
            eprintln!("unable to write {}: {}", path, e);
            process::exit(1);
        }
    }

    if !matches.is_present("batch") {
        console::run(&data);
    }
}
