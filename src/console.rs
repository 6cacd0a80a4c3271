/*
 * country summary printing and the interactive region search
 *
 * Region lookups are case and whitespace insensitive: table keys and
 * user input are both normalized here. The importer itself never
 * normalizes anything.
 */

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};

use defs::{Candidate, Party};
use importer::{ElectionData, COUNTRY_NAME};
use output::parties_by_seats;

// "  Den Haag " -> "denhaag"
pub fn normalize_region(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn candidates_by_number(party: &Party) -> Vec<&Candidate> {
    party
        .candidates
        .iter()
        .sorted_by(|a, b| a.number.cmp(&b.number))
        .collect()
}

pub fn print_country_summary(description: &str, data: &ElectionData) {
    println!(
        "{}",
        format!("=== {} - landelijke statistieken ===", description)
            .blue()
            .bold()
    );
    for entry in data.country_stats.iter() {
        println!("{} = {}", entry.0, entry.1.to_formatted_string(&Locale::nl));
    }

    println!(
        "\n{}",
        "=== Landelijke statistieken partijen ===".blue().bold()
    );
    if data.global_parties.is_empty() {
        println!("geen partijen gevonden");
        return;
    }
    for party in parties_by_seats(&data.global_parties) {
        println!(
            "{}",
            format!("- {} => aantal zetels: {}", party.name, party.seats)
                .yellow()
                .bold()
        );
        for candidate in candidates_by_number(party) {
            if candidate.chosen {
                println!(
                    "    #{} {} - [aantal stemmen = {}]",
                    candidate.number,
                    candidate.full_name(),
                    candidate.total_votes.to_formatted_string(&Locale::nl)
                );
            }
        }
    }
}

fn print_region(input: &str, is_country: bool, parties: &HashMap<String, Party>) {
    println!(
        "\n{}",
        format!("====== Gezocht op: {} ======", input).blue().bold()
    );
    for party in parties_by_seats(parties) {
        if is_country {
            println!(
                "{}",
                format!("Partij: {} - aantal zetels = {}", party.name, party.seats)
                    .yellow()
                    .bold()
            );
        } else {
            println!("{}", format!("Partij: {}", party.name).yellow().bold());
        }
        for candidate in candidates_by_number(party) {
            println!(
                "   #{} {} - [aantal stemmen = {}]",
                candidate.number,
                candidate.full_name(),
                candidate.total_votes.to_formatted_string(&Locale::nl)
            );
        }
    }
}

// read-eval-print over stdin until "exit" or EOF
pub fn run(data: &ElectionData) {
    let normalized: HashMap<String, &HashMap<String, Party>> = data
        .region_parties
        .iter()
        .map(|(region, parties)| (normalize_region(region), parties))
        .collect();

    println!("\n{}", "=== Zoeken op regio ===".blue().bold());
    println!(
        "Voer de naam van een gemeente of provincie in, of 'Nederland' voor het landelijke overzicht."
    );
    println!("Met 'exit' sluit je de console af.");

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("{}", "regio> ".cyan().bold());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match lines.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("{}", "Programma beëindigd.".yellow().bold());
            break;
        }

        match normalized.get(&normalize_region(input)) {
            Some(&parties) if !parties.is_empty() => {
                let is_country = input.eq_ignore_ascii_case(COUNTRY_NAME);
                print_region(input, is_country, parties);
            }
            _ => {
                eprintln!("{} {}", "geen data gevonden voor:".red().bold(), input);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_lowercases() {
        assert_eq!(normalize_region("  Den Haag "), "denhaag");
        assert_eq!(normalize_region("Nederland"), "nederland");
        assert_eq!(normalize_region("'s-Gravenhage"), "'s-gravenhage");
        assert_eq!(normalize_region("SÚDWEST-FRYSLÂN"), "súdwest-fryslân");
    }
}
