//
// Parse the Kiesraad election results CSV file.
// Example file: TK2023_uitslag.csv ("Tweede Kamer der Staten-Generaal 2023")
//
// Semicolon separated, no quoting. The first line is a header and is
// always skipped. Rows with fewer than 16 columns are malformed and
// dropped without comment; columns past the sixteenth are ignored.
//

extern crate csv;

use std::error::Error;
use std::fs::File;
use std::io;

// one row of the results file; only the first 16 columns carry meaning
// (column 4 is unused filler)
#[derive(Debug, Clone)]
pub struct UitslagRow {
    pub regio: String,
    pub regio_code: String,
    pub ouder_regio_code: String,
    pub grootouder_regio_code: String,
    pub lijst_nummer: String,
    pub lijst_naam: String,
    pub kandidaat_nummer: String,
    pub initialen: String,
    pub voornaam: String,
    pub tussenvoegsel: String,
    pub achternaam: String,
    pub woonplaats: String,
    pub geslacht: String,
    pub veld_type: String,
    pub veld_waarde: String,
}

impl UitslagRow {
    // None for records that don't have the minimum 16 columns
    pub fn from_record(record: &csv::StringRecord) -> Option<UitslagRow> {
        if record.len() < 16 {
            return None;
        }
        let col = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        Some(UitslagRow {
            regio: col(0),
            regio_code: col(1),
            ouder_regio_code: col(2),
            grootouder_regio_code: col(3),
            lijst_nummer: col(5),
            lijst_naam: col(6),
            kandidaat_nummer: col(7),
            initialen: col(8),
            voornaam: col(9),
            tussenvoegsel: col(10),
            achternaam: col(11),
            woonplaats: col(12),
            geslacht: col(13),
            veld_type: col(14),
            veld_waarde: col(15),
        })
    }
}

pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<UitslagRow>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);
    let mut rows: Vec<UitslagRow> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(row) = UitslagRow::from_record(&record) {
            rows.push(row);
        }
    }
    Ok(rows)
}

pub fn load(filename: &str) -> Result<Vec<UitslagRow>, Box<dyn Error>> {
    let f = File::open(filename)?;
    read_rows(f)
}
