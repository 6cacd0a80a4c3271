use std::error::Error;
use std::fs::File;

use itertools::Itertools;
use serde_json;

use configuration::ImportTask;
use defs::{Municipality, Party, Province};
use importer::ElectionData;

#[derive(Serialize)]
struct Parameters {
    name: String,
    description: String,
    format: String,
    dataset: String,
    provinces: usize,
    municipalities: usize,
    parties: usize,
    regions: usize,
}

#[derive(Serialize)]
struct Output<'a> {
    parameters: Parameters,
    country_stats: Vec<(&'a str, i64)>,
    provinces: &'a [Province],
    municipalities: &'a [Municipality],
    parties: Vec<&'a Party>,
}

// global parties, seats descending then name ascending
pub fn parties_by_seats(parties: &::std::collections::HashMap<String, Party>) -> Vec<&Party> {
    parties
        .values()
        .sorted_by(|a, b| b.seats.cmp(&a.seats).then_with(|| a.name.cmp(&b.name)))
        .collect()
}

pub fn write_json(
    output_file: &str,
    task: &ImportTask,
    data: &ElectionData,
) -> Result<(), Box<dyn Error>> {
    let output = Output {
        parameters: Parameters {
            name: task.slug.clone(),
            description: task.description.clone(),
            format: task.format.clone(),
            dataset: task.dataset.clone(),
            provinces: data.provinces.len(),
            municipalities: data.municipalities.len(),
            parties: data.global_parties.len(),
            regions: data.region_parties.len(),
        },
        country_stats: data
            .country_stats
            .iter()
            .map(|e| (e.0.as_str(), e.1))
            .collect(),
        provinces: &data.provinces,
        municipalities: &data.municipalities,
        parties: parties_by_seats(&data.global_parties),
    };
    let fd = File::create(output_file)?;
    serde_json::to_writer_pretty(fd, &output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate tempfile;

    use super::*;
    use defs::Party;
    use std::collections::HashMap;

    #[test]
    fn parties_sort_by_seats_then_name() {
        let mut parties = HashMap::new();
        for (number, name, seats) in
            &[(1, "VVD", 24), (2, "GL-PvdA", 25), (3, "NSC", 20), (4, "D66", 24)]
        {
            let mut party = Party::new(*number, name);
            party.set_seats(*seats);
            parties.insert(name.to_string(), party);
        }
        let sorted: Vec<&str> = parties_by_seats(&parties)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["GL-PvdA", "D66", "VVD", "NSC"]);
    }

    #[test]
    fn writes_the_model_as_json() {
        use configuration::ImportTask;
        use importer::ElectionData;
        use kiesraad::data::uitslag::read_rows;

        let csv = "header\nNederland;L528;;;;1;VVD;;;;;;;;LijstAantalZetels;34\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        let mut data = ElectionData::new();
        data.ingest(&rows);

        let task = ImportTask {
            slug: "tk2023".to_string(),
            description: "Tweede Kamer 2023".to_string(),
            format: "kiesraad-csv".to_string(),
            dataset: "TK2023_uitslag.csv".to_string(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tk2023.json");
        write_json(path.to_str().unwrap(), &task, &data).unwrap();

        let fd = ::std::fs::File::open(&path).unwrap();
        let value: ::serde_json::Value = ::serde_json::from_reader(fd).unwrap();
        assert_eq!(value["parameters"]["name"], "tk2023");
        assert_eq!(value["parties"][0]["name"], "VVD");
        assert_eq!(value["parties"][0]["seats"], 34);
    }
}
