/*
 * builds the in-memory election model from parsed CSV rows
 *
 * Classification per row, first match wins: country ("Nederland"/L528),
 * province (code P*, parent L528), municipality (code K* or G*), or an
 * unclassified region aggregated under its literal name. Every row then
 * feeds the party/candidate tables, keyed by the literal region name.
 */

use std::collections::HashMap;

use defs::*;
use fieldname;
use kiesraad::data::uitslag::UitslagRow;

pub const COUNTRY_NAME: &str = "Nederland";
pub const COUNTRY_CODE: &str = "L528";

// the only veldtypes stored as country statistics; candidate and party
// veldtypes never end up in the statistics table
const COUNTRY_STAT_FIELDS: [&str; 5] = [
    "AantalBlancoStemmen",
    "AantalGeldigeStemmen",
    "AantalOngeldigeStemmen",
    "Kiesgerechtigden",
    "Opkomst",
];

fn is_country_stat(veld_type: &str) -> bool {
    COUNTRY_STAT_FIELDS.iter().any(|f| *f == veld_type)
}

fn parse_int_default(s: &str, default: i64) -> i64 {
    s.parse().unwrap_or(default)
}

pub struct ElectionData {
    pub countries: Vec<Country>,
    pub provinces: Vec<Province>,
    pub municipalities: Vec<Municipality>,
    country_by_code: HashMap<String, CountryIndex>,
    province_by_code: HashMap<String, ProvinceIndex>,
    municipality_by_code: HashMap<String, usize>,
    pub country_stats: CountryStats,
    // party name -> Party, aggregated over the whole country
    pub global_parties: HashMap<String, Party>,
    // region name -> party name -> Party, so each region has its own
    // Party objects
    pub region_parties: HashMap<String, HashMap<String, Party>>,
}

impl ElectionData {
    pub fn new() -> ElectionData {
        ElectionData {
            countries: Vec::new(),
            provinces: Vec::new(),
            municipalities: Vec::new(),
            country_by_code: HashMap::new(),
            province_by_code: HashMap::new(),
            municipality_by_code: HashMap::new(),
            country_stats: CountryStats::new(),
            global_parties: HashMap::new(),
            region_parties: HashMap::new(),
        }
    }

    pub fn ingest(&mut self, rows: &[UitslagRow]) {
        for row in rows {
            self.ingest_row(row);
        }
    }

    pub fn ingest_row(&mut self, row: &UitslagRow) {
        // country rows, "Nederland;L528;..."
        if row.regio.eq_ignore_ascii_case(COUNTRY_NAME)
            && row.regio_code.eq_ignore_ascii_case(COUNTRY_CODE)
        {
            if !row.veld_type.is_empty()
                && !row.veld_waarde.is_empty()
                && is_country_stat(&row.veld_type)
            {
                // veldwaarde isn't always numeric; skip when it isn't
                if let Ok(value) = row.veld_waarde.parse::<i64>() {
                    let label = fieldname::to_human_readable(&row.veld_type);
                    self.country_stats.set(label, value);
                }
            }
            self.find_or_create_country(&row.regio, &row.regio_code);
            // party and candidate fields also occur at the country level
            self.apply_party_fields(row);
            return;
        }

        // province rows, e.g. "Groningen;P20;L528;..."
        if row.regio_code.starts_with('P')
            && row.ouder_regio_code.eq_ignore_ascii_case(COUNTRY_CODE)
        {
            self.find_or_create_province(&row.regio, &row.regio_code);
            self.apply_party_fields(row);
            return;
        }

        // municipality rows, e.g. "Amsterdam;G363;K9;P27;..."; the parent
        // code is normally a province, otherwise try the grandparent
        if row.regio_code.starts_with('K') || row.regio_code.starts_with('G') {
            let province = self
                .province_by_code
                .get(&row.ouder_regio_code)
                .or_else(|| self.province_by_code.get(&row.grootouder_regio_code))
                .cloned();
            self.find_or_create_municipality(&row.regio, &row.regio_code, province);
            self.apply_party_fields(row);
            return;
        }

        // anything else (polling districts etc.) still gets its party
        // fields aggregated under the literal region name
        self.apply_party_fields(row);
    }

    fn find_or_create_country(&mut self, name: &str, code: &str) -> CountryIndex {
        if let Some(idx) = self.country_by_code.get(code) {
            return *idx;
        }
        let idx = CountryIndex(self.countries.len());
        self.countries.push(Country {
            name: name.to_string(),
            code: code.to_string(),
        });
        self.country_by_code.insert(code.to_string(), idx);
        idx
    }

    fn find_or_create_province(&mut self, name: &str, code: &str) -> ProvinceIndex {
        if let Some(idx) = self.province_by_code.get(code) {
            return *idx;
        }
        let country = self.find_or_create_country(COUNTRY_NAME, COUNTRY_CODE);
        let idx = ProvinceIndex(self.provinces.len());
        self.provinces.push(Province {
            name: name.to_string(),
            code: code.to_string(),
            country,
        });
        self.province_by_code.insert(code.to_string(), idx);
        idx
    }

    fn find_or_create_municipality(
        &mut self,
        name: &str,
        code: &str,
        province: Option<ProvinceIndex>,
    ) -> usize {
        if let Some(idx) = self.municipality_by_code.get(code) {
            return *idx;
        }
        let idx = self.municipalities.len();
        self.municipalities.push(Municipality {
            name: name.to_string(),
            code: code.to_string(),
            province,
        });
        self.municipality_by_code.insert(code.to_string(), idx);
        idx
    }

    // find-or-create the party in the region table and the global table,
    // then apply the row's field to both at once
    fn apply_party_fields(&mut self, row: &UitslagRow) {
        if row.lijst_naam.is_empty() {
            return;
        }
        let list_number = parse_int_default(&row.lijst_nummer, -1);

        let region_party = self
            .region_parties
            .entry(row.regio.clone())
            .or_insert_with(HashMap::new)
            .entry(row.lijst_naam.clone())
            .or_insert_with(|| Party::new(list_number, &row.lijst_naam));

        let global_party = self
            .global_parties
            .entry(row.lijst_naam.clone())
            .or_insert_with(|| Party::new(list_number, &row.lijst_naam));

        let kind = match FieldKind::parse(&row.veld_type) {
            Some(kind) => kind,
            None => return,
        };
        apply_field(kind, row, region_party, global_party);
    }
}

// one dispatch applied to both the region-scoped and the global Party,
// so the two tables can't drift apart
fn apply_field(kind: FieldKind, row: &UitslagRow, region: &mut Party, global: &mut Party) {
    match kind {
        FieldKind::Seats => {
            if row.veld_waarde.is_empty() {
                return;
            }
            let seats = parse_int_default(&row.veld_waarde, 0);
            region.set_seats(seats);
            global.set_seats(seats);
        }
        FieldKind::Chosen => {
            if let Some(candidate) = find_or_create_candidate(row, region) {
                candidate.chosen = true;
            }
            if let Some(candidate) = find_or_create_candidate(row, global) {
                candidate.chosen = true;
            }
        }
        FieldKind::Votes => {
            if row.veld_waarde.is_empty() {
                return;
            }
            let votes = parse_int_default(&row.veld_waarde, 0);
            if let Some(candidate) = find_or_create_candidate(row, region) {
                candidate.record_votes(votes);
            }
            if let Some(candidate) = find_or_create_candidate(row, global) {
                candidate.record_votes(votes);
            }
        }
    }
}

// None when the candidate number doesn't parse as a non-negative integer
fn find_or_create_candidate<'a>(row: &UitslagRow, party: &'a mut Party) -> Option<&'a mut Candidate> {
    let number = parse_int_default(&row.kandidaat_nummer, -1);
    if number < 0 {
        return None;
    }
    let number = number as u32;
    let pos = match party.candidates.iter().position(|c| c.number == number) {
        Some(pos) => pos,
        None => {
            party.add_candidate(Candidate {
                number,
                initials: row.initialen.clone(),
                first_name: row.voornaam.clone(),
                prefix: row.tussenvoegsel.clone(),
                last_name: row.achternaam.clone(),
                residence: row.woonplaats.clone(),
                sex: row.geslacht.clone(),
                chosen: false,
                total_votes: 0,
            });
            party.candidates.len() - 1
        }
    };
    Some(&mut party.candidates[pos])
}
