/*
 * core types
 */

// index of a country in ElectionData::countries
// (there is only ever one in practice, "Nederland")
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub struct CountryIndex(pub usize);

// index of a province in ElectionData::provinces
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub struct ProvinceIndex(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Province {
    pub name: String,
    pub code: String,
    pub country: CountryIndex,
}

// a municipality whose parent (or grandparent) region code didn't
// resolve to a known province is kept anyway, detached
#[derive(Debug, Clone, Serialize)]
pub struct Municipality {
    pub name: String,
    pub code: String,
    pub province: Option<ProvinceIndex>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub number: u32,
    pub initials: String,
    pub first_name: String,
    pub prefix: String,
    pub last_name: String,
    pub residence: String,
    pub sex: String,
    pub chosen: bool,
    pub total_votes: i64,
}

impl Candidate {
    // e.g. "D. (Dilan) Yeşilgöz", with the name prefix if present
    pub fn full_name(&self) -> String {
        let mut full = format!("{} ({})", self.initials, self.first_name);
        if !self.prefix.is_empty() {
            full.push(' ');
            full.push_str(&self.prefix);
        }
        full.push(' ');
        full.push_str(&self.last_name);
        full.trim().to_string()
    }

    // the same candidate's total may appear on several rows; only the
    // maximum ever observed is authoritative
    pub fn record_votes(&mut self, votes: i64) {
        if votes > self.total_votes {
            self.total_votes = votes;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Party {
    pub list_number: i64,
    pub name: String,
    pub seats: i64,
    pub candidates: Vec<Candidate>,
}

impl Party {
    pub fn new(list_number: i64, name: &str) -> Party {
        Party {
            list_number,
            name: name.to_string(),
            seats: 0,
            candidates: Vec::new(),
        }
    }

    pub fn set_seats(&mut self, seats: i64) {
        self.seats = seats;
    }

    // appends unconditionally; the importer is responsible for
    // checking candidate numbers beforehand
    pub fn add_candidate(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn candidate(&self, number: u32) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.number == number)
    }
}

// the closed set of per-party field types we aggregate; everything
// else in the veldtype column is ignored
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    Seats,
    Chosen,
    Votes,
}

impl FieldKind {
    pub fn parse(veld_type: &str) -> Option<FieldKind> {
        match veld_type {
            "LijstAantalZetels" => Some(FieldKind::Seats),
            "KandidaatGekozen" => Some(FieldKind::Chosen),
            "KandidaatAantalStemmen" => Some(FieldKind::Votes),
            _ => None,
        }
    }
}

// label -> value table which iterates in first-insertion order;
// setting an existing label overwrites the value in place
#[derive(Debug, Clone, Serialize)]
pub struct CountryStats {
    entries: Vec<(String, i64)>,
}

impl CountryStats {
    pub fn new() -> CountryStats {
        CountryStats {
            entries: Vec::new(),
        }
    }

    pub fn set(&mut self, label: String, value: i64) {
        match self.entries.iter_mut().find(|e| e.0 == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.0 == label)
            .map(|e| e.1)
    }

    pub fn iter(&self) -> ::std::slice::Iter<(String, i64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(number: u32, initials: &str, first: &str, prefix: &str, last: &str) -> Candidate {
        Candidate {
            number,
            initials: initials.to_string(),
            first_name: first.to_string(),
            prefix: prefix.to_string(),
            last_name: last.to_string(),
            residence: String::new(),
            sex: String::new(),
            chosen: false,
            total_votes: 0,
        }
    }

    #[test]
    fn full_name_without_prefix() {
        let c = candidate(5, "D.", "Dilan", "", "Yeşilgöz");
        assert_eq!(c.full_name(), "D. (Dilan) Yeşilgöz");
    }

    #[test]
    fn full_name_with_prefix() {
        let c = candidate(1, "G.", "Geert", "van", "Oever");
        assert_eq!(c.full_name(), "G. (Geert) van Oever");
    }

    #[test]
    fn record_votes_keeps_maximum() {
        let mut c = candidate(1, "A.", "Aad", "", "Appel");
        c.record_votes(100);
        c.record_votes(40);
        assert_eq!(c.total_votes, 100);
        c.record_votes(250);
        assert_eq!(c.total_votes, 250);
    }

    #[test]
    fn field_kind_parses_known_types_only() {
        assert_eq!(FieldKind::parse("LijstAantalZetels"), Some(FieldKind::Seats));
        assert_eq!(FieldKind::parse("KandidaatGekozen"), Some(FieldKind::Chosen));
        assert_eq!(
            FieldKind::parse("KandidaatAantalStemmen"),
            Some(FieldKind::Votes)
        );
        assert_eq!(FieldKind::parse("Kiesgerechtigden"), None);
        assert_eq!(FieldKind::parse(""), None);
    }

    #[test]
    fn country_stats_preserve_insertion_order_and_overwrite() {
        let mut stats = CountryStats::new();
        stats.set("Opkomst".to_string(), 1);
        stats.set("Kiesgerechtigden".to_string(), 2);
        stats.set("Opkomst".to_string(), 3);
        let labels: Vec<&str> = stats.iter().map(|e| e.0.as_str()).collect();
        assert_eq!(labels, vec!["Opkomst", "Kiesgerechtigden"]);
        assert_eq!(stats.get("Opkomst"), Some(3));
        assert_eq!(stats.get("Kiesgerechtigden"), Some(2));
        assert_eq!(stats.get("AantalGeldigeStemmen"), None);
    }
}
