use std::fs::File;
use std::io::Read;
use std::path::Path;

use toml;

#[derive(Debug, Deserialize)]
struct Config {
    description: String,
    format: String,
    dataset: String,
}

fn config_contents(input_file: &str) -> Result<Config, String> {
    let mut fd = match File::open(input_file) {
        Ok(fd) => fd,
        Err(e) => return Err(format!("unable to read {}: {}", input_file, e)),
    };

    let mut buf = String::new();
    if let Err(e) = fd.read_to_string(&mut buf) {
        return Err(format!("unable to read {}: {}", input_file, e));
    }

    let config: Config = match toml::from_str(&buf) {
        Ok(c) => c,
        Err(e) => return Err(format!("unable to parse {}: {}", input_file, e)),
    };

    Ok(config)
}

// a single import to run: which results file, and how to describe it
#[derive(Debug, Clone)]
pub struct ImportTask {
    pub slug: String,
    pub description: String,
    pub format: String,
    pub dataset: String,
}

pub fn read_config(input_file: &str) -> Result<ImportTask, String> {
    let config = config_contents(input_file)?;
    let path = Path::new(input_file);
    // the dataset path is relative to the config file's directory
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let dataset = dir.join(&config.dataset).to_string_lossy().to_string();
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "uitslag".to_string());
    Ok(ImportTask {
        slug,
        description: config.description,
        format: config.format,
        dataset,
    })
}

#[cfg(test)]
mod tests {
    extern crate tempfile;

    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_task_and_resolves_the_dataset_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tk2023.toml");
        let mut fd = File::create(&config_path).unwrap();
        write!(
            fd,
            "description = \"Tweede Kamer 2023\"\nformat = \"kiesraad-csv\"\ndataset = \"TK2023_uitslag.csv\"\n"
        )
        .unwrap();

        let task = read_config(config_path.to_str().unwrap()).unwrap();
        assert_eq!(task.slug, "tk2023");
        assert_eq!(task.description, "Tweede Kamer 2023");
        assert_eq!(task.format, "kiesraad-csv");
        assert_eq!(
            task.dataset,
            dir.path().join("TK2023_uitslag.csv").to_string_lossy()
        );
    }

    #[test]
    fn missing_config_is_an_error() {
        let err = read_config("no/such/task.toml").unwrap_err();
        assert!(err.contains("unable to read"));
    }

    #[test]
    fn unparseable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("broken.toml");
        let mut fd = File::create(&config_path).unwrap();
        write!(fd, "description = \n").unwrap();
        let err = read_config(config_path.to_str().unwrap()).unwrap_err();
        assert!(err.contains("unable to parse"));
    }
}
