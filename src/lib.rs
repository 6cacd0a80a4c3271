extern crate csv;
extern crate itertools;
extern crate num_format;
extern crate colored;
extern crate toml;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod kiesraad;
pub mod defs;
pub mod fieldname;
pub mod importer;
pub mod configuration;
pub mod output;
pub mod console;
