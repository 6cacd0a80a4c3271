pub mod uitslag;
