use std::time::Duration;

use crate::deck::Dialect;

const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRpr0OtCl2zDzkpcrCv9qLn8sci1jQiqM3lxkgjfejSawbt9x6UFklo3Zt-_6acp04qFkCnO6j59KKg/pub?output=csv";

#[derive(Debug)]
pub struct Settings {
    pub source_url: String,
    pub fetch_timeout: Duration,
    pub dialect: Dialect,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_url: SHEET_CSV_URL.to_owned(),
            fetch_timeout: Duration::from_secs(30),
            dialect: Dialect::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_published_sheet() {
        let settings = Settings::default();
        assert!(settings.source_url.starts_with("https://"));
        assert!(settings.source_url.ends_with("output=csv"));
        assert_eq!(settings.dialect.delimiter, b',');
    }
}
