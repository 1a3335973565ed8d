//! Localization lookup

use std::collections::HashMap;

/// Translates localization keys into display text
pub trait Localizer {
    /// Text for `key`, or the key itself when there is no translation
    fn translate(&self, key: &str) -> String;
}

impl Localizer for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_falls_back() {
        let mut table = HashMap::new();
        table.insert("mod.greeting".to_string(), "Hello".to_string());

        assert_eq!(table.translate("mod.greeting"), "Hello");
        assert_eq!(table.translate("mod.farewell"), "mod.farewell");
    }
}
