//! Display labels for coded record attributes.
//!
//! Each resolver is a pure function of the code and a fixed table, with a
//! deterministic fallback for codes the table does not know.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// YouTube category id -> display name.
static CATEGORY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1", "Film & Animation"),
        ("2", "Autos & Vehicles"),
        ("10", "Music"),
        ("15", "Pets & Animals"),
        ("17", "Sports"),
        ("19", "Travel & Events"),
        ("20", "Gaming"),
        ("22", "People & Blogs"),
        ("23", "Comedy"),
        ("24", "Entertainment"),
        ("25", "News & Politics"),
        ("26", "Howto & Style"),
        ("27", "Education"),
        ("28", "Science & Technology"),
    ])
});

/// ISO 3166-1 alpha-2 region -> display name.
static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("IN", "India"),
        ("US", "United States"),
        ("GB", "United Kingdom"),
        ("CA", "Canada"),
        ("AU", "Australia"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("JP", "Japan"),
        ("BR", "Brazil"),
        ("KR", "South Korea"),
        ("MX", "Mexico"),
        ("ES", "Spain"),
        ("IT", "Italy"),
        ("RU", "Russia"),
    ])
});

/// ISO 639-1 language -> display name.
static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "English"),
        ("hi", "Hindi"),
        ("bn", "Bengali"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("mr", "Marathi"),
        ("gu", "Gujarati"),
        ("kn", "Kannada"),
        ("ml", "Malayalam"),
        ("pa", "Punjabi"),
        ("es", "Spanish"),
        ("pt", "Portuguese"),
        ("fr", "French"),
        ("de", "German"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh", "Chinese"),
        ("zh-cn", "Chinese (Simplified)"),
        ("zh-tw", "Chinese (Traditional)"),
        ("ar", "Arabic"),
        ("ru", "Russian"),
        ("it", "Italian"),
        ("nl", "Dutch"),
        ("pl", "Polish"),
        ("tr", "Turkish"),
        ("vi", "Vietnamese"),
        ("th", "Thai"),
        ("id", "Indonesian"),
        ("unknown", "Unknown"),
    ])
});

/// Country display name. Unknown-but-present codes display as themselves;
/// empty/absent codes display as "Unknown".
pub fn country_name(code: Option<&str>) -> String {
    let code = code.map(|c| c.trim().to_uppercase()).unwrap_or_default();
    match COUNTRY_NAMES.get(code.as_str()) {
        Some(name) => name.to_string(),
        None if code.is_empty() => "Unknown".to_string(),
        None => code,
    }
}

/// Language display name. Unknown-but-present codes display uppercased;
/// empty/absent codes display as "Unknown".
pub fn language_name(code: Option<&str>) -> String {
    let code = code.map(|c| c.trim().to_lowercase()).unwrap_or_default();
    match LANGUAGE_NAMES.get(code.as_str()) {
        Some(name) => name.to_string(),
        None if code.is_empty() => "Unknown".to_string(),
        None => code.to_uppercase(),
    }
}

/// Category display name. Unknown-but-present ids display as
/// "Category {id}"; empty/absent ids display as "Unknown".
pub fn category_name(id: Option<&str>) -> String {
    let id = id.map(str::trim).unwrap_or_default();
    match CATEGORY_NAMES.get(id) {
        Some(name) => name.to_string(),
        None if id.is_empty() => "Unknown".to_string(),
        None => format!("Category {}", id),
    }
}
