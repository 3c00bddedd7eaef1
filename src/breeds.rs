//! The bundled AKC breed dataset and the lookup from image-API folder names
//! into it.

use crate::error::{AppError, AppResult};
use crate::models::BreedRecord;
use lazy_static::lazy_static;
use std::collections::HashSet;

static DATASET: &str = include_str!("../data/akc-breeds.json");

/// Folder names the image API spells differently from the AKC. Checked before
/// any name matching.
static BREED_ALIASES: &[(&str, &str)] = &[
    ("australian-shepherd", "Australian Shepherd"),
    ("brabancon", "Brussels Griffon"),
    ("bulldog-boston", "Boston Terrier"),
    ("bulldog-english", "Bulldog"),
    ("bullterrier-staffordshire", "Staffordshire Bull Terrier"),
    ("cattledog-australian", "Australian Cattle Dog"),
    ("coonhound", "Black and Tan Coonhound"),
    ("corgi-cardigan", "Cardigan Welsh Corgi"),
    ("cotondetulear", "Coton de Tulear"),
    ("danish-swedish", "Danish-Swedish Farmdog"),
    ("finnish-lapphund", "Finnish Lapphund"),
    ("germanshepherd", "German Shepherd Dog"),
    ("groenendael", "Belgian Sheepdog"),
    ("hound-blood", "Bloodhound"),
    ("hound-english", "English Foxhound"),
    ("hound-walker", "Treeing Walker Coonhound"),
    ("mastiff-bull", "Bullmastiff"),
    ("mastiff-english", "Mastiff"),
    ("mexicanhairless", "Xoloitzcuintli"),
    ("pekinese", "Pekingese"),
    ("pointer-german", "German Shorthaired Pointer"),
    ("poodle-miniature", "Poodle (Miniature)"),
    ("poodle-standard", "Poodle (Standard)"),
    ("poodle-toy", "Poodle (Toy)"),
    ("retriever-chesapeake", "Chesapeake Bay Retriever"),
    ("retriever-curly", "Curly-Coated Retriever"),
    ("retriever-flatcoated", "Flat-Coated Retriever"),
    ("sharpei", "Chinese Shar-Pei"),
    ("shihtzu", "Shih Tzu"),
    ("spaniel-blenheim", "Cavalier King Charles Spaniel"),
    ("spaniel-brittany", "Brittany"),
    ("spaniel-irish", "Irish Water Spaniel"),
    ("spaniel-japanese", "Japanese Chin"),
    ("spaniel-welsh", "Welsh Springer Spaniel"),
    ("stbernard", "St. Bernard"),
    ("terrier-american", "American Staffordshire Terrier"),
    ("terrier-dandie", "Dandie Dinmont Terrier"),
    // plain "fox terrier" is contained in three AKC names
    ("terrier-fox", "Wire Fox Terrier"),
    ("terrier-kerryblue", "Kerry Blue Terrier"),
    ("terrier-westhighland", "West Highland White Terrier"),
    ("waterdog-spanish", "Spanish Water Dog"),
];

lazy_static! {
    static ref BREEDS: Result<BreedTable, String> = BreedTable::load(DATASET);
}

/// The bundled dataset, parsed on first use.
pub fn breed_table() -> AppResult<&'static BreedTable> {
    match &*BREEDS {
        Ok(table) => Ok(table),
        Err(message) => Err(AppError::Dataset {
            message: message.clone(),
        }),
    }
}

#[derive(Debug)]
pub struct BreedTable {
    records: Vec<BreedRecord>,
    // normalized[i] is the normalized name of records[i]
    normalized: Vec<String>,
}

impl BreedTable {
    pub fn from_json(json: &str) -> AppResult<BreedTable> {
        BreedTable::load(json).map_err(|message| AppError::Dataset { message })
    }

    fn load(json: &str) -> Result<BreedTable, String> {
        let records: Vec<BreedRecord> = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(records.len());
        for record in &records {
            validate(record)?;
            let name = normalize_name(&record.breed);
            if !seen.insert(name.clone()) {
                return Err(format!("duplicate breed '{}'", record.breed));
            }
            normalized.push(name);
        }
        let table = BreedTable {
            records,
            normalized,
        };
        if table.is_empty() {
            return Err("dataset has no records".to_owned());
        }
        Ok(table)
    }

    pub fn records(&self) -> &[BreedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact match on the normalized breed name.
    pub fn find_by_name(&self, name: &str) -> Option<&BreedRecord> {
        let wanted = normalize_name(name);
        self.normalized
            .iter()
            .position(|n| *n == wanted)
            .map(|idx| &self.records[idx])
    }

    /// Resolves an image-API folder name to a record: alias table first, then
    /// an exact name match, then the first record whose name contains the query.
    pub fn lookup(&self, identifier: &str) -> AppResult<&BreedRecord> {
        let not_found = || AppError::Lookup {
            identifier: identifier.to_owned(),
        };

        if let Some(name) = alias_for(identifier) {
            return self.find_by_name(name).ok_or_else(not_found);
        }

        let query = normalize_name(&query_name(identifier));
        if query.is_empty() {
            return Err(not_found());
        }
        self.normalized
            .iter()
            .position(|n| *n == query)
            .or_else(|| self.normalized.iter().position(|n| n.contains(&query)))
            .map(|idx| &self.records[idx])
            .ok_or_else(not_found)
    }
}

fn alias_for(identifier: &str) -> Option<&'static str> {
    BREED_ALIASES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(identifier))
        .map(|(_, name)| *name)
}

/// `retriever-golden` -> `golden retriever`: the API nests sub-breeds after
/// the breed, the AKC names them first.
pub fn query_name(identifier: &str) -> String {
    identifier
        .split('-')
        .rev()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, punctuation as spaces, single spaces between words.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || "-_.()".contains(c))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn validate(record: &BreedRecord) -> Result<(), String> {
    let text_fields = [
        ("breed", &record.breed),
        ("description", &record.description),
        ("temperament", &record.temperament),
        ("group", &record.group),
        ("grooming_frequency_category", &record.grooming_frequency_category),
        ("shedding_category", &record.shedding_category),
        ("energy_level_category", &record.energy_level_category),
        ("trainability_category", &record.trainability_category),
        ("demeanor_category", &record.demeanor_category),
    ];
    for (field, value) in text_fields.iter() {
        if value.trim().is_empty() {
            return Err(format!("'{}' has an empty {}", record.breed, field));
        }
    }

    let ranges = [
        ("height", record.min_height, record.max_height),
        ("weight", record.min_weight, record.max_weight),
        ("expectancy", record.min_expectancy, record.max_expectancy),
    ];
    for (field, min, max) in ranges.iter() {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(format!(
                "'{}' has an invalid {} range {}..{}",
                record.breed, field, min, max
            ));
        }
    }
    Ok(())
}
