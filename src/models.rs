use crate::charts::Chart;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BreedRecord {
    // properties from the AKC dataset
    pub breed: String,
    pub description: String,
    pub temperament: String,
    pub popularity: u32,
    pub min_height: f64,
    pub max_height: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_expectancy: f64,
    pub max_expectancy: f64,
    pub group: String,
    pub grooming_frequency_value: f64,
    pub grooming_frequency_category: String,
    pub shedding_value: f64,
    pub shedding_category: String,
    pub energy_level_value: f64,
    pub energy_level_category: String,
    pub trainability_value: f64,
    pub trainability_category: String,
    pub demeanor_value: f64,
    pub demeanor_category: String,
}

impl BreedRecord {
    /// Average height in centimetres.
    pub fn average_height(&self) -> f64 {
        midpoint(self.min_height, self.max_height)
    }

    /// Average weight in kilograms.
    pub fn average_weight(&self) -> f64 {
        midpoint(self.min_weight, self.max_weight)
    }

    /// Average life expectancy in years.
    pub fn average_expectancy(&self) -> f64 {
        midpoint(self.min_expectancy, self.max_expectancy)
    }
}

fn midpoint(min: f64, max: f64) -> f64 {
    (min + max) / 2.0
}

/// The image API's folder name for a breed, e.g. `retriever-golden`.
pub type BreedId = String;

/// A random image and the breed folder it was served from.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageResult {
    pub url: String,
    pub breed_id: BreedId,
}

/// Everything the home page shows for one dog.
#[derive(Serialize, Debug)]
pub struct BreedProfile<'a> {
    pub image: ImageResult,
    /// Worker-local path the page loads the image from.
    pub image_src: String,
    pub record: &'a BreedRecord,
    pub average_expectancy: i64,
    pub average_height: i64,
    pub average_weight: i64,
    pub charts: Vec<Chart>,
}

impl<'a> BreedProfile<'a> {
    pub fn new(
        image: ImageResult,
        image_src: String,
        record: &'a BreedRecord,
        charts: Vec<Chart>,
    ) -> Self {
        BreedProfile {
            image,
            image_src,
            record,
            average_expectancy: record.average_expectancy().round() as i64,
            average_height: record.average_height().round() as i64,
            average_weight: record.average_weight().round() as i64,
            charts,
        }
    }
}
