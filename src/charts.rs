//! Comparison charts placing one breed among the whole dataset.

use crate::breeds::BreedTable;
use crate::models::BreedRecord;
use serde::Serialize;

/// Shedding categories, least to most.
pub const SHEDDING_ORDER: [&str; 5] = ["Infrequent", "Occasional", "Seasonal", "Regularly", "Frequent"];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub unit: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    /// Height relative to the tallest bar in the chart.
    pub percent: u32,
    pub is_current: bool,
    /// Breed name on the bar holding the current breed.
    pub marker: Option<String>,
}

/// Height, weight, life expectancy and shedding, in that order.
pub fn comparison_charts(table: &BreedTable, current: &BreedRecord, bins: usize) -> Vec<Chart> {
    let records = table.records();
    let numeric = |f: fn(&BreedRecord) -> f64| -> Vec<Bar> {
        let values: Vec<f64> = records.iter().map(f).collect();
        mark(histogram(&values, f(current), bins), &current.breed)
    };
    let shedding: Vec<&str> = records
        .iter()
        .map(|r| r.shedding_category.as_str())
        .collect();

    vec![
        Chart {
            title: "Height",
            unit: "cm",
            bars: numeric(BreedRecord::average_height),
        },
        Chart {
            title: "Weight",
            unit: "kg",
            bars: numeric(BreedRecord::average_weight),
        },
        Chart {
            title: "Expectancy",
            unit: "years",
            bars: numeric(BreedRecord::average_expectancy),
        },
        Chart {
            title: "Shedding",
            unit: "",
            bars: mark(
                category_counts(&shedding, &SHEDDING_ORDER, &current.shedding_category),
                &current.breed,
            ),
        },
    ]
}

/// Equal-width bins between the smallest and largest value. The largest value
/// lands in the last bin; a dataset with no spread gets a single bin.
pub fn histogram(values: &[f64], current: f64, bins: usize) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let bins = if max - min <= std::f64::EPSILON { 1 } else { bins.max(1) };
    let width = (max - min) / bins as f64;

    let bin_of = |v: f64| -> usize {
        if bins == 1 || v <= min {
            return 0;
        }
        (((v - min) / width).floor() as usize).min(bins - 1)
    };

    let mut counts = vec![0usize; bins];
    for v in values {
        counts[bin_of(*v)] += 1;
    }
    let current_bin = bin_of(current);

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = min + width * i as f64;
            let hi = if i + 1 == bins { max } else { lo + width };
            Bar {
                label: format!("{:.0}-{:.0}", lo, hi),
                count,
                percent: 0,
                is_current: i == current_bin,
                marker: None,
            }
        })
        .collect()
}

/// Counts per category in `order`. Categories outside `order` follow it in
/// first-seen order.
pub fn category_counts(values: &[&str], order: &[&str], current: &str) -> Vec<Bar> {
    let mut labels: Vec<String> = order.iter().map(|s| (*s).to_owned()).collect();
    for v in values.iter().chain(std::iter::once(&current)) {
        if !labels.iter().any(|l| l == v) {
            labels.push((*v).to_owned());
        }
    }

    labels
        .into_iter()
        .map(|label| Bar {
            count: values.iter().filter(|v| **v == label).count(),
            percent: 0,
            is_current: label == current,
            marker: None,
            label,
        })
        .collect()
}

// Fills in bar percentages and names the current breed on its bar.
fn mark(mut bars: Vec<Bar>, breed: &str) -> Vec<Bar> {
    let tallest = bars.iter().map(|b| b.count).max().unwrap_or(0);
    for bar in bars.iter_mut() {
        bar.percent = if tallest == 0 {
            0
        } else {
            (bar.count * 100 / tallest) as u32
        };
        if bar.is_current {
            bar.marker = Some(breed.to_owned());
        }
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::breed_table;

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [1.0, 2.0, 3.0, 4.0, 10.0];
        let bars = histogram(&values, 4.0, 3);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars.iter().map(|b| b.count).sum::<usize>(), values.len());
        // 1..4, 4..7, 7..10; the maximum falls in the last bin
        assert_eq!(bars[0].count, 3);
        assert_eq!(bars[1].count, 1);
        assert_eq!(bars[2].count, 1);
        assert!(bars[1].is_current);
        assert_eq!(bars.iter().filter(|b| b.is_current).count(), 1);
    }

    #[test]
    fn histogram_without_spread_is_one_bin() {
        let bars = histogram(&[5.0, 5.0, 5.0], 5.0, 10);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].count, 3);
        assert!(bars[0].is_current);
        assert!(histogram(&[], 1.0, 4).is_empty());
    }

    #[test]
    fn categories_keep_the_fixed_order() {
        let values = ["Seasonal", "Frequent", "Seasonal", "Infrequent"];
        let bars = category_counts(&values, &SHEDDING_ORDER, "Seasonal");
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, SHEDDING_ORDER.to_vec());
        assert_eq!(bars[2].count, 2);
        assert_eq!(bars[1].count, 0);
        assert!(bars[2].is_current);
    }

    #[test]
    fn unknown_categories_are_appended() {
        let bars = category_counts(&["Seasonal", "Never"], &SHEDDING_ORDER, "Never");
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[5].label, "Never");
        assert!(bars[5].is_current);
    }

    #[test]
    fn comparison_charts_mark_the_current_breed() {
        let table = breed_table().unwrap();
        let golden = table.find_by_name("Golden Retriever").unwrap();
        let charts = comparison_charts(table, golden, 10);

        let titles: Vec<&str> = charts.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Height", "Weight", "Expectancy", "Shedding"]);
        for chart in &charts {
            assert_eq!(
                chart.bars.iter().map(|b| b.count).sum::<usize>(),
                table.len(),
                "{}",
                chart.title
            );
            let marked: Vec<&Bar> = chart.bars.iter().filter(|b| b.is_current).collect();
            assert_eq!(marked.len(), 1, "{}", chart.title);
            assert_eq!(marked[0].marker.as_ref().unwrap(), "Golden Retriever");
            assert!(marked[0].count > 0);
            assert!(chart.bars.iter().any(|b| b.percent == 100));
        }
    }
}
