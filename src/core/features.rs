use crate::models::{Island, PenguinMeasurements, Sex};

/// Column names produced from a single form submission, in training order
pub const QUERY_COLUMNS: [&str; 9] = [
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "island_Dream",
    "island_Torgersen",
    "sex_male",
    "year_2008",
    "year_2009",
];

/// One-row feature table with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: [(&'static str, f64); 9],
}

impl FeatureRow {
    /// One-hot encode the categorical attributes next to the measurements
    pub fn from_measurements(m: &PenguinMeasurements) -> Self {
        let values = [
            m.bill_length_mm,
            m.bill_depth_mm,
            m.flipper_length_mm,
            m.body_mass_g,
            flag(m.island == Island::Dream),
            flag(m.island == Island::Torgersen),
            flag(m.sex == Sex::Male),
            flag(m.year == "2008"),
            flag(m.year == "2009"),
        ];

        let mut row = [("", 0.0); 9];
        for (slot, (name, value)) in row.iter_mut().zip(QUERY_COLUMNS.iter().zip(values)) {
            *slot = (*name, value);
        }
        Self { values: row }
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| *value)
    }

    /// Reorder to the model's column layout
    ///
    /// Columns the row does not know are zero; row columns the model does not
    /// name are dropped.
    pub fn reindex<S: AsRef<str>>(&self, columns: &[S]) -> Vec<f64> {
        columns
            .iter()
            .map(|column| self.get(column.as_ref()).unwrap_or(0.0))
            .collect()
    }
}

#[inline]
fn flag(set: bool) -> f64 {
    if set { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(island: Island, sex: Sex, year: &str) -> PenguinMeasurements {
        PenguinMeasurements {
            bill_length_mm: 46.5,
            bill_depth_mm: 17.9,
            flipper_length_mm: 192.0,
            body_mass_g: 3500.0,
            island,
            sex,
            year: year.to_string(),
        }
    }

    #[test]
    fn test_one_hot_encoding() {
        let row = FeatureRow::from_measurements(&measurements(Island::Dream, Sex::Female, "2008"));
        assert_eq!(row.get("island_Dream"), Some(1.0));
        assert_eq!(row.get("island_Torgersen"), Some(0.0));
        assert_eq!(row.get("sex_male"), Some(0.0));
        assert_eq!(row.get("year_2008"), Some(1.0));
        assert_eq!(row.get("year_2009"), Some(0.0));
        assert_eq!(row.get("bill_length_mm"), Some(46.5));
    }

    #[test]
    fn test_baseline_categories_encode_as_zero() {
        let row = FeatureRow::from_measurements(&measurements(Island::Biscoe, Sex::Other, "2007"));
        for column in &QUERY_COLUMNS[4..] {
            assert_eq!(row.get(column), Some(0.0), "column {}", column);
        }
    }

    #[test]
    fn test_reindex_follows_model_order() {
        let row = FeatureRow::from_measurements(&measurements(Island::Torgersen, Sex::Male, "2009"));
        let columns = ["sex_male", "body_mass_g", "island_Torgersen"];
        assert_eq!(row.reindex(&columns), vec![1.0, 3500.0, 1.0]);
    }

    #[test]
    fn test_reindex_fills_unknown_columns() {
        let row = FeatureRow::from_measurements(&measurements(Island::Dream, Sex::Male, "2008"));
        let columns = vec!["island_Biscoe".to_string(), "bill_depth_mm".to_string(), "year_2010".to_string()];
        assert_eq!(row.reindex(&columns), vec![0.0, 17.9, 0.0]);
    }
}
