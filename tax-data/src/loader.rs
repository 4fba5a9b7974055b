use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{
    Bucket, CategoryWeight, JurisdictionProfile, ReferenceData, ReferenceDataError,
    ReferenceTables, TaxBracket,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised bucket '{value}' on row {row} (expected 'federal' or 'state_local')")]
    InvalidBucket { value: String, row: usize },

    #[error("cannot open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reference data: {0}")]
    Validation(#[from] ReferenceDataError),
}

impl From<csv::Error> for ReferenceLoaderError {
    fn from(err: csv::Error) -> Self {
        ReferenceLoaderError::CsvParse(err.to_string())
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, ReferenceLoaderError> {
    File::open(path).map_err(|source| ReferenceLoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Jurisdictions
// ---------------------------------------------------------------------------

/// A single record from the jurisdictions CSV file.
///
/// - `code`: Two-letter postal code (e.g., CA)
/// - `name`: Display name
/// - `income_tax_rate`, `sales_tax_rate`, `property_tax_rate`: Rates as
///   decimals (e.g., 0.0875 for 8.75%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JurisdictionRecord {
    pub code: String,
    pub name: String,
    pub income_tax_rate: Decimal,
    pub sales_tax_rate: Decimal,
    pub property_tax_rate: Decimal,
}

impl From<JurisdictionRecord> for JurisdictionProfile {
    fn from(record: JurisdictionRecord) -> Self {
        JurisdictionProfile {
            code: record.code,
            display_name: record.name,
            income_tax_rate: record.income_tax_rate,
            sales_tax_rate: record.sales_tax_rate,
            property_tax_rate: record.property_tax_rate,
        }
    }
}

/// Loader for the jurisdiction rate table. Rows keep file order, which is
/// also the order jurisdictions are listed in.
pub struct JurisdictionLoader;

impl JurisdictionLoader {
    pub fn parse<R: Read>(reader: R) -> Result<Vec<JurisdictionProfile>, ReferenceLoaderError> {
        let mut profiles = Vec::new();

        for result in csv_reader(reader).deserialize() {
            let record: JurisdictionRecord = result?;
            profiles.push(record.into());
        }

        Ok(profiles)
    }
}

// ---------------------------------------------------------------------------
// Category weights
// ---------------------------------------------------------------------------

/// A single record from the category weights CSV file.
///
/// - `bucket`: `federal` or `state_local`
/// - `category`: Spending category name
/// - `share`: Share of the bucket as a decimal (e.g., 0.13)
/// - `color`: Presentation token
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryWeightRecord {
    pub bucket: String,
    pub category: String,
    pub share: Decimal,
    pub color: String,
}

/// Both weight collections, each in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryWeights {
    pub federal: Vec<CategoryWeight>,
    pub state_local: Vec<CategoryWeight>,
}

/// Loader for the category weight tables.
///
/// One file holds both buckets; rows are split by the `bucket` column.
pub struct CategoryWeightLoader;

impl CategoryWeightLoader {
    pub fn parse<R: Read>(reader: R) -> Result<CategoryWeights, ReferenceLoaderError> {
        let mut weights = CategoryWeights::default();

        for (index, result) in csv_reader(reader).deserialize().enumerate() {
            let record: CategoryWeightRecord = result?;
            let bucket =
                Bucket::parse(&record.bucket).ok_or_else(|| ReferenceLoaderError::InvalidBucket {
                    value: record.bucket.clone(),
                    row: index + 1,
                })?;

            let weight = CategoryWeight {
                category_name: record.category,
                share_of_bucket: record.share,
                display_color: record.color,
            };
            match bucket {
                Bucket::Federal => weights.federal.push(weight),
                Bucket::StateLocal => weights.state_local.push(weight),
            }
        }

        Ok(weights)
    }
}

// ---------------------------------------------------------------------------
// Tax brackets
// ---------------------------------------------------------------------------

/// A single record from the tax brackets CSV file.
///
/// - `min_income`: The minimum income for this bracket
/// - `max_income`: The maximum income for this bracket (empty for unlimited)
/// - `base_tax`: The base tax amount for this bracket
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl From<TaxBracketRecord> for TaxBracket {
    fn from(record: TaxBracketRecord) -> Self {
        TaxBracket {
            min_income: record.min_income,
            max_income: record.max_income,
            tax_rate: record.rate,
            base_tax: record.base_tax,
        }
    }
}

/// Loader for the federal bracket schedule. Rows must be sorted by
/// `min_income`; ordering is checked when the tables are validated.
pub struct TaxBracketLoader;

impl TaxBracketLoader {
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracket>, ReferenceLoaderError> {
        let mut brackets = Vec::new();

        for result in csv_reader(reader).deserialize() {
            let record: TaxBracketRecord = result?;
            brackets.push(record.into());
        }

        Ok(brackets)
    }
}

// ---------------------------------------------------------------------------
// Assembled reference data
// ---------------------------------------------------------------------------

/// Builds [`ReferenceData`] from CSV files.
///
/// Any table without a file keeps its built-in contents. The assembled
/// tables are validated before they are returned, so a weights file that
/// covers only one bucket is rejected.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataLoader {
    pub jurisdictions: Option<PathBuf>,
    pub category_weights: Option<PathBuf>,
    pub brackets: Option<PathBuf>,
    pub default_jurisdiction: Option<String>,
}

impl ReferenceDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jurisdictions(
        mut self,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.jurisdictions = Some(path.into());
        self
    }

    pub fn category_weights(
        mut self,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.category_weights = Some(path.into());
        self
    }

    pub fn brackets(
        mut self,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.brackets = Some(path.into());
        self
    }

    pub fn default_jurisdiction(
        mut self,
        code: impl Into<String>,
    ) -> Self {
        self.default_jurisdiction = Some(code.into());
        self
    }

    /// Reads every configured file into a copy of the built-in tables.
    pub fn load_tables(&self) -> Result<ReferenceTables, ReferenceLoaderError> {
        let mut tables = ReferenceTables::embedded();

        if let Some(path) = &self.jurisdictions {
            tables.jurisdictions = JurisdictionLoader::parse(open(path)?)?;
            debug!(path = %path.display(), count = tables.jurisdictions.len(), "loaded jurisdictions");
        }

        if let Some(path) = &self.category_weights {
            let weights = CategoryWeightLoader::parse(open(path)?)?;
            debug!(
                path = %path.display(),
                federal = weights.federal.len(),
                state_local = weights.state_local.len(),
                "loaded category weights"
            );
            tables.federal_weights = weights.federal;
            tables.state_local_weights = weights.state_local;
        }

        if let Some(path) = &self.brackets {
            tables.brackets = TaxBracketLoader::parse(open(path)?)?;
            debug!(path = %path.display(), count = tables.brackets.len(), "loaded tax brackets");
        }

        if let Some(code) = &self.default_jurisdiction {
            tables.default_jurisdiction = code.clone();
        }

        Ok(tables)
    }

    /// Loads and validates the reference data.
    pub fn load(&self) -> Result<ReferenceData, ReferenceLoaderError> {
        let data = ReferenceData::new(self.load_tables()?)?;
        info!(
            jurisdictions = data.jurisdictions().len(),
            default = %data.default_jurisdiction().code,
            "reference data ready"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const BRACKETS_CSV: &str = r#"min_income,max_income,base_tax,rate
0,11000,0,0.10
11000,44725,1100,0.12
44725,95375,5147,0.22
95375,182050,16290,0.24
182050,231250,37104,0.32
231250,578125,52832,0.35
578125,,174238.25,0.37
"#;

    #[test]
    fn test_parse_single_jurisdiction() {
        let csv = "code,name,income_tax_rate,sales_tax_rate,property_tax_rate\nCA,California,0.093,0.0875,0.0075";

        let profiles = JurisdictionLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            profiles,
            vec![JurisdictionProfile::new(
                "CA",
                "California",
                dec!(0.093),
                dec!(0.0875),
                dec!(0.0075),
            )]
        );
    }

    #[test]
    fn test_parse_jurisdiction_trims_whitespace() {
        let csv = "code, name, income_tax_rate, sales_tax_rate, property_tax_rate\n TX , Texas , 0 , 0.0825 , 0.0181 ";

        let profiles = JurisdictionLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(profiles[0].code, "TX");
        assert_eq!(profiles[0].display_name, "Texas");
        assert_eq!(profiles[0].sales_tax_rate, dec!(0.0825));
    }

    #[test]
    fn test_parse_jurisdiction_missing_column() {
        let csv = "code,name,income_tax_rate\nCA,California,0.093";

        let err = JurisdictionLoader::parse(csv.as_bytes()).expect_err("Should fail for missing column");

        let ReferenceLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            msg
        );
    }

    #[test]
    fn test_parse_weights_splits_buckets() {
        let csv = "bucket,category,share,color\n\
                   federal,Defense & Military,0.6,bg-blue-500\n\
                   state_local,Public Education (K-12),1.0,bg-blue-500\n\
                   federal,Other Federal Programs,0.4,bg-gray-500";

        let weights = CategoryWeightLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(weights.federal.len(), 2);
        assert_eq!(weights.state_local.len(), 1);
        assert_eq!(weights.federal[1].category_name, "Other Federal Programs");
        assert_eq!(weights.federal[1].share_of_bucket, dec!(0.4));
    }

    #[test]
    fn test_parse_weights_invalid_bucket() {
        let csv = "bucket,category,share,color\n\
                   federal,Defense & Military,1.0,bg-blue-500\n\
                   county,Parks,1.0,bg-green-500";

        let err = CategoryWeightLoader::parse(csv.as_bytes()).expect_err("Should fail for bucket");

        match err {
            ReferenceLoaderError::InvalidBucket { ref value, row } => {
                assert_eq!(value, "county");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidBucket, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_brackets_with_unlimited_top() {
        let brackets = TaxBracketLoader::parse(BRACKETS_CSV.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(brackets.len(), 7);
        assert_eq!(brackets[0].max_income, Some(dec!(11000)));
        assert_eq!(brackets[6].max_income, None);
        assert_eq!(brackets[6].base_tax, dec!(174238.25));
        assert_eq!(brackets[6].tax_rate, dec!(0.37));
    }

    #[test]
    fn test_parse_brackets_bad_decimal() {
        let csv = "min_income,max_income,base_tax,rate\nabc,11000,0,0.10";

        let err = TaxBracketLoader::parse(csv.as_bytes()).expect_err("Should fail for invalid decimal");

        assert!(matches!(err, ReferenceLoaderError::CsvParse(_)));
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv = "min_income,max_income,base_tax,rate\n";

        let brackets = TaxBracketLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert!(brackets.is_empty());
    }

    #[test]
    fn test_parsed_brackets_match_embedded_schedule() {
        let brackets = TaxBracketLoader::parse(BRACKETS_CSV.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(brackets, ReferenceTables::embedded().brackets);
    }

    #[test]
    fn test_loader_without_files_uses_embedded_tables() {
        let data = ReferenceDataLoader::new().load().expect("embedded tables are valid");

        assert_eq!(data.jurisdictions().len(), 51);
        assert_eq!(data.default_jurisdiction().code, "CA");
    }

    #[test]
    fn test_loader_overrides_default_jurisdiction() {
        let data = ReferenceDataLoader::new()
            .default_jurisdiction("NY")
            .load()
            .expect("NY is a known jurisdiction");

        assert_eq!(data.resolve("??").code, "NY");
    }

    #[test]
    fn test_loader_rejects_unknown_default_jurisdiction() {
        let err = ReferenceDataLoader::new()
            .default_jurisdiction("XX")
            .load()
            .expect_err("XX is not in the table");

        assert!(matches!(
            err,
            ReferenceLoaderError::Validation(ReferenceDataError::MissingDefaultJurisdiction(_))
        ));
    }

    #[test]
    fn test_loader_reports_missing_file() {
        let err = ReferenceDataLoader::new()
            .brackets("/definitely/not/here.csv")
            .load()
            .expect_err("file does not exist");

        let ReferenceLoaderError::Io { path, .. } = err else {
            panic!("Expected Io error, got: {:?}", err);
        };
        assert_eq!(path, PathBuf::from("/definitely/not/here.csv"));
    }
}
