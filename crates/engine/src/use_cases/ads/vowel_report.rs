//! Vowel report - CSV of `(ad id, vowel count in body)` pairs.
//!
//! Ads without a non-blank body are left out. There is no header row. Records
//! use the comma delimiter, CRLF terminators and double-quote escaping; the
//! terminator after the last record is dropped.

use std::sync::Arc;

use crate::infrastructure::ports::AdRepo;

use super::AdsError;

const VOWELS: &str = "aeiouAEIOU";

/// Number of ASCII vowels (either case) in `text`.
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|c| VOWELS.contains(*c)).count()
}

pub struct VowelReport {
    ads: Arc<dyn AdRepo>,
}

impl VowelReport {
    pub fn new(ads: Arc<dyn AdRepo>) -> Self {
        Self { ads }
    }

    /// Build the CSV report as bytes. Rows are sorted by ad id.
    pub async fn execute(&self) -> Result<Vec<u8>, AdsError> {
        let mut rows: Vec<(String, usize)> = self
            .ads
            .list_all()
            .await?
            .into_iter()
            .filter_map(|ad| {
                let count = count_vowels(ad.body_text()?);
                Some((ad.id, count))
            })
            .collect();
        rows.sort();

        let csv = write_csv(&rows)?;
        tracing::info!(rows = rows.len(), bytes = csv.len(), "Vowel report generated");
        Ok(csv)
    }
}

fn write_csv(rows: &[(String, usize)]) -> Result<Vec<u8>, AdsError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for (id, count) in rows {
        writer.write_record(&[id.as_str(), count.to_string().as_str()])?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| AdsError::Csv(e.error().to_string()))?;
    while matches!(bytes.last(), Some(b'\r' | b'\n')) {
        bytes.pop();
    }
    Ok(bytes)
}
