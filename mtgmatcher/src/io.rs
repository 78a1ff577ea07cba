use crate::error::Result as MatchResult;
use crate::query::CardQuery;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io::Write;

/// One row of a query CSV file
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub variation: String,
    #[serde(default)]
    pub foil: String,
}

impl QueryRecord {
    pub fn to_query(&self) -> CardQuery {
        let mut query = CardQuery::new(self.name.trim())
            .with_edition(self.edition.trim())
            .with_variation(self.variation.trim())
            .with_foil(parse_foil(&self.foil));
        if !self.id.trim().is_empty() {
            query.id = Some(self.id.trim().to_string());
        }
        query
    }
}

/// Foil column values meaning "foil"
pub fn parse_foil(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "foil"
    )
}

/// One row of the result CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub name: String,
    pub edition: String,
    pub variation: String,
    pub foil: bool,
    pub id: String,
    pub error: String,
    /// Aliasing candidates, separated by `;`
    pub candidates: String,
}

impl ResultRecord {
    pub fn new(query: &CardQuery, result: &MatchResult<String>) -> Self {
        let (id, error, candidates) = match result {
            Ok(id) => (id.clone(), String::new(), String::new()),
            Err(e) => (
                String::new(),
                e.to_string(),
                e.probe().map(|ids| ids.join(";")).unwrap_or_default(),
            ),
        };
        Self {
            name: query.name.clone(),
            edition: query.edition.clone(),
            variation: query.variation.clone(),
            foil: query.foil,
            id,
            error,
            candidates,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.id.is_empty()
    }
}

pub fn read_queries(path: &str) -> Result<Vec<QueryRecord>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut queries = Vec::new();

    for result in rdr.deserialize() {
        let record: QueryRecord = result?;
        if record.name.trim().is_empty() && record.id.trim().is_empty() {
            log::warn!("Skipping query row without name or id");
            continue;
        }
        queries.push(record);
    }

    Ok(queries)
}

pub fn write_results<W: Write>(writer: W, results: &[ResultRecord]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in results {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
