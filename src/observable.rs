use crate::prelude::*;
use csv;
use serde::de::DeserializeOwned;
use std::io::Read;

/// The table a delimited file holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Chromosome,
    Organism,
    Gene,
    Sample,
    Effect,
    Variant,
    VariantInSample,
    Annotation,
}

impl Table {
    fn record(&self, row: &csv::StringRecord, headers: &csv::StringRecord) -> Result<Record> {
        Ok(match self {
            Self::Chromosome => Record::Chromosome(decode(row, headers)?),
            Self::Organism => Record::Organism(decode(row, headers)?),
            Self::Gene => Record::Gene(decode(row, headers)?),
            Self::Sample => Record::Sample(decode(row, headers)?),
            Self::Effect => Record::Effect(decode(row, headers)?),
            Self::Variant => Record::Variant(decode(row, headers)?),
            Self::VariantInSample => Record::VariantInSample(decode(row, headers)?),
            Self::Annotation => Record::Annotation(decode(row, headers)?),
        })
    }
}

fn decode<T: DeserializeOwned>(row: &csv::StringRecord, headers: &csv::StringRecord) -> Result<T> {
    Ok(row.deserialize(Some(headers))?)
}

/// Produces Records from u8 delimited data
///
/// `Csv` implements Iterator so it can be passed
/// directly to `MemoryStore::observe()`
pub struct Csv {
    records: csv::StringRecordsIntoIter<Box<dyn Read>>,
    headers: csv::StringRecord,
    table: Table,
}

impl Iterator for Csv {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Result<Record>> {
        let row = self.records.next()?;
        Some(
            row.map_err(Error::from)
                .and_then(|row| self.table.record(&row, &self.headers)),
        )
    }
}

pub struct CsvBuilder {
    delimiter: u8,
    headers: Option<Vec<String>>,
}

impl CsvBuilder {
    /// Construct a new Csv builder
    ///
    /// By default the first line of the data names the columns.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            headers: None,
        }
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Column names for data without a header line
    pub fn headers(&mut self, headers: &[&str]) -> &mut Self {
        self.headers = Some(headers.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn from_reader(&self, table: Table, reader: Box<dyn Read>) -> Result<Csv> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(self.headers.is_none())
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = match &self.headers {
            Some(headers) => csv::StringRecord::from(headers.clone()),
            None => rdr.headers()?.clone(),
        };

        Ok(Csv {
            records: rdr.into_records(),
            headers,
            table,
        })
    }
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::VariantStore;
    use std::error::Error;

    #[test]
    fn test_csv_with_header_loads_variants() -> Result<(), Box<dyn Error>> {
        let mut store = MemoryStore::new();
        store.observe(CsvBuilder::new().from_reader(
            Table::Variant,
            Box::new("id,chromosome_id,pos,ref,alt,filter\n1,1,241,C,T,PASS\n".as_bytes()),
        )?)?;
        assert_eq!(store.variant(1)?, Some(Variant::new(1, 1, 241, "C", "T", "PASS")));
        Ok(())
    }

    #[test]
    fn test_tab_delimited_without_header() -> Result<(), Box<dyn Error>> {
        let mut store = MemoryStore::new();
        store.observe(
            CsvBuilder::new()
                .delimiter(b'\t')
                .headers(&["id", "chromosome_id", "gene_name", "gene_start", "gene_end"])
                .from_reader(Table::Gene, Box::new("1\t1\tS\t21563\t25384\n".as_bytes()))?,
        )?;
        assert_eq!(store.genes()?[0].coordinates(), "21563-25384");
        Ok(())
    }

    #[test]
    fn test_malformed_row_is_an_error() -> Result<(), Box<dyn Error>> {
        let mut store = MemoryStore::new();
        let result = store.observe(CsvBuilder::new().from_reader(
            Table::Chromosome,
            Box::new("id,chromosome,created_at\n1,NC_045512.2,yesterday\n".as_bytes()),
        )?);
        assert!(result.is_err());
        assert!(store.is_empty());
        Ok(())
    }
}
