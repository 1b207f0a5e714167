//! In-memory transcript table.
//!
//! Loads a comma-separated transcript, keeps every original column for
//! pass-through, and writes the annotated table back out with a leading
//! row-index column and a JSON `insight` column appended.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::insight::Insight;

pub const DLG_ID_COLUMN: &str = "dlg_id";
pub const ROLE_COLUMN: &str = "role";
pub const TEXT_COLUMN: &str = "text";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serializing insight: {0}")]
    Json(#[from] serde_json::Error),
}

/// One utterance row. `fields` holds the original record verbatim;
/// `dlg_id`/`role`/`text` are the resolved required columns.
#[derive(Debug, Clone)]
pub struct Row {
    pub index: usize,
    pub dlg_id: String,
    pub role: String,
    pub text: String,
    pub fields: Vec<String>,
    pub insight: Insight,
}

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn read_csv(path: &Path) -> Result<Table, TableError> {
        let file = std::fs::File::open(path)?;
        Self::read_from(file)
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Table, TableError> {
        let mut rdr = csv::ReaderBuilder::new().delimiter(b',').from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let col = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(TableError::MissingColumn(name))
        };
        let dlg_col = col(DLG_ID_COLUMN)?;
        let role_col = col(ROLE_COLUMN)?;
        let text_col = col(TEXT_COLUMN)?;

        let mut rows = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            rows.push(Row {
                index,
                dlg_id: fields.get(dlg_col).cloned().unwrap_or_default(),
                role: fields.get(role_col).cloned().unwrap_or_default(),
                text: fields.get(text_col).cloned().unwrap_or_default(),
                fields,
                insight: Insight::default(),
            });
        }
        Ok(Table { headers, rows })
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), TableError> {
        let mut wtr = csv::WriterBuilder::new().delimiter(b',').from_path(path)?;
        let mut header = vec![String::new()];
        header.extend(self.headers.iter().cloned());
        header.push("insight".to_string());
        wtr.write_record(&header)?;
        for row in &self.rows {
            let mut record = vec![row.index.to_string()];
            record.extend(row.fields.iter().cloned());
            record.push(serde_json::to_string(&row.insight)?);
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
dlg_id,line_n,role,text
0,0,manager,Здравствуйте
0,1,client,привет
1,0,manager,до свидания
";

    #[test]
    fn reads_required_and_extra_columns() {
        let table = Table::read_from(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["dlg_id", "line_n", "role", "text"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].dlg_id, "0");
        assert_eq!(table.rows[0].role, "manager");
        assert_eq!(table.rows[0].text, "Здравствуйте");
        assert_eq!(table.rows[2].fields[1], "0");
        assert!(table.rows.iter().all(|r| r.insight.is_empty()));
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = Table::read_from("dlg_id,text\n0,привет\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(ROLE_COLUMN)));
    }

    #[test]
    fn write_appends_index_and_insight_columns() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let mut table = Table::read_from(SAMPLE.as_bytes()).unwrap();
        table.rows[0].insight.greeting = Some(true);
        table.write_csv(&out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some(",dlg_id,line_n,role,text,insight"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("0,0,0,manager,"));
        assert!(first.contains(r#"{""greeting"":true}"#));
    }
}
