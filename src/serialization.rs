//! Writers for entities and whole responses.

use crate::config::{OutputFormat, ReportConfig};
use crate::entity::Entity;
use crate::response::Response;
use serde::Serialize;
use std::io::Write;

/// Error type for serialization operations
#[derive(Debug)]
pub enum SerializationError {
    JsonError(serde_json::Error),
    IoError(std::io::Error),
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        SerializationError::JsonError(err)
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        SerializationError::IoError(err)
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::JsonError(e) => write!(f, "JSON error: {}", e),
            SerializationError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SerializationError {}

/// NDJSON (Newline Delimited JSON) writer
///
/// Writes entities as NDJSON, one JSON object per line.
pub struct NdjsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a single entity as an NDJSON line
    pub fn write<T: Serialize>(&mut self, entity: &T) -> Result<(), SerializationError> {
        let json = serde_json::to_string(entity)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    /// Write multiple entities
    pub fn write_all<'a, T: Serialize + 'a>(
        &mut self,
        entities: impl IntoIterator<Item = &'a T>,
    ) -> Result<(), SerializationError> {
        for entity in entities {
            self.write(entity)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SerializationError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Render a response in the configured format.
///
/// The response is sorted first. `json` writes `{"header": .., "<kind>": [..]}`,
/// `ndjson` writes the header line (when enabled) followed by one line per
/// entity, `text` writes the structured dump.
pub fn write_response<T: Entity, W: Write>(
    response: &mut Response<T>,
    config: &ReportConfig,
    mut writer: W,
) -> Result<(), SerializationError> {
    match config.format {
        OutputFormat::Text => {
            let text = response.render_text(config);
            writer.write_all(text.as_bytes())?;
        }
        OutputFormat::Json => {
            response.sort();
            let selected = config.select(response.entities().iter());
            let mut document = serde_json::Map::new();
            if config.include_header {
                document.insert("header".to_string(), serde_json::to_value(response.header())?);
            }
            document.insert(T::NAME.to_string(), serde_json::to_value(&selected)?);
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
        OutputFormat::Ndjson => {
            response.sort();
            let mut ndjson = NdjsonWriter::new(&mut writer);
            if config.include_header {
                ndjson.write(response.header())?;
            }
            ndjson.write_all(config.select(response.entities().iter()))?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CategoryEntity;

    fn sample() -> Response<CategoryEntity> {
        let mut response = Response::new();
        response.header_mut().set_status_str(Some("OK"));
        response.add(CategoryEntity::with("science_technology", 0.4));
        response.add(CategoryEntity::with("business", 0.9));
        response
    }

    #[test]
    fn test_ndjson_writer() {
        let mut buf = Vec::new();
        let mut writer = NdjsonWriter::new(&mut buf);

        writer.write(&CategoryEntity::with("a", 0.1)).unwrap();
        writer.write(&CategoryEntity::with("b", 0.2)).unwrap();
        writer.flush().unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"a\""));
        assert!(lines[1].contains("\"b\""));
    }

    #[test]
    fn test_write_response_ndjson_is_sorted() {
        let mut response = sample();
        let config = ReportConfig {
            format: OutputFormat::Ndjson,
            ..ReportConfig::default()
        };
        let mut buf = Vec::new();
        write_response(&mut response, &config, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"OK\""));
        assert!(lines[1].contains("business"));
        assert!(lines[2].contains("science_technology"));
    }

    #[test]
    fn test_write_response_json() {
        let mut response = sample();
        let config = ReportConfig {
            format: OutputFormat::Json,
            limit: Some(1),
            include_header: false,
            ..ReportConfig::default()
        };
        let mut buf = Vec::new();
        write_response(&mut response, &config, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("header").is_none());
        let categories = value["category"].as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["category"], "business");
    }

    #[test]
    fn test_write_response_text() {
        let mut response = sample();
        let mut buf = Vec::new();
        write_response(&mut response, &ReportConfig::default(), &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("status: OK"));
        assert!(output.find("business").unwrap() < output.find("science_technology").unwrap());
    }
}
