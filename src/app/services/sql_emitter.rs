//! SQL document emitter
//!
//! Joins the rendered value-tuples into one `INSERT … ON CONFLICT DO NOTHING`
//! statement, appends the verification `SELECT`, and writes the document to
//! the output file.

use crate::app::services::record_transformer::ValueTuple;
use crate::config::ConverterConfig;
use crate::constants::{HEADER_RULE, TARGET_COLUMNS, VERIFICATION_COLUMNS};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// The generated SQL for one run
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub sql: String,
    pub record_count: usize,
    pub source_name: String,
}

/// Renders and writes the SQL document for a fixed target table
#[derive(Debug, Clone)]
pub struct SqlEmitter {
    qualified_table: String,
}

impl SqlEmitter {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            qualified_table: config.qualified_table(),
        }
    }

    /// Render the full document
    ///
    /// Fails with [`Error::NoValidRecords`] when there is nothing to insert.
    pub fn render(&self, source_name: &str, tuples: &[ValueTuple]) -> Result<OutputDocument> {
        if tuples.is_empty() {
            return Err(Error::NoValidRecords);
        }

        let values = tuples
            .iter()
            .map(|tuple| format!("    {}", tuple))
            .collect::<Vec<_>>()
            .join(",\n");

        let mut lines = vec![
            HEADER_RULE.to_string(),
            format!("-- SQL gerado automaticamente a partir de: {}", source_name),
            format!("-- Total de serviços: {}", tuples.len()),
            HEADER_RULE.to_string(),
            String::new(),
            format!(
                "INSERT INTO {} ({})",
                self.qualified_table,
                TARGET_COLUMNS.join(", ")
            ),
            "VALUES".to_string(),
            values,
            "ON CONFLICT DO NOTHING;".to_string(),
            String::new(),
            "-- Verificar serviços inseridos".to_string(),
            // Trailing space after SELECT is part of the established output
            "SELECT ".to_string(),
        ];

        let column_count = VERIFICATION_COLUMNS.len();
        for (index, column) in VERIFICATION_COLUMNS.iter().enumerate() {
            let separator = if index + 1 < column_count { "," } else { "" };
            lines.push(format!("    {}{}", column, separator));
        }

        lines.push(format!("FROM {}", self.qualified_table));
        lines.push("ORDER BY name;".to_string());

        let mut sql = lines.join("\n");
        sql.push('\n');

        debug!(
            "Rendered SQL document: {} tuples, {} bytes",
            tuples.len(),
            sql.len()
        );

        Ok(OutputDocument {
            sql,
            record_count: tuples.len(),
            source_name: source_name.to_string(),
        })
    }

    /// Write the document, replacing any existing file
    pub fn write(&self, document: &OutputDocument, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, &document.sql)
            .map_err(|e| Error::write(output_path.display().to_string(), e))?;

        info!(
            "Wrote {} services to {}",
            document.record_count,
            output_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::record_transformer::SqlLiteral;
    use tempfile::TempDir;

    fn tuple(name: &str) -> ValueTuple {
        ValueTuple::from_literals(&[
            SqlLiteral::Text(name.to_string()),
            SqlLiteral::Decimal(10.0),
            SqlLiteral::Integer(15),
            SqlLiteral::Text(String::new()),
            SqlLiteral::Null,
        ])
    }

    fn emitter() -> SqlEmitter {
        SqlEmitter::new(&ConverterConfig::default())
    }

    #[test]
    fn test_render_full_document() {
        let document = emitter()
            .render("servicos.json", &[tuple("Corte"), tuple("Barba")])
            .unwrap();

        let expected = "\
-- ============================================
-- SQL gerado automaticamente a partir de: servicos.json
-- Total de serviços: 2
-- ============================================

INSERT INTO public.services (name, price, duration_minutes, description, responsible_professional_id)
VALUES
    ('Corte', 10.0, 15, '', NULL),
    ('Barba', 10.0, 15, '', NULL)
ON CONFLICT DO NOTHING;

-- Verificar serviços inseridos
SELECT\x20
    id,
    name,
    price,
    duration_minutes,
    description,
    created_at
FROM public.services
ORDER BY name;
";

        assert_eq!(document.sql, expected);
        assert_eq!(document.record_count, 2);
        assert_eq!(document.source_name, "servicos.json");
    }

    #[test]
    fn test_render_single_tuple_has_no_trailing_comma() {
        let document = emitter().render("a.csv", &[tuple("Corte")]).unwrap();

        assert!(document.sql.contains("    ('Corte', 10.0, 15, '', NULL)\nON CONFLICT DO NOTHING;"));
        assert!(document.sql.contains("-- Total de serviços: 1"));
    }

    #[test]
    fn test_render_empty_fails() {
        let error = emitter().render("vazio.json", &[]).unwrap_err();
        assert!(matches!(error, Error::NoValidRecords));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output-services.sql");
        std::fs::write(&output_path, "old content that is much longer than needed").unwrap();

        let emitter = emitter();
        let document = emitter.render("a.csv", &[tuple("Corte")]).unwrap();
        emitter.write(&document, &output_path).unwrap();

        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), document.sql);
    }

    #[test]
    fn test_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing-dir").join("out.sql");

        let emitter = emitter();
        let document = emitter.render("a.csv", &[tuple("Corte")]).unwrap();
        let error = emitter.write(&document, &output_path).unwrap_err();

        assert!(matches!(error, Error::Write { .. }));
    }
}
