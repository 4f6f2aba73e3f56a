use camino::Utf8PathBuf as PathBuf;
use tracing::{info, instrument};

use crate::error::GenerateError;
use crate::source::Source;
use crate::table::{extract, Table};
use crate::util::iso8601_now;
use crate::writer::{render, write_table, Format};

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub format: Format,
    /// Tables to generate, in order
    pub tables: Vec<Table>,
}

impl GeneratorConfig {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            format: Format::default(),
            tables: Table::ALL.to_vec(),
        }
    }

    pub fn file_name(&self, table: Table) -> String {
        format!("{}.{}", table.file_stem(), self.format.extension())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct GeneratedTable {
    pub table: Table,
    pub version: String,
    pub num_ranges: usize,
    pub path: PathBuf,
}

pub struct Generator<S> {
    source: S,
    config: GeneratorConfig,
}

impl<S: Source> Generator<S> {
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// Generates the configured tables one after another. Stops at the first
    /// failure; files written before it are left in place.
    pub async fn generate(&self) -> Result<Vec<GeneratedTable>, GenerateError> {
        let mut generated = Vec::with_capacity(self.config.tables.len());
        for &table in &self.config.tables {
            generated.push(self.generate_table(table).await?);
        }
        Ok(generated)
    }

    #[instrument(skip(self), fields(table = %table))]
    pub async fn generate_table(&self, table: Table) -> Result<GeneratedTable, GenerateError> {
        let content = self.source.fetch(table.source_path()).await?;
        let extracted = extract(table, &content)?;
        let rendered = render(
            self.config.format,
            &extracted.version,
            &iso8601_now(),
            &extracted.ranges,
        )?;
        let path = write_table(
            &self.config.out_dir,
            &self.config.file_name(table),
            &rendered,
        )
        .await?;
        info!(
            "Wrote {} {} ranges of Unicode {} to '{}'",
            extracted.ranges.len(),
            table,
            extracted.version,
            path
        );
        Ok(GeneratedTable {
            table,
            version: extracted.version,
            num_ranges: extracted.ranges.len(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::GenerateError;
    use crate::source::{tests::TestSource, LocalSource};
    use crate::table::Table;
    use crate::util::tests::{setup_tracing, temp_dir, tests_data};
    use crate::writer::Format;

    use super::{GeneratedTable, Generator, GeneratorConfig};

    const WIDE: &str = "# EastAsianWidth-15.1.0.txt\n\
                        3000           ; F  # Zs         IDEOGRAPHIC SPACE\n\
                        1100..115F     ; W  # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER\n";
    const ZERO: &str = "# DerivedGeneralCategory-15.1.0.txt\n\
                        0300..036F    ; Mn # [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X\n";

    #[tokio::test]
    async fn test_generate() {
        setup_tracing().unwrap();
        let dir = temp_dir("generate");
        let source = TestSource::new([
            ("EastAsianWidth.txt", WIDE),
            ("extracted/DerivedGeneralCategory.txt", ZERO),
        ]);
        let generator = Generator::new(source, GeneratorConfig::new(dir.clone()));
        let generated = generator.generate().await.unwrap();
        assert_eq!(
            generated,
            vec![
                GeneratedTable {
                    table: Table::Wide,
                    version: "15.1.0".to_owned(),
                    num_ranges: 2,
                    path: dir.join("wcswidth_table_wide.php"),
                },
                GeneratedTable {
                    table: Table::Zero,
                    version: "15.1.0".to_owned(),
                    num_ranges: 1,
                    path: dir.join("wcswidth_table_zero.php"),
                },
            ]
        );

        let wide = std::fs::read_to_string(dir.join("wcswidth_table_wide.php")).unwrap();
        assert!(wide.starts_with("<?php\n"));
        assert!(wide.contains(" * Unicode version: 15.1.0\n * Date: "));
        assert!(wide.ends_with(
            "return [
    [
        4352,
        4447,
    ],
    [
        12288,
        12288,
    ],
];
"
        ));
        let zero = std::fs::read_to_string(dir.join("wcswidth_table_zero.php")).unwrap();
        assert!(zero.ends_with("return [\n    [\n        768,\n        879,\n    ],\n];\n"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_failure_keeps_written_tables() {
        let dir = temp_dir("failure");
        let source = TestSource::new([
            ("EastAsianWidth.txt", WIDE),
            (
                "extracted/DerivedGeneralCategory.txt",
                "# DerivedGeneralCategory-15.1.0.txt\n0903 ; Mc\n",
            ),
        ]);
        let generator = Generator::new(source, GeneratorConfig::new(dir.clone()));
        assert!(matches!(
            generator.generate().await,
            Err(GenerateError::NoMatches { table: "zero" })
        ));
        assert!(dir.join("wcswidth_table_wide.php").exists());
        assert!(!dir.join("wcswidth_table_zero.php").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_version_writes_nothing() {
        let dir = temp_dir("missing_version");
        let source = TestSource::new([("EastAsianWidth.txt", "1100..115F;W\n")]);
        let generator = Generator::new(source, GeneratorConfig::new(dir.clone()));
        assert!(matches!(
            generator.generate().await,
            Err(GenerateError::VersionNotFound { .. })
        ));
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_error() {
        let dir = temp_dir("fetch_error");
        let generator = Generator::new(
            TestSource::new([]),
            GeneratorConfig::new(dir.clone()),
        );
        match generator.generate().await {
            Err(GenerateError::Fetch(err)) => {
                assert!(err.to_string().contains("EastAsianWidth.txt"))
            }
            other => panic!("Unexpected result: {other:?}"),
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_single_json_table_from_local_copy() {
        let dir = temp_dir("local_json");
        let config = GeneratorConfig {
            out_dir: dir.clone(),
            format: Format::Json,
            tables: vec![Table::Zero],
        };
        let generator = Generator::new(LocalSource::new(tests_data()), config);
        let generated = generator.generate().await.unwrap();
        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].num_ranges, 11);

        let content = std::fs::read_to_string(dir.join("wcswidth_table_zero.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["unicode_version"], "15.1.0");
        let ranges: Vec<(u32, u32)> = serde_json::from_value(value["ranges"].clone()).unwrap();
        assert_eq!(ranges.first(), Some(&(0x300, 0x36F)));
        assert_eq!(ranges.last(), Some(&(0xE0100, 0xE01EF)));
        assert!(!dir.join("wcswidth_table_wide.json").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
