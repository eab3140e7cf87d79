//! Mermalade - PlantUML to Mermaid class diagram translation.
//!
//! Converts the PlantUML class diagram notation emitted by Go diagram
//! generators into Mermaid `classDiagram` notation for lightweight
//! web renderers.

pub mod config;

mod error;

pub use error::MermaladeError;

pub use mermalade_convert::{ConversionReport, DropReason, DroppedLine};

use log::{debug, info, trace};

use config::AppConfig;

/// Converter for PlantUML class diagram documents.
///
/// This provides an API for translating PlantUML class diagram text to
/// Mermaid text under an [`AppConfig`].
///
/// # Examples
///
/// ```
/// use mermalade::{DiagramConverter, config::AppConfig};
///
/// let source = "@startuml\nclass \"User\" << (S,Aquamarine) >> {\n    + ID int\n}\n@enduml";
///
/// // With custom config
/// let config = AppConfig::default();
/// let converter = DiagramConverter::new(config);
///
/// let mermaid = converter.convert(source)
///     .expect("conversion is total in permissive mode");
/// assert!(mermaid.starts_with("classDiagram"));
///
/// // Or use default config
/// let converter = DiagramConverter::default();
/// # let _ = converter;
/// ```
#[derive(Default)]
pub struct DiagramConverter {
    config: AppConfig,
}

impl DiagramConverter {
    /// Create a new diagram converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Convert a PlantUML class diagram document to Mermaid text.
    ///
    /// In the default permissive mode this never fails: malformed input
    /// degrades to the minimal valid diagram. With strict mode enabled
    /// in the configuration, relationship lines that would be silently
    /// dropped are surfaced as [`MermaladeError::Strict`] instead.
    ///
    /// The converter is reusable; no state is carried between calls.
    ///
    /// # Errors
    ///
    /// Returns `MermaladeError::Strict` when strict mode is enabled and
    /// the document contains unconvertible relationship lines.
    pub fn convert(&self, source: &str) -> Result<String, MermaladeError> {
        info!("Converting diagram");

        let (mermaid, report) = mermalade_convert::convert_with_report(source);

        debug!(
            classes = report.classes(),
            interfaces = report.interfaces(),
            relations = report.relations();
            "Diagram converted"
        );
        trace!(mermaid = mermaid.as_str(); "Converted diagram");

        if self.config.convert().strict() && !report.is_clean() {
            return Err(MermaladeError::new_strict_error(report.dropped().to_vec()));
        }

        Ok(mermaid)
    }

    /// Convert a document and return the scan report alongside the text.
    ///
    /// Strict mode applies exactly as in [`convert`](Self::convert);
    /// the report is returned for the successful case.
    ///
    /// # Errors
    ///
    /// Returns `MermaladeError::Strict` when strict mode is enabled and
    /// the document contains unconvertible relationship lines.
    pub fn convert_with_report(
        &self,
        source: &str,
    ) -> Result<(String, ConversionReport), MermaladeError> {
        let (mermaid, report) = mermalade_convert::convert_with_report(source);

        if self.config.convert().strict() && !report.is_clean() {
            return Err(MermaladeError::new_strict_error(report.dropped().to_vec()));
        }

        Ok((mermaid, report))
    }
}
