use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parsing is not implemented for this backend: {0}")]
    Unimplemented(&'static str),

    #[error("Malformed results output: {0}")]
    Malformed(String),
}

/// Parsed per-field result values keyed by field name.
pub type ResultsSummary = BTreeMap<String, Vec<f64>>;

/// Capability every results backend must supply.
///
/// Each solver backend reads its own output format; the trait is the seam
/// between this model and those readers. There is deliberately no default
/// implementation: a backend that cannot parse yet should return
/// [`ParseError::Unimplemented`] rather than silently produce nothing.
pub trait ResultsParser {
    fn parse(&mut self) -> Result<ResultsSummary, ParseError>;
}
