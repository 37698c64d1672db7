pub mod batch;
pub mod cleanup;
pub mod config;
pub mod core;
pub mod correction;
pub mod diagnostics;
pub mod error;

pub use core::codepage::decode_legacy_bytes;
pub use core::converter::{convert, CancelToken, ConversionOutput, ConversionUnit, Converter};
pub use core::rule::{GlyphRule, RuleRole};
pub use diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticSummary};
pub use error::{ConfigError, CorrectionError, RuleError};
