//! Core analysis engine.
//!
//! The scan pipeline runs File Discoverer -> Source Loader -> Usage &
//! Component Scanner per file, then the Index Builder aggregates everything
//! into one `AnalysisSnapshot` which the Cache Store persists. Preview
//! requests run Source Loader -> Type Resolver <-> Value Synthesizer ->
//! Serializer as a synchronous chain.

pub mod cache;
pub mod file_scanner;
pub mod loader;
pub mod parsers;
pub mod resolve;
pub mod scan;
pub mod serialize;
pub mod session;
pub mod snapshot;
pub mod synth;
pub mod value;

pub use cache::{load_cache, save_cache};
pub use loader::SourceLoader;
pub use session::{AnalysisSession, ProjectScan, ScanStats};
pub use snapshot::{AnalysisSnapshot, ComponentInfo, SCHEMA_VERSION, TranslationUsage};
pub use value::{EnumDescriptor, EnumMetadata, EnumValue, MockValue, PropsBundle};
