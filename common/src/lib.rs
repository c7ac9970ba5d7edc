//! AgriAI Common Library
//!
//! CLIとWeb(WASM)で共有される画面・スキャン・参照データ

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod scan;
pub mod screen;
pub mod upload;

pub use classifier::{
    analyze, Diagnosis, DiseaseClassifier, ScanSettings, Severity, SimulatedClassifier, Timer,
};
pub use error::{Result, ScanError};
pub use scan::{ScanPhase, ScanSession, ScanTicket};
pub use screen::{Screen, ViewSelector};
pub use upload::ScanImage;
