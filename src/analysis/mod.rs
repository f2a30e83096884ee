//! Analysis result aggregation
//!
//! Merges the four independent analysis branches (key, harmony, rhythm,
//! melody) into one serializable record.

pub mod result;

pub use result::{
    AnalysisMetadata, AnalysisResult, BasicInfo, HarmonyAnalysis, TimeSignature,
};
