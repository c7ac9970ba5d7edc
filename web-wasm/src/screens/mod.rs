pub mod crop_recommendation;
pub mod dashboard;
pub mod data_insights;
pub mod plant_disease;
pub mod soil_analysis;
pub mod weather;
