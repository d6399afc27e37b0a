mod canvas;
pub mod insights;
pub mod mind_map;
pub mod trend_chart;
