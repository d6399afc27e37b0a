mod component;
mod filter;
mod types;

pub use component::{ExecutiveSummary, ResponseList, ResponseStats, SentimentOverview, ThemeList};
pub use types::InsightReport;
