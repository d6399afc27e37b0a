mod component;
mod feed;
mod render;

pub use component::TrendChart;
