mod category;
mod engine;

pub use category::{Category, CategoryInfo};
pub use engine::{compute, compute_all, format_instant, CalculationResult};
