pub mod audit;
pub mod parser;
pub mod report;
pub mod traits;
