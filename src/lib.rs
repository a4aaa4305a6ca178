pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod operation;

pub use calculator::{Calculator, DEFAULT_PRECISION};
pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use math::{DIVISION_EPSILON, EQUALITY_EPSILON, add, divide, multiply, subtract};
pub use operation::{Operation, Step};
