pub mod table;

pub use table::{CreditBand, PolicyConfig, PolicyConfigError, PolicyTable};
