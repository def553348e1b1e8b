mod tax;

pub use tax::{TaxOverrides, TaxSettings, TaxType};
