mod claim;
mod page;
mod validation;

pub use claim::*;
pub use page::*;
pub use validation::*;
