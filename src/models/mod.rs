pub mod auction;
pub mod contract;
pub mod product;
pub mod sub;

pub use auction::*;
pub use contract::*;
pub use product::*;
pub use sub::*;
