pub mod designer;
pub mod price;

pub use designer::*;
pub use price::*;
