pub mod stock;
pub mod holiday;
pub mod response;
pub mod view;

pub use stock::*;
pub use holiday::*;
pub use response::*;
pub use view::*;
