mod meta;
pub use self::meta::Response;

mod deal;
pub use self::deal::{Airport, Deal, DealID, Price};
