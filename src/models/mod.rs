pub mod cleaned;
pub mod location;
pub mod request_window;
pub mod table;

pub use cleaned::CleanedRecord;
pub use location::Location;
pub use request_window::RequestWindow;
pub use table::{Cell, ClimateTable};
