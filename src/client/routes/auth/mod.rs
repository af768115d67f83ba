pub mod accounts;
pub mod dashboard;
pub mod documents;
pub mod ship_details;
pub mod ships;

pub use accounts::{Admins, Crew, Superintendents, Users};
pub use dashboard::Dashboard;
pub use documents::Documents;
pub use ship_details::ShipDetails;
pub use ships::Ships;
