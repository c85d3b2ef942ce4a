pub mod catalogue;
pub mod country;
pub mod error;

pub use catalogue::CountryCatalogue;
pub use country::Country;
pub use error::CatalogueError;
