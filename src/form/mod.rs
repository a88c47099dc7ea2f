pub mod intake;
pub mod listing;
pub mod validation;

pub use intake::IntakeCategory;
pub use intake::SpotIntakeForm;
pub use listing::ListingRequest;
pub use listing::ListingRequestForm;
pub use validation::ValidationErrors;
