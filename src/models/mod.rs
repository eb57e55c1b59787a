pub mod location;
pub mod session;
pub mod variant;
