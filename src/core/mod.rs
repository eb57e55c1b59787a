pub mod controller;
pub mod events;
pub mod ports;
pub mod render;
pub mod sensor;
pub mod validation;
