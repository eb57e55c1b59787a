use super::ports::LocationSensor;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;

/// Position taken from configuration or `--here`; there is no GPS on a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSensor {
    position: Option<Location>,
}

impl FixedSensor {
    pub fn new(position: Option<Location>) -> Self {
        Self { position }
    }
}

impl LocationSensor for FixedSensor {
    fn current_position(&mut self) -> AppResult<Location> {
        self.position.ok_or_else(|| {
            AppError::Sensor("no home position configured (set `home` or pass --here)".into())
        })
    }
}
