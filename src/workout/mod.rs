mod race_walking;
mod running;
mod swimming;

pub use race_walking::RaceWalking;
pub use running::Running;
pub use swimming::Swimming;

use crate::error::{AppError, BuildError, ComputeError, DispatchError};
use crate::types::reading::WorkoutKind;
use crate::types::report::Report;

pub(crate) const M_IN_KM: f64 = 1000.0;
pub(crate) const MIN_IN_HOUR: f64 = 60.0;
pub(crate) const STEP_LEN_M: f64 = 0.65;

/// Shared contract for one recorded workout. Distance and mean speed have
/// step-based defaults; every concrete workout supplies its own energy model.
pub trait Workout: std::fmt::Debug {
    fn label(&self) -> &'static str;
    /// Steps for running and walking, arm strokes for swimming.
    fn action(&self) -> u32;
    fn duration_hours(&self) -> f64;
    fn weight_kg(&self) -> f64;
    fn unit_length_m(&self) -> f64;

    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.unit_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> Result<f64, ComputeError> {
        let duration = self.duration_hours();
        if duration == 0.0 {
            return Err(ComputeError::ZeroDuration);
        }
        Ok(self.distance_km() / duration)
    }

    fn calories_burned(&self) -> Result<f64, ComputeError>;

    fn summary(&self) -> Result<Report, ComputeError> {
        Ok(Report {
            training_type: self.label(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories: self.calories_burned()?,
        })
    }
}

/// Builds the workout record matching a sensor package's code and values.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Workout>, AppError> {
    let kind = WorkoutKind::from_code(code)
        .ok_or_else(|| DispatchError::UnknownCode(code.to_string()))?;

    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Swimming => Box::new(Swimming::from_values(data)?),
        WorkoutKind::Running => Box::new(Running::from_values(data)?),
        WorkoutKind::RaceWalking => Box::new(RaceWalking::from_values(data)?),
    };

    Ok(workout)
}

pub(crate) fn count_value(field: &'static str, value: f64) -> Result<u32, BuildError> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(BuildError::InvalidCount { field, value });
    }
    Ok(value as u32)
}
