use crate::error::{BuildError, ComputeError};
use crate::workout::{count_value, Workout, M_IN_KM, MIN_IN_HOUR, STEP_LEN_M};

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SUBTRAHEND: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct Running {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    pub fn from_values(data: &[f64]) -> Result<Self, BuildError> {
        let &[action, duration_hours, weight_kg] = data else {
            return Err(BuildError::WrongArity {
                kind: "Running",
                expected: 3,
                got: data.len(),
            });
        };

        Ok(Self::new(
            count_value("step count", action)?,
            duration_hours,
            weight_kg,
        ))
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn unit_length_m(&self) -> f64 {
        STEP_LEN_M
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        let speed_term = SPEED_MULTIPLIER * self.mean_speed_kmh()? - SPEED_SUBTRAHEND;
        let duration_min = self.duration_hours * MIN_IN_HOUR;
        Ok(speed_term * self.weight_kg / M_IN_KM * duration_min)
    }
}
