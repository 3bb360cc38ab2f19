use crate::error::{BuildError, ComputeError};
use crate::workout::{count_value, Workout, MIN_IN_HOUR, STEP_LEN_M};

const WEIGHT_COEFF: f64 = 0.035;
const SPEED_BY_HEIGHT_COEFF: f64 = 0.029;

#[derive(Debug, Clone)]
pub struct RaceWalking {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl RaceWalking {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }

    pub fn from_values(data: &[f64]) -> Result<Self, BuildError> {
        let &[action, duration_hours, weight_kg, height_cm] = data else {
            return Err(BuildError::WrongArity {
                kind: "RaceWalking",
                expected: 4,
                got: data.len(),
            });
        };

        Ok(Self::new(
            count_value("step count", action)?,
            duration_hours,
            weight_kg,
            height_cm,
        ))
    }
}

impl Workout for RaceWalking {
    fn label(&self) -> &'static str {
        "RaceWalking"
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
        if self.height_cm == 0.0 {
            return Err(ComputeError::ZeroHeight);
        }

        let speed = self.mean_speed_kmh()?;
        // speed^2 / height is truncated before scaling, not rounded at the end.
        let speed_by_height = (speed * speed / self.height_cm).floor();
        let duration_min = self.duration_hours * MIN_IN_HOUR;

        Ok((WEIGHT_COEFF * self.weight_kg
            + speed_by_height * SPEED_BY_HEIGHT_COEFF * self.weight_kg)
            * duration_min)
    }
}
