use crate::error::{BuildError, ComputeError};
use crate::workout::{count_value, Workout, M_IN_KM};

const STROKE_LEN_M: f64 = 1.38;
const SPEED_ADDENDUM: f64 = 1.1;
const SPEED_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct Swimming {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_lengths_completed: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_completed: u32,
    ) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lengths_completed,
        }
    }

    pub fn from_values(data: &[f64]) -> Result<Self, BuildError> {
        let &[action, duration_hours, weight_kg, pool_length_m, pool_lengths_completed] = data
        else {
            return Err(BuildError::WrongArity {
                kind: "Swimming",
                expected: 5,
                got: data.len(),
            });
        };

        Ok(Self::new(
            count_value("stroke count", action)?,
            duration_hours,
            weight_kg,
            pool_length_m,
            count_value("pool length count", pool_lengths_completed)?,
        ))
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
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
        STROKE_LEN_M
    }

    // Distance in the pool comes from completed lengths, not stroke count.
    fn distance_km(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_completed) / M_IN_KM
    }

    fn calories_burned(&self) -> Result<f64, ComputeError> {
        Ok((self.mean_speed_kmh()? + SPEED_ADDENDUM) * SPEED_MULTIPLIER * self.weight_kg)
    }
}
