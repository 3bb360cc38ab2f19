use serde::{Deserialize, Serialize};

/// One raw sensor package: a workout-type code plus ordered numeric values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    /// The built-in demo readings: one package per known workout type.
    pub fn sample_set() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", &[15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    RaceWalking,
}

impl WorkoutKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(WorkoutKind::Swimming),
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::RaceWalking),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::RaceWalking => "WLK",
        }
    }
}
