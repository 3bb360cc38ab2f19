use std::fmt;

/// Derived summary for one completed workout. Built on demand by
/// `Workout::summary`, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub training_type: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
