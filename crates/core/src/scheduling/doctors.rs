use crate::{
    errors::{SchedulingError, SchedulingResult},
    models::format::ANY,
};

const DEFAULT_DOCTORS: [&str; 3] = ["dr-smith", "dr-johnson", "dr-lee"];

/// Ordered, non-empty list of doctors that slots are assigned from when the
/// caller has no preference.
///
/// Assignment is round-robin in chronological slot order: the `i`-th slot of
/// a result goes to `doctors[i % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorPool {
    doctors: Vec<String>,
}

impl DoctorPool {
    pub fn new<I, S>(ids: I) -> SchedulingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doctors: Vec<String> = ids.into_iter().map(Into::into).collect();

        if doctors.is_empty() {
            return Err(SchedulingError::Configuration(
                "doctor pool must contain at least one doctor".to_string(),
            ));
        }
        if let Some(bad) = doctors
            .iter()
            .find(|id| id.trim().is_empty() || id.eq_ignore_ascii_case(ANY))
        {
            return Err(SchedulingError::Configuration(format!(
                "invalid doctor id '{bad}'"
            )));
        }

        Ok(Self { doctors })
    }

    /// Parses a comma-separated list such as `dr-smith, dr-lee`.
    pub fn parse(list: &str) -> SchedulingResult<Self> {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty()),
        )
    }

    pub fn assign(&self, index: usize) -> &str {
        &self.doctors[index % self.doctors.len()]
    }

    pub fn first(&self) -> &str {
        self.assign(0)
    }

    pub fn ids(&self) -> &[String] {
        &self.doctors
    }
}

impl Default for DoctorPool {
    fn default() -> Self {
        Self {
            doctors: DEFAULT_DOCTORS.iter().map(|id| id.to_string()).collect(),
        }
    }
}
