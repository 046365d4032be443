use std::sync::Arc;

use appointments_api::{config::ApiConfig, router, ApiState};
use appointments_core::{
    mock::fixed_clock,
    scheduling::{DoctorPool, SchedulingPolicy, SlotGenerator},
};
use axum_test::TestServer;
use chrono::NaiveDate;

// Monday 15 January 2024
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

pub struct TestContext {
    pub config: ApiConfig,
    pub today: NaiveDate,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            today: today(),
        }
    }

    pub fn with_doctors(mut self, doctors: &[&str]) -> Self {
        self.config.doctor_pool = DoctorPool::new(doctors.iter().copied()).unwrap();
        self
    }

    // Build state with a clock pinned to `today`
    pub fn build_state(&self) -> Arc<ApiState> {
        let generator = SlotGenerator::new(SchedulingPolicy::default(), self.config.doctor_pool.clone());
        Arc::new(ApiState::new(generator, Arc::new(fixed_clock(self.today))))
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(router(self.build_state(), &self.config)).expect("Failed to start test server")
    }
}
