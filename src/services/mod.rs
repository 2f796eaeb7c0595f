pub mod cases_service;
pub mod check_service;
pub mod fetch_service;
pub mod runner_service;
