pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod use_cases;
