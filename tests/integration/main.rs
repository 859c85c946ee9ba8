//! Integration test modules.

mod seed_config_test;
mod seed_profile_test;
