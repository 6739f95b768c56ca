mod estimate_tests;
mod feedback_tests;
mod session_tests;
