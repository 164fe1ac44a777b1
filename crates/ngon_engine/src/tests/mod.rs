//! Whole-loop tests on the headless backend
