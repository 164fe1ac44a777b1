//! Circle approximation demo
//!
//! A regular polygon inscribed in a circle gains one side per second, from a
//! triangle up to a dodecagon, then starts over.

use ngon_engine::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_app::launch("Circle Approximation by n-gon", AppConfig::circle_approximation)
}
