//! Rainbow window demo
//!
//! The whole window is cleared to a color that walks around the hue circle.

use ngon_engine::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_app::launch("Rainbow Window", AppConfig::rainbow_window)
}
