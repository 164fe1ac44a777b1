//! Cycling polygon over a hue-cycling background

use ngon_engine::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_app::launch("Hue-gon", AppConfig::hue_gon)
}
