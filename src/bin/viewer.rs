fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = mandelglide::ViewerConfig::default();
    mandelglide::run_viewer(config)
}
