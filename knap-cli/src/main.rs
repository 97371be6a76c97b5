use knap_challenges::KnapsackError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = knap_cli::cli().get_matches();

    if let Err(e) = knap_cli::run(&matches) {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<KnapsackError>()
            .map_or(1, KnapsackError::exit_code);
        std::process::exit(code);
    }
}
