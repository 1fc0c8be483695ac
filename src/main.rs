//! whatsmy-gpu - standalone GPU detection binary
//!
//! Thin wrapper for running the plugin outside the host CLI. Initializes
//! logging (the host process owns that when loading the cdylib) and
//! forwards the process arguments to the shared entry point.

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().collect();
    std::process::exit(whatsmy_gpu::run(&args));
}
