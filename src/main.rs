mod app;

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Behavior failures are handled inside the run; only I/O plumbing ends up here.
    if let Err(err) = app::run() {
        log::error!("{:#}", err);
    }
}
