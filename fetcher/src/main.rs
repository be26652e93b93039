use sol_accounts_fetcher::{Config, Poller};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let poller = match Poller::from_config(&config) {
        Ok(poller) => poller,
        Err(e) => {
            log::error!("failed to create poller:\n{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = poller.run().await {
        log::error!("failed to fetch accounts:\n{}", e);
        std::process::exit(1);
    }
}
