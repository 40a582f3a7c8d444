use std::io;

use dotenvy::dotenv;
use petshop_pos::config::Settings;
use petshop_pos::errors::AppError;

fn main() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let settings = Settings::from_env()?;
    log::info!(
        "Starting point of sale (catalog {}, sales {})",
        settings.catalog_path.display(),
        settings.sales_path.display()
    );

    petshop_pos::run(&settings, io::stdin().lock(), io::stdout().lock())
}
