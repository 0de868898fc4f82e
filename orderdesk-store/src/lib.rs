pub mod app_config;
pub mod customer_repo;
pub mod notifier;
pub mod tax_repo;

pub use app_config::Config;
pub use customer_repo::CustomerDirectory;
pub use notifier::LoggingEmailNotifier;
pub use tax_repo::TaxTable;
