pub mod blackjack;
pub mod cfg;
pub mod roshambo;
pub mod sim;

pub use blackjack::handle_blackjack_command;
pub use cfg::handle_cfg_command;
pub use roshambo::handle_roshambo_command;
pub use sim::handle_sim_command;
