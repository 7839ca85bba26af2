mod data;
mod portfolio_component;
mod state;

pub use data::*;
pub use portfolio_component::PortfolioComponent;
pub use state::{PortfolioPage, PortfolioState};
