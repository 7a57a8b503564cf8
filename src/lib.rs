pub mod algorithm;
pub mod colony;
pub mod component;
pub mod network;
pub mod utils;

pub use colony::{Colony, Cycle, Phase, RunState, Step};
pub use utils::config::Parameters;
pub use utils::error::{Error, Result};
