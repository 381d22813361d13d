//! MagicSwap Display Library
//!
//! Display logic behind the swap and pool pages: token amount input
//! sanitizing, USD/number formatting and the pool APR estimate.
//! All core operations are pure and total.

pub mod apr;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod types;

// Re-export commonly used types
pub use apr::{get_apr, AprParams};
pub use config::{load_config, DisplayConfig};
pub use error::DisplayError;
pub use format::{format_number, format_usd, FractionDigits};
pub use input::{sanitize_amount_input, AmountInput};
pub use types::{LiquidityMode, ManageTab, Token};
