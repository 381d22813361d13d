// Display-side data structures: tokens and the pool management page

use crate::error::DisplayError;
use crate::format::format_usd;
use crate::input::AmountInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token as listed in the swap UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Contract address
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// Price denominated in MAGIC
    pub price_magic: f64,
}

impl Token {
    pub fn new(id: &str, symbol: &str, name: &str, decimals: u8, price_magic: f64) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            price_magic,
        }
    }

    /// "SYMBOL (Name)", or just the symbol when the name repeats it
    pub fn display_name(&self) -> String {
        if self.symbol.to_lowercase() == self.name.to_lowercase() {
            self.symbol.clone()
        } else {
            format!("{} ({})", self.symbol, self.name)
        }
    }

    /// Unit price in USD given the current MAGIC/USD rate
    pub fn usd_price(&self, magic_usd: f64) -> f64 {
        self.price_magic * magic_usd
    }

    /// USD value of the entered amount (one unit when the field is empty or zero)
    pub fn estimate_usd(&self, magic_usd: f64, input: &AmountInput) -> f64 {
        self.usd_price(magic_usd) * input.usd_multiplier()
    }

    /// Formatted estimate shown under the amount field, e.g. "$1,234.50"
    pub fn estimate_usd_display(&self, magic_usd: f64, input: &AmountInput) -> String {
        format_usd(self.estimate_usd(magic_usd, input))
    }

    /// Block explorer page for this token
    pub fn explorer_url(&self, explorer_base: &str) -> String {
        format!("{}/token/{}", explorer_base.trim_end_matches('/'), self.id)
    }
}

/// Tabs of the pool management page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManageTab {
    #[default]
    Liquidity,
    Stake,
    Rewards,
}

impl ManageTab {
    /// All tabs in display order
    pub const ALL: [ManageTab; 3] = [ManageTab::Liquidity, ManageTab::Stake, ManageTab::Rewards];

    /// Value of the `tab` query parameter
    pub fn query(&self) -> &'static str {
        match self {
            ManageTab::Liquidity => "liquidity",
            ManageTab::Stake => "stake",
            ManageTab::Rewards => "rewards",
        }
    }

    /// Selected tab for a `tab` query value. Missing or unknown values select Liquidity.
    pub fn from_query(query: Option<&str>) -> Self {
        query.and_then(|q| q.parse().ok()).unwrap_or_default()
    }

    /// Link target for this tab of the given pool
    pub fn href(&self, pool_id: &str) -> String {
        format!("/pools/{}/manage?tab={}", pool_id, self.query())
    }
}

impl FromStr for ManageTab {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ManageTab::ALL
            .into_iter()
            .find(|tab| tab.query() == s)
            .ok_or_else(|| DisplayError::UnknownTab(s.to_string()))
    }
}

impl fmt::Display for ManageTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManageTab::Liquidity => write!(f, "Liquidity"),
            ManageTab::Stake => write!(f, "Stake"),
            ManageTab::Rewards => write!(f, "Rewards"),
        }
    }
}

/// Direction of the liquidity form (the page opens on Remove)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityMode {
    Add,
    #[default]
    Remove,
}

impl LiquidityMode {
    pub fn toggle(self) -> Self {
        match self {
            LiquidityMode::Add => LiquidityMode::Remove,
            LiquidityMode::Remove => LiquidityMode::Add,
        }
    }

    /// Verb on the submit button
    pub fn action(&self) -> &'static str {
        match self {
            LiquidityMode::Add => "Add",
            LiquidityMode::Remove => "Remove",
        }
    }

    pub fn label(&self) -> String {
        format!("{} Liquidity", self.action())
    }
}
