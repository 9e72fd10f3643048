//! # Chain Data
//!
//! Backend-independent views of the beacon chain objects the commands report on.

pub const SLOTS_PER_EPOCH: u64 = 32;
pub const SECONDS_PER_SLOT: u64 = 12;
pub const GWEI_PER_ETH: u64 = 1_000_000_000;

pub fn epoch_of(slot: u64) -> u64 {
    slot / SLOTS_PER_EPOCH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadInfo {
    pub slot: u64,
    pub root: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalityInfo {
    pub justified_epoch: u64,
    pub finalized_epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub slot: u64,
    pub proposer_index: u64,
    /// Raw 32 byte graffiti field
    pub graffiti: Vec<u8>,
}

impl BlockInfo {
    /// Graffiti as text, with the zero padding removed.
    /// `None` when the field is all zeroes.
    pub fn graffiti_text(&self) -> Option<String> {
        let end = self.graffiti.iter().rposition(|b| *b != 0)? + 1;
        Some(String::from_utf8_lossy(&self.graffiti[..end]).into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committee {
    pub index: u64,
    pub slot: u64,
    pub validators: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInfo {
    pub index: u64,
    pub balance_gwei: u64,
    pub status: String,
}

impl ValidatorInfo {
    /// Balance in ETH with four decimals
    pub fn balance_eth(&self) -> String {
        let whole = self.balance_gwei / GWEI_PER_ETH;
        let frac = (self.balance_gwei % GWEI_PER_ETH) / 100_000;
        format!("{whole}.{frac:04}")
    }
}
