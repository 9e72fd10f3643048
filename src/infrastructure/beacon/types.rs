//! Wire types of the Beacon Node REST API
//!
//! Only the fields the bot reports on are modelled. Integers arrive as
//! decimal strings and byte fields as `0x`-prefixed hex.

use serde::{Deserialize, Deserializer};

use crate::domain::chain::{BlockInfo, Committee, FinalityInfo, HeadInfo, ValidatorInfo};
use crate::domain::types::ChainError;

/// Every response wraps its payload in `data`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

fn quoted_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn quoted_u64_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|v| v.parse().map_err(serde::de::Error::custom))
        .collect()
}

/// Decodes a `0x`-prefixed hex string
pub fn decode_hex(value: &str) -> Result<Vec<u8>, ChainError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(ChainError::Decode(format!("invalid hex string {value:?}")));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ChainError::Decode(format!("invalid hex string {value:?}: {e}")))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct HeaderData {
    pub root: String,
    pub header: SignedHeader,
}

#[derive(Debug, Deserialize)]
pub struct SignedHeader {
    pub message: HeaderMessage,
}

#[derive(Debug, Deserialize)]
pub struct HeaderMessage {
    #[serde(deserialize_with = "quoted_u64")]
    pub slot: u64,
}

impl From<HeaderData> for HeadInfo {
    fn from(data: HeaderData) -> Self {
        Self {
            slot: data.header.message.slot,
            root: data.root,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Checkpoint {
    #[serde(deserialize_with = "quoted_u64")]
    pub epoch: u64,
}

#[derive(Debug, Deserialize)]
pub struct FinalityData {
    pub current_justified: Checkpoint,
    pub finalized: Checkpoint,
}

impl From<FinalityData> for FinalityInfo {
    fn from(data: FinalityData) -> Self {
        Self {
            justified_epoch: data.current_justified.epoch,
            finalized_epoch: data.finalized.epoch,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignedBlock {
    pub message: BlockMessage,
}

#[derive(Debug, Deserialize)]
pub struct BlockMessage {
    #[serde(deserialize_with = "quoted_u64")]
    pub slot: u64,
    #[serde(deserialize_with = "quoted_u64")]
    pub proposer_index: u64,
    pub body: BlockBody,
}

#[derive(Debug, Deserialize)]
pub struct BlockBody {
    pub graffiti: String,
}

impl TryFrom<SignedBlock> for BlockInfo {
    type Error = ChainError;

    fn try_from(block: SignedBlock) -> Result<Self, Self::Error> {
        let message = block.message;
        Ok(Self {
            slot: message.slot,
            proposer_index: message.proposer_index,
            graffiti: decode_hex(&message.body.graffiti)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GenesisData {
    #[serde(deserialize_with = "quoted_u64")]
    pub genesis_time: u64,
}

#[derive(Debug, Deserialize)]
pub struct CommitteeData {
    #[serde(deserialize_with = "quoted_u64")]
    pub index: u64,
    #[serde(deserialize_with = "quoted_u64")]
    pub slot: u64,
    #[serde(deserialize_with = "quoted_u64_vec")]
    pub validators: Vec<u64>,
}

impl From<CommitteeData> for Committee {
    fn from(data: CommitteeData) -> Self {
        Self {
            index: data.index,
            slot: data.slot,
            validators: data.validators,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidatorData {
    #[serde(deserialize_with = "quoted_u64")]
    pub index: u64,
    #[serde(deserialize_with = "quoted_u64")]
    pub balance: u64,
    pub status: String,
}

impl From<ValidatorData> for ValidatorInfo {
    fn from(data: ValidatorData) -> Self {
        Self {
            index: data.index,
            balance_gwei: data.balance,
            status: data.status,
        }
    }
}
