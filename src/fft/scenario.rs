//! Build a digit transform scenario from configuration

use crate::configuration::config::FftScenarioConfig;
use crate::error::Result;
use crate::fft::message::decode_message;
use crate::fft::transform::{fft, parse_digits};

#[derive(Debug, Clone)]
pub struct FftScenario {
    pub digits: Vec<u8>,
    pub phases: usize,
    pub message_length: usize,
    pub offset_length: usize,
    pub input_multiplier: usize,
}

impl FftScenario {
    pub fn build_scenario(cfg: FftScenarioConfig) -> Result<Self> {
        Ok(Self {
            digits: parse_digits(&cfg.input)?,
            phases: cfg.phases,
            message_length: cfg.message_length,
            offset_length: cfg.offset_length,
            input_multiplier: cfg.input_multiplier,
        })
    }

    /// First digits after the direct transform
    pub fn part_1(&self) -> Result<String> {
        fft(&self.digits, self.phases, self.message_length)
    }

    /// Message at the offset of the replicated input
    pub fn part_2(&self) -> Result<String> {
        decode_message(
            &self.digits,
            self.phases,
            self.offset_length,
            self.input_multiplier,
            self.message_length,
        )
    }
}
