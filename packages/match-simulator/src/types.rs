//! Shared types for the simulator.

use clap::ValueEnum;
use points::Sport;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Jsonl,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SportArg {
    Tennis,
    Padel,
    Badminton,
    Squash,
    PingPong,
    Football,
    Custom,
    Generic,
}

impl From<SportArg> for Sport {
    fn from(arg: SportArg) -> Self {
        match arg {
            SportArg::Tennis => Sport::Tennis,
            SportArg::Padel => Sport::Padel,
            SportArg::Badminton => Sport::Badminton,
            SportArg::Squash => Sport::Squash,
            SportArg::PingPong => Sport::PingPong,
            SportArg::Football => Sport::Football,
            SportArg::Custom => Sport::Custom,
            SportArg::Generic => Sport::Generic,
        }
    }
}
