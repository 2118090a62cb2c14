//! Named supply models from the supply dynamics lesson

use super::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ready-made parameter sets illustrating the basic supply models
///
/// The lesson describes these models qualitatively. The rates chosen here
/// are illustrative values inside the simulator's slider ranges, not figures
/// taken from any real token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Simulator defaults
    Default,
    /// Entire supply minted at genesis, no issuance, no burns (store of value)
    Fixed,
    /// Steady issuance paying for network participation
    Inflationary,
    /// Burns outpace issuance so supply shrinks (medium of exchange)
    Deflationary,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Default,
        Preset::Fixed,
        Preset::Inflationary,
        Preset::Deflationary,
    ];

    pub fn params(self) -> SimulationParameters {
        let base = SimulationParameters::default();
        match self {
            Preset::Default => base,
            Preset::Fixed => SimulationParameters {
                max_supply: base.initial_supply,
                inflation_rate: 0.0,
                burn_rate: 0.0,
                staking_reward: 0.0,
                ..base
            },
            Preset::Inflationary => SimulationParameters {
                inflation_rate: 10.0,
                burn_rate: 0.5,
                staking_reward: 12.0,
                lockup_period: 21,
                ..base
            },
            Preset::Deflationary => SimulationParameters {
                max_supply: base.initial_supply,
                inflation_rate: 0.0,
                burn_rate: 5.0,
                staking_reward: 4.0,
                lockup_period: 90,
                ..base
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Fixed => "fixed",
            Preset::Inflationary => "inflationary",
            Preset::Deflationary => "deflationary",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preset '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for preset in Preset::ALL {
            assert!(preset.params().validate().is_ok(), "{} preset invalid", preset);
        }
    }

    #[test]
    fn test_fixed_has_no_issuance() {
        let p = Preset::Fixed.params();
        assert_eq!(p.inflation_rate, 0.0);
        assert_eq!(p.burn_rate, 0.0);
        assert_eq!(p.max_supply, p.initial_supply);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Deflationary".parse::<Preset>(), Ok(Preset::Deflationary));
        assert_eq!("fixed".parse::<Preset>(), Ok(Preset::Fixed));
        assert!("elastic".parse::<Preset>().is_err());
    }
}
