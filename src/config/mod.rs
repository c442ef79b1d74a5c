pub mod cli;
pub mod toml_config;

use crate::core::{MembershipForm, OfferingId};
use crate::utils::error::{GymError, Result};
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// One plan-queue operation given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    Add(OfferingId),
    Adjust(OfferingId, i32),
    Remove(OfferingId),
    Clear,
}

impl FromStr for QueueAction {
    type Err = GymError;

    /// `add:<id>`, `adjust:<id>:<delta>`, `remove:<id>` or `clear`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| GymError::InvalidConfigValueError {
            field: "actions".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let parse_id = |raw: &str| {
            raw.trim()
                .parse::<u32>()
                .map(OfferingId)
                .map_err(|_| invalid("Offering id must be a non-negative integer"))
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            ["add", id] => Ok(QueueAction::Add(parse_id(*id)?)),
            ["remove", id] => Ok(QueueAction::Remove(parse_id(*id)?)),
            ["adjust", id, delta] => {
                let delta = delta
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| invalid("Delta must be an integer"))?;
                Ok(QueueAction::Adjust(parse_id(*id)?, delta))
            }
            ["clear"] => Ok(QueueAction::Clear),
            _ => Err(invalid(
                "Expected add:<id>, adjust:<id>:<delta>, remove:<id> or clear",
            )),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ao-gym")]
#[command(about = "Assemble an AO Gym training plan and submit a membership application")]
pub struct CliConfig {
    #[arg(long, help = "Site configuration file (TOML); the built-in catalog is used when omitted")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Directory for persisted session data")]
    pub storage_dir: Option<String>,

    #[arg(long, value_delimiter = ',', help = "e.g. add:1,add:1,adjust:1:-1,remove:2,clear")]
    pub actions: Vec<QueueAction>,

    #[arg(long, help = "List programs in this category (or 'all') before applying actions")]
    pub category: Option<String>,

    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub plan_type: Option<String>,

    #[arg(long, help = "Submit a membership application for the assembled plan")]
    pub submit: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn membership_form(&self) -> MembershipForm {
        MembershipForm {
            full_name: self.full_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            plan_type: self.plan_type.clone().unwrap_or_default(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.storage_dir {
            validate_path("storage_dir", dir)?;
        }
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(GymError::InvalidConfigValueError {
                    field: "config".to_string(),
                    value: path.display().to_string(),
                    reason: "File does not exist".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queue_actions() {
        assert_eq!("add:1".parse::<QueueAction>().unwrap(), QueueAction::Add(OfferingId(1)));
        assert_eq!(
            "adjust:3:-2".parse::<QueueAction>().unwrap(),
            QueueAction::Adjust(OfferingId(3), -2)
        );
        assert_eq!(
            " remove:2 ".parse::<QueueAction>().unwrap(),
            QueueAction::Remove(OfferingId(2))
        );
        assert_eq!("clear".parse::<QueueAction>().unwrap(), QueueAction::Clear);

        assert!("add".parse::<QueueAction>().is_err());
        assert!("add:x".parse::<QueueAction>().is_err());
        assert!("adjust:1:up".parse::<QueueAction>().is_err());
        assert!("buy:1".parse::<QueueAction>().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_action_list() {
        let config = CliConfig::parse_from([
            "ao-gym",
            "--actions",
            "add:1,add:2,adjust:1:1",
            "--plan-type",
            "premium",
            "--submit",
        ]);

        assert_eq!(config.actions.len(), 3);
        assert!(config.submit);
        assert_eq!(config.membership_form().plan_type, "premium");
        assert!(config.validate().is_ok());
    }
}
