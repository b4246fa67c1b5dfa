use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Marketing channel an experiment ran on. Only changes labels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Web,
    Email,
    Push,
    Sms,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChannelTerms {
    pub trials_label: &'static str,
    pub successes_label: &'static str,
    pub rate_label: &'static str,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Self::Web, Self::Email, Self::Push, Self::Sms];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Email => "email",
            Self::Push => "push",
            Self::Sms => "sms",
        }
    }

    pub fn terms(self) -> ChannelTerms {
        match self {
            Self::Web => ChannelTerms {
                trials_label: "Visitors",
                successes_label: "Conversions",
                rate_label: "Conversion Rate",
            },
            Self::Email | Self::Sms => ChannelTerms {
                trials_label: "Sends",
                successes_label: "Clicks",
                rate_label: "Click Rate",
            },
            Self::Push => ChannelTerms {
                trials_label: "Sends",
                successes_label: "Opens",
                rate_label: "Open Rate",
            },
        }
    }
}
