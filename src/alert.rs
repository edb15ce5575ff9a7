use crate::cli::Cli;
use std::fmt;

/// Nagios `$NOTIFICATIONTYPE$`. Only the variants that change the message
/// get their own arm; everything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Problem,
    Recovery,
    Acknowledgement,
    Other(String),
}

impl NotificationType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PROBLEM" => Self::Problem,
            "RECOVERY" => Self::Recovery,
            "ACKNOWLEDGEMENT" => Self::Acknowledgement,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Problem => "PROBLEM",
            Self::Recovery => "RECOVERY",
            Self::Acknowledgement => "ACKNOWLEDGEMENT",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything Nagios handed us for one notification.
#[derive(Debug, Clone)]
pub struct AlertRequest {
    pub url: String,
    pub channel: Option<String>,
    pub username: String,
    pub icon_url: String,
    pub notification_type: NotificationType,
    pub host_alias: String,
    pub host_address: String,
    pub host_state: Option<String>,
    pub host_output: Option<String>,
    pub service_desc: Option<String>,
    pub service_state: Option<String>,
    pub service_output: Option<String>,
    pub cgi_url: String,
}

impl AlertRequest {
    /// A service alert needs a non-empty service state; anything else is
    /// rendered as a host alert.
    pub fn is_service_alert(&self) -> bool {
        self.service_state.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl From<Cli> for AlertRequest {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            channel: cli.channel,
            username: cli.username,
            icon_url: cli.iconurl,
            notification_type: NotificationType::parse(&cli.notificationtype),
            host_alias: cli.hostalias,
            host_address: cli.hostaddress,
            host_state: cli.hoststate,
            host_output: cli.hostoutput,
            service_desc: cli.servicedesc,
            service_state: cli.servicestate,
            service_output: cli.serviceoutput,
            cgi_url: cli.cgiurl,
        }
    }
}
