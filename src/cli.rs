use clap::Parser;

pub const DEFAULT_USERNAME: &str = "Nagios";
pub const DEFAULT_ICON_URL: &str =
    "https://slack.global.ssl.fastly.net/7bf4/img/services/nagios_128.png";

#[derive(Parser, Debug)]
#[command(
    name = "nagios-mattermost",
    version,
    about = "Sends Nagios alerts to Mattermost",
    long_about = None
)]
pub struct Cli {
    /// Incoming Webhook URL
    #[arg(long, required = true)]
    pub url: String,

    /// Channel to notify
    #[arg(long)]
    pub channel: Option<String>,

    /// Username to notify as
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// URL of icon to use for username
    #[arg(long, default_value = DEFAULT_ICON_URL)]
    pub iconurl: String,

    /// Notification Type
    #[arg(long, required = true)]
    pub notificationtype: String,

    /// Host Alias
    #[arg(long, required = true)]
    pub hostalias: String,

    /// Host Address
    #[arg(long, required = true)]
    pub hostaddress: String,

    /// Host State
    #[arg(long)]
    pub hoststate: Option<String>,

    /// Host Output
    #[arg(long)]
    pub hostoutput: Option<String>,

    /// Service Description
    #[arg(long)]
    pub servicedesc: Option<String>,

    /// Service State
    #[arg(long)]
    pub servicestate: Option<String>,

    /// Service Output
    #[arg(long)]
    pub serviceoutput: Option<String>,

    /// Link to extinfo.cgi on your Nagios instance
    #[arg(long, required = true)]
    pub cgiurl: String,

    /// Seconds to wait for the webhook before giving up
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
