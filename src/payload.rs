use crate::alert::{AlertRequest, NotificationType};
use serde::Serialize;

pub const COLOR_GOOD: &str = "good";
pub const COLOR_DANGER: &str = "danger";
pub const COLOR_ACKNOWLEDGED: &str = "#3366ff";
pub const COLOR_WARNING: &str = "#FF8000";

/// Marker the Mattermost incoming webhook expects in front of the JSON.
pub const BODY_PREFIX: &str = "payload= ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    pub username: String,
    pub icon_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    pub title_link: String,
    pub color: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub title: String,
    pub short: bool,
    pub value: String,
}

/// Links back into the Nagios web UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links {
    pub info: String,
    pub acknowledge: String,
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

/// First match wins. Always keyed on the service state, even for host alerts.
pub fn color_for(notification_type: &NotificationType, service_state: Option<&str>) -> &'static str {
    match (notification_type, service_state) {
        (NotificationType::Recovery, _) => COLOR_GOOD,
        (NotificationType::Acknowledgement, _) => COLOR_ACKNOWLEDGED,
        (NotificationType::Problem, Some("WARNING")) => COLOR_WARNING,
        (NotificationType::Problem, _) => COLOR_DANGER,
        (NotificationType::Other(_), _) => "",
    }
}

pub fn links_for(req: &AlertRequest) -> Links {
    let host = &req.host_alias;
    let base = &req.cgi_url;

    let (info, ack_target) = if req.host_state.is_some() {
        (
            format!("{}extinfo.cgi?type=2&host={}", base, host),
            format!("{}cmd.cgi?cmd_typ=34&host={}", base, host),
        )
    } else if req.service_state.is_some() {
        let service = or_none(&req.service_desc);
        (
            format!("{}extinfo.cgi?type=2&host={}&service={}", base, host, service),
            format!("{}cmd.cgi?cmd_typ=34&host={}&service={}", base, host, service),
        )
    } else {
        return Links::default();
    };

    let acknowledge = if req.notification_type == NotificationType::Problem {
        format!("[(Acknowledge)]({})", ack_target)
    } else {
        String::new()
    };

    Links { info, acknowledge }
}

fn service_attachment(req: &AlertRequest, links: Links, color: &str) -> Attachment {
    let kind = &req.notification_type;
    let service = or_none(&req.service_desc);

    Attachment {
        fallback: format!("{} in {} at {}", kind, req.host_alias, service),
        title: format!("{} -> {} at {}", kind, req.host_alias, req.host_address),
        title_link: links.info,
        color: color.to_string(),
        fields: vec![Field {
            title: format!("{} is {}", service, or_none(&req.service_state)),
            short: false,
            value: format!("{} {}", or_none(&req.service_output), links.acknowledge),
        }],
    }
}

fn host_attachment(req: &AlertRequest, links: Links, color: &str) -> Attachment {
    let kind = &req.notification_type;
    let state = or_none(&req.host_state);

    Attachment {
        fallback: format!("{} in {} is {}", kind, req.host_alias, state),
        title: format!("{} -> {} at {}", kind, req.host_alias, req.host_address),
        title_link: links.info,
        color: color.to_string(),
        fields: vec![Field {
            title: format!("Host {}", state),
            short: false,
            value: format!("{} {}", or_none(&req.host_output), links.acknowledge),
        }],
    }
}

/// Turn an alert into the message Mattermost will render.
pub fn build_payload(req: &AlertRequest) -> Payload {
    let links = links_for(req);
    let color = color_for(&req.notification_type, req.service_state.as_deref());

    let attachment = if req.is_service_alert() {
        service_attachment(req, links, color)
    } else {
        host_attachment(req, links, color)
    };

    Payload {
        username: req.username.clone(),
        icon_url: req.icon_url.clone(),
        channel: req.channel.clone().filter(|c| !c.is_empty()),
        attachments: vec![attachment],
    }
}

/// Escape `%` before `&` so the `%` introduced for `&` is not escaped twice.
pub fn escape_body(text: &str) -> String {
    text.replace('%', "%25").replace('&', "%26")
}

/// Serialize the payload into the exact request body the webhook receives.
pub fn encode_body(payload: &Payload) -> serde_json::Result<String> {
    let json = serde_json::to_string(payload)?;
    Ok(escape_body(&format!("{}{}", BODY_PREFIX, json)))
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
