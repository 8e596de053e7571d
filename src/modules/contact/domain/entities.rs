use serde::{Deserialize, Serialize};

/// Services offered on the inquiry form, in the order the select renders
/// them. The first entry is the form's default.
pub const SERVICE_OPTIONS: [&str; 4] = [
    "Web App Development",
    "Mobile App Development",
    "AI Automation Solution",
    "Full Product Build",
];

/// Write-only payload for the contact endpoint. Field names follow the wire
/// contract (`fullName` camel case); the payload is not retained after a
/// successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: SERVICE_OPTIONS[0].to_string(),
            budget: String::new(),
            timeline: String::new(),
            message: String::new(),
        }
    }
}
