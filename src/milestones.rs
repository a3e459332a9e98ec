//! Milestone data model.
//!
//! The pipeline milestones are a fixed, ordered list baked in at build time.
//! Each one is wrapped in a [`Message`] so the wire shape is an array of
//! `{"message": "<text>"}` objects.

use serde::Serialize;

/// A single milestone message. Immutable; constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// The milestone text, returned verbatim.
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Milestone texts in insertion order. Order is part of the contract.
pub const MILESTONES: [&str; 11] = [
    "Created Continuous Integration",
    "Created Docker File",
    "Login to AWS ECR",
    "Uploaded Docker Image to ECR",
    "Created Continuous Deployment",
    "Login to docker via AWS ECR",
    "Pull the docker image AWS ECR",
    "Created container and deployed on EC2",
    "Create new EC2 instance, testing without AWS CLI",
    "Test with new EC2 instance completed successfully",
    "Testing Automation by removing hardcoded value from CD action file",
];

/// Build the full milestone list as [`Message`] values, preserving order.
pub fn pipeline_milestones() -> Vec<Message> {
    MILESTONES.iter().map(|m| Message::new(*m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_order_and_length() {
        let milestones = pipeline_milestones();
        assert_eq!(milestones.len(), 11);
        assert_eq!(milestones[0].message, "Created Continuous Integration");
        assert_eq!(
            milestones[10].message,
            "Testing Automation by removing hardcoded value from CD action file"
        );
        for (msg, text) in milestones.iter().zip(MILESTONES.iter()) {
            assert_eq!(msg.message, *text);
        }
    }

    #[test]
    fn test_message_serializes_with_single_field() {
        let json = serde_json::to_value(Message::new("Created Docker File")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["message"], "Created Docker File");
    }
}
