use serde::{Deserialize, Serialize};
use starlit_protocol::Label;

/// Default chip labels, in display order.
pub const DEFAULT_SKILLS: [&str; 27] = [
    "AWS",
    "Terraform",
    "IaC",
    "Docker",
    "Kubernetes",
    "Helm",
    "GitHub Actions",
    "CI/CD",
    "Linux",
    "Python",
    "Bash",
    "EC2",
    "EKS",
    "ECS",
    "RDS",
    "VPC",
    "ALB/NLB",
    "Route 53",
    "CloudFront",
    "S3",
    "CloudWatch",
    "Lambda",
    "API Gateway",
    "IAM",
    "SSM",
    "WAF",
    "Cost Optimization",
];

/// An ordered list of skill labels rendered as chips.
///
/// Insertion order is display order. Nothing here deduplicates or sorts;
/// a repeated label produces a repeated chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    labels: Vec<Label>,
}

impl SkillSet {
    pub fn new<I, T>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Label>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}
