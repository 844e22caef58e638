//! Challenge topics.

use serde::{Deserialize, Serialize};

/// A security topic. Keys both the quiz content and monster uniqueness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    #[default]
    Phishing,
    Password,
    Malware,
    Firewall,
    Encryption,
    Updates,
    Social,
}

impl ChallengeType {
    /// Every topic, in catalog order.
    pub const ALL: [ChallengeType; 7] = [
        ChallengeType::Phishing,
        ChallengeType::Password,
        ChallengeType::Malware,
        ChallengeType::Firewall,
        ChallengeType::Encryption,
        ChallengeType::Updates,
        ChallengeType::Social,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChallengeType::Phishing => "phishing",
            ChallengeType::Password => "password",
            ChallengeType::Malware => "malware",
            ChallengeType::Firewall => "firewall",
            ChallengeType::Encryption => "encryption",
            ChallengeType::Updates => "updates",
            ChallengeType::Social => "social",
        }
    }

    /// Look up a topic by identifier, falling back to `Phishing` for
    /// anything unrecognised.
    ///
    /// ```
    /// use cyber_maze::challenge::ChallengeType;
    ///
    /// assert_eq!(ChallengeType::from_name("Malware"), ChallengeType::Malware);
    /// assert_eq!(ChallengeType::from_name("ransomware"), ChallengeType::Phishing);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
