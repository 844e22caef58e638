//! Static quiz content and monster catalog.
//!
//! Pure lookup data keyed by [`ChallengeType`]. Options carry their own
//! outcome tag; the presentation layer renders the labels and hands the
//! chosen tag back through `submit_answer`.

use serde::{Deserialize, Serialize};

use super::kind::ChallengeType;

/// Outcome tag attached to every answer option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerTag {
    Correct,
    Wrong,
}

/// One selectable answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub outcome: AnswerTag,
}

/// Question, options and follow-up tip for one topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizContent {
    pub title: &'static str,
    pub question: &'static str,
    pub options: [AnswerOption; 4],
    pub tip: &'static str,
}

impl QuizContent {
    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.outcome == AnswerTag::Correct)
    }

    /// Outcome of choosing option `index`. Out-of-range picks count as wrong.
    #[must_use]
    pub fn outcome_of(&self, index: usize) -> AnswerTag {
        self.options.get(index).map_or(AnswerTag::Wrong, |o| o.outcome)
    }
}

/// Monster threat rating shown alongside its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThreatLevel::Low => "Low",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::High => "High",
            ThreatLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Display identity of the monster guarding a topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub threat: ThreatLevel,
}

const fn wrong(label: &'static str) -> AnswerOption {
    AnswerOption {
        label,
        outcome: AnswerTag::Wrong,
    }
}

const fn correct(label: &'static str) -> AnswerOption {
    AnswerOption {
        label,
        outcome: AnswerTag::Correct,
    }
}

static PHISHING: QuizContent = QuizContent {
    title: "PHISHING ATTACK",
    question: "You receive an email that looks like it's from your bank asking you to verify your account. What should you do?",
    options: [
        wrong("Click the link and enter your login details"),
        correct("Contact your bank directly using their official number"),
        wrong("Reply to the email asking if it's legitimate"),
        wrong("Forward it to friends to warn them"),
    ],
    tip: "Never click links in suspicious emails. Always verify directly with the organization.",
};

static PASSWORD: QuizContent = QuizContent {
    title: "PASSWORD SECURITY",
    question: "Which of these is the most secure password practice?",
    options: [
        wrong("Use the same password for all accounts"),
        wrong("Use your pet's name followed by 123"),
        correct("Use a passphrase with numbers and symbols"),
        wrong("Write passwords on a sticky note"),
    ],
    tip: "Use unique, complex passwords for each account and enable two-factor authentication.",
};

static MALWARE: QuizContent = QuizContent {
    title: "MALWARE PROTECTION",
    question: "A popup says your computer is infected and offers a free scan. What should you do?",
    options: [
        wrong("Download and run the scanner"),
        correct("Close the popup and run your own antivirus"),
        wrong("Call the number shown for help"),
        wrong("Ignore it and continue browsing"),
    ],
    tip: "Fake security alerts are common malware tactics. Use trusted antivirus software.",
};

static FIREWALL: QuizContent = QuizContent {
    title: "FIREWALL SECURITY",
    question: "Your firewall is blocking a game you want to play. What's the safest action?",
    options: [
        wrong("Turn off the firewall completely"),
        correct("Create an exception only for that game"),
        wrong("Uninstall the firewall software"),
        wrong("Ignore all future firewall warnings"),
    ],
    tip: "Firewalls protect your network. Only allow exceptions for trusted programs.",
};

static ENCRYPTION: QuizContent = QuizContent {
    title: "DATA ENCRYPTION",
    question: "You need to send sensitive documents to your teacher. What's the best method?",
    options: [
        wrong("Email them as regular attachments"),
        correct("Use encrypted email or secure file transfer"),
        wrong("Post them on a public cloud drive"),
        wrong("Text them as photos"),
    ],
    tip: "Encryption scrambles data so only authorized people can read it. Always encrypt sensitive files.",
};

static UPDATES: QuizContent = QuizContent {
    title: "SOFTWARE UPDATES",
    question: "Your computer keeps showing update notifications. What should you do?",
    options: [
        wrong("Ignore them - they're annoying"),
        correct("Install updates regularly"),
        wrong("Turn off automatic updates"),
        wrong("Only update once a year"),
    ],
    tip: "Updates often include security patches that fix vulnerabilities hackers could exploit.",
};

static SOCIAL: QuizContent = QuizContent {
    title: "SOCIAL ENGINEERING",
    question: "Someone calls claiming to be tech support asking for remote access to your computer. What do you do?",
    options: [
        wrong("Give them access to help fix problems"),
        correct("Hang up and contact the company directly"),
        wrong("Give them your password to check"),
        wrong("Let them guide you through changes"),
    ],
    tip: "Legitimate companies won't call asking for remote access. Never give control of your computer to strangers.",
};

/// Quiz content for a topic.
#[must_use]
pub fn quiz_for(kind: ChallengeType) -> &'static QuizContent {
    match kind {
        ChallengeType::Phishing => &PHISHING,
        ChallengeType::Password => &PASSWORD,
        ChallengeType::Malware => &MALWARE,
        ChallengeType::Firewall => &FIREWALL,
        ChallengeType::Encryption => &ENCRYPTION,
        ChallengeType::Updates => &UPDATES,
        ChallengeType::Social => &SOCIAL,
    }
}

/// Monster guarding a topic.
#[must_use]
pub const fn monster_for(kind: ChallengeType) -> MonsterProfile {
    let (name, icon, threat) = match kind {
        ChallengeType::Phishing => ("PHISHING BOT", "🎣", ThreatLevel::High),
        ChallengeType::Password => ("PASSWORD CRACKER", "🔑", ThreatLevel::Medium),
        ChallengeType::Malware => ("MALWARE VIRUS", "🦠", ThreatLevel::Critical),
        ChallengeType::Firewall => ("FIREWALL HACKER", "🔥", ThreatLevel::High),
        ChallengeType::Encryption => ("ENCRYPTION THIEF", "🔐", ThreatLevel::Medium),
        ChallengeType::Updates => ("UPDATE EXPLOITER", "🔄", ThreatLevel::Low),
        ChallengeType::Social => ("SOCIAL ENGINEER", "🗣️", ThreatLevel::High),
    };
    MonsterProfile { name, icon, threat }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_quiz_has_exactly_one_correct_option() {
        for kind in ChallengeType::ALL {
            let quiz = quiz_for(kind);
            let correct = quiz
                .options
                .iter()
                .filter(|o| o.outcome == AnswerTag::Correct)
                .count();
            assert_eq!(correct, 1, "{kind} should have one correct option");
        }
    }

    #[test]
    fn test_outcome_of() {
        let quiz = quiz_for(ChallengeType::Password);
        assert_eq!(quiz.correct_index(), Some(2));
        assert_eq!(quiz.outcome_of(2), AnswerTag::Correct);
        assert_eq!(quiz.outcome_of(0), AnswerTag::Wrong);
        assert_eq!(quiz.outcome_of(17), AnswerTag::Wrong);
    }

    #[test]
    fn test_monster_names_are_distinct() {
        let mut names: Vec<_> = ChallengeType::ALL.iter().map(|&k| monster_for(k).name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ChallengeType::ALL.len());
    }

    #[test]
    fn test_threat_display() {
        assert_eq!(monster_for(ChallengeType::Malware).threat.to_string(), "Critical");
    }
}
