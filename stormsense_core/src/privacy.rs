//! Privacy policy document as structured content.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub intro: &'static str,
    pub sections: Vec<PolicySection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySection {
    pub number: u8,
    pub heading: &'static str,
    pub blocks: Vec<Block>,
}

impl PolicySection {
    pub fn numbered_heading(&self) -> String {
        format!("{}. {}", self.number, self.heading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Paragraph led by a bold label.
    Labeled {
        label: &'static str,
        text: &'static str,
    },
    Bullets(Vec<&'static str>),
    Contact {
        name: &'static str,
        email: &'static str,
    },
}

pub const CONTACT_EMAIL: &str = "contact@excarta.io";

fn section(number: u8, heading: &'static str, blocks: Vec<Block>) -> PolicySection {
    PolicySection {
        number,
        heading,
        blocks,
    }
}

fn labeled(label: &'static str, text: &'static str) -> Block {
    Block::Labeled { label, text }
}

pub fn privacy_policy() -> PolicyDocument {
    use Block::{Bullets, Paragraph};

    PolicyDocument {
        title: "Privacy Policy for StormSense",
        last_updated: "July 2, 2025",
        intro: "This Privacy Policy describes how Excarta (\"we,\" \"us,\" or \"our\") collects, \
                uses, and protects your information when you use our StormSense mobile \
                application (the \"App\"). We are committed to helping you stay informed about \
                severe weather while respecting your privacy.",
        sections: vec![
            section(
                1,
                "Introduction",
                vec![Paragraph(
                    "Excarta is the developer of the StormSense app, designed to help users stay \
                     informed about severe weather events through forecasts, community \
                     information, and alerts. This Privacy Policy explains our practices \
                     regarding the collection, use, and protection of your personal information \
                     through the App.",
                )],
            ),
            section(
                2,
                "Information We Collect",
                vec![
                    Paragraph(
                        "We collect the following types of information when you use the \
                         StormSense App:",
                    ),
                    labeled(
                        "User Account Information",
                        "When you create an account, we collect your email address and a \
                         password. This information is used to secure your account and allow \
                         you to access the App's features.",
                    ),
                    labeled(
                        "Location Information for Monitoring",
                        "You may provide specific locations (e.g., your home, work, or a loved \
                         one's address) within the App for which you wish to receive weather \
                         forecasts and alerts.",
                    ),
                    labeled(
                        "Current Location Information",
                        "If you enable location services on your device and grant the App \
                         permission, we may collect your current, precise location. This is \
                         used to provide localized weather information and alerts relevant to \
                         your immediate vicinity.",
                    ),
                    labeled(
                        "User and Device IDs for Alerts",
                        "If you enable severe weather alerts, we collect unique identifiers \
                         associated with your user account and your device. These IDs are \
                         solely used to facilitate the delivery of timely severe weather alerts \
                         to your device.",
                    ),
                    labeled(
                        "Optional User-Submitted Content",
                        "You may optionally choose to submit photos and text reports within the \
                         App to report severe weather events in your area (e.g., downed trees, \
                         flooding, hail). This information is used to provide community-sourced \
                         weather updates within the App.",
                    ),
                ],
            ),
            section(
                3,
                "How We Use Your Information",
                vec![
                    Paragraph(
                        "The information we collect is used solely for the following purposes \
                         related to the functionality of the StormSense App:",
                    ),
                    Bullets(vec![
                        "To provide and manage your user account.",
                        "To deliver accurate weather forecasts and information for your \
                         specified locations.",
                        "To send severe weather alerts to you, based on your enabled preferences \
                         and location data.",
                        "To display community-sourced weather reports from other users, \
                         enhancing local awareness of weather events.",
                        "To improve the overall functionality and performance of the App.",
                    ]),
                    Paragraph(
                        "We want to be clear: None of the information we collect is used for \
                         marketing, advertising, or any purpose other than the core \
                         functionality of the StormSense App as described above.",
                    ),
                ],
            ),
            section(
                4,
                "How We Share Your Information",
                vec![Paragraph(
                    "We do not share any of your collected information with any third-party \
                     providers, advertisers, or other external entities. Your data remains \
                     within Excarta and is used exclusively to power the StormSense App's \
                     features.",
                )],
            ),
            section(
                5,
                "Your Choices and Rights",
                vec![
                    Paragraph("You have control over your information:"),
                    labeled(
                        "Account Information",
                        "You can access and update your account information within the App \
                         settings.",
                    ),
                    labeled(
                        "Location Services",
                        "You can enable or disable location services for the StormSense App \
                         through your device's operating system settings at any time.",
                    ),
                    labeled(
                        "Alerts",
                        "You can manage your alert preferences and disable alerts within the \
                         App.",
                    ),
                    labeled(
                        "User-Submitted Content",
                        "You can choose whether or not to submit photos and text reports. Once \
                         submitted, this content may be visible to other users within the App.",
                    ),
                    labeled(
                        "Data Deletion",
                        "If you wish to delete your account and associated data, please contact \
                         us using the information provided below.",
                    ),
                ],
            ),
            section(
                6,
                "Data Security",
                vec![Paragraph(
                    "We implement reasonable security measures to protect your information from \
                     unauthorized access, alteration, disclosure, or destruction. However, \
                     please be aware that no method of transmission over the internet or method \
                     of electronic storage is 100% secure.",
                )],
            ),
            section(
                7,
                "Children's Privacy",
                vec![Paragraph(
                    "The StormSense App is not intended for use by children under the age of 13, \
                     and we do not knowingly collect personal information from children under \
                     13. If we become aware that we have inadvertently received personal \
                     information from a user under the age of 13, we will delete such \
                     information from our records.",
                )],
            ),
            section(
                8,
                "International Data Transfers",
                vec![Paragraph(
                    "As we do not share your data with third parties and primarily process data \
                     to deliver app functionality, international data transfer considerations \
                     are minimized. However, depending on where our servers are located, your \
                     information may be processed and stored in a country other than your own. \
                     We will ensure that any such transfers comply with applicable data \
                     protection laws.",
                )],
            ),
            section(
                9,
                "Changes to This Privacy Policy",
                vec![Paragraph(
                    "We may update our Privacy Policy from time to time. We will notify you of \
                     any changes by posting the new Privacy Policy within the App or on our \
                     website. You are advised to review this Privacy Policy periodically for \
                     any changes.",
                )],
            ),
            section(
                10,
                "Contact Us",
                vec![
                    Paragraph(
                        "If you have any questions about this Privacy Policy or our data \
                         practices, please contact us at:",
                    ),
                    Block::Contact {
                        name: "Excarta Privacy Team",
                        email: CONTACT_EMAIL,
                    },
                ],
            ),
        ],
    }
}
