// Everything on the page that isn't the donation form. None of it changes at runtime.
use std::fmt;

pub const CLUB_NAME: &str = "FC United Warriors";
pub const TAGLINE: &str = "Coming to the Premier League 2025";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const WAITLIST_LABEL: &str = "Join the Waitlist";
pub const DONATE_LABEL: &str = "Donate with M-Pesa";

pub struct Feature {
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str
}

pub static FEATURES: &[Feature] = &[
	Feature {
		icon: "⚽",
		title: "World-Class Stadium",
		description: "State-of-the-art 60,000 capacity arena with modern amenities"
	},
	Feature {
		icon: "🏆",
		title: "Elite Training",
		description: "Top-tier coaching staff and training facilities"
	},
	Feature {
		icon: "👥",
		title: "Community Focus",
		description: "Strong emphasis on local talent and community development"
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quarter {
	pub year: u16,
	// 1 through 4
	pub quarter: u8
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} Q{}", self.year, self.quarter)
	}
}

pub struct Milestone {
	pub when: Quarter,
	pub label: &'static str
}

macro_rules! milestone{
	($year:literal Q $q:literal, $label:literal) => {
		Milestone { when: Quarter { year: $year, quarter: $q }, label: $label }
	}
}

pub static MILESTONES: &[Milestone] = &[
	milestone!(2024 Q 2, "Stadium Construction Begins"),
	milestone!(2024 Q 3, "Player Recruitment Phase"),
	milestone!(2024 Q 4, "Training Facility Launch"),
	milestone!(2025 Q 1, "Premier League Debut"),
];

pub struct SocialLink {
	pub name: &'static str,
	pub href: &'static str
}

// We don't have any of these accounts yet
pub static SOCIAL_LINKS: &[SocialLink] = &[
	SocialLink { name: "Twitter", href: "#" },
	SocialLink { name: "Facebook", href: "#" },
	SocialLink { name: "Instagram", href: "#" },
];

pub mod modal {
	pub const TITLE: &str = "Support FC United Warriors";
	pub const DESCRIPTION: &str = "Your contribution helps build our community stadium and youth programs.";
	pub const AMOUNT_LABEL: &str = "Amount (KES)";
	pub const AMOUNT_PLACEHOLDER: &str = "Enter amount (KES 10 - 70,000)";
	pub const PHONE_LABEL: &str = "M-Pesa Phone Number";
	pub const PHONE_PLACEHOLDER: &str = "254XXXXXXXXX";
	pub const PHONE_HINT: &str = "Format: 254XXXXXXXXX (Safaricom only)";
	pub const SUBMIT: &str = "Donate";
	pub const CANCEL: &str = "Cancel";
}

#[must_use]
pub fn footer_text() -> String {
	format!("{CLUB_NAME} © {COPYRIGHT_YEAR}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timeline_is_in_order() {
		let labels = MILESTONES.iter()
			.map(|m| m.when.to_string())
			.collect::<Vec<_>>();

		assert_eq!(labels, ["2024 Q2", "2024 Q3", "2024 Q4", "2025 Q1"]);
		assert!(MILESTONES.windows(2).all(|w| w[0].when < w[1].when));
		assert!(MILESTONES.iter().all(|m| (1..=4).contains(&m.when.quarter)));
	}

	#[test]
	fn footer() {
		assert_eq!(footer_text(), "FC United Warriors © 2024");
		assert_eq!(SOCIAL_LINKS.len(), 3);
	}
}
