//! Interviews pulled from the user's calendar.
//!
//! Calendar events carry no employer field, so the company is guessed from
//! the email domains of the people on the invite.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::note::Rating;

/// Shown when no attendee domain names an employer.
pub const UNKNOWN_COMPANY: &str = "Unknown company";

/// Free-mail and calendar-infrastructure domains that never name an employer.
const GENERIC_MAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "outlook.com",
    "hotmail.com",
    "live.com",
    "yahoo.com",
    "icloud.com",
    "me.com",
    "proton.me",
    "protonmail.com",
];

/// Labels that sit under a country code in two-level public suffixes (`co.uk`).
const SECOND_LEVEL_LABELS: &[&str] = &["co", "com", "ac", "org", "net", "gov", "edu"];

/// An interview event as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interview {
    /// Calendar event id, also the key notes are stored under.
    pub id: String,
    pub title: String,
    pub company: String,
    pub starts_at: DateTime<Utc>,
    /// Rating from the user's note, if one exists.
    pub rating: Option<Rating>,
}

/// Interviews split around the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterviewSchedule {
    /// Soonest first.
    pub upcoming: Vec<Interview>,
    /// Most recent first.
    pub past: Vec<Interview>,
}

impl InterviewSchedule {
    /// Splits interviews into those starting after `now` and the rest.
    #[must_use]
    pub fn partition(interviews: Vec<Interview>, now: DateTime<Utc>) -> Self {
        let (mut upcoming, mut past): (Vec<_>, Vec<_>) = interviews
            .into_iter()
            .partition(|interview| interview.starts_at > now);
        upcoming.sort_by_key(|interview| interview.starts_at);
        past.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
        Self { upcoming, past }
    }
}

/// Returns true if an event's summary or description mentions an interview.
#[must_use]
pub fn is_interview(summary: &str, description: Option<&str>) -> bool {
    let mentions = |text: &str| text.to_lowercase().contains("interview");
    mentions(summary) || description.is_some_and(mentions)
}

/// Guesses an employer name from an email address.
///
/// `jane@talent.acme-robotics.co.uk` becomes `Acme Robotics`. Returns `None`
/// for free-mail providers, calendar resources and malformed addresses.
#[must_use]
pub fn employer_from_email(email: &str) -> Option<String> {
    let (_, domain) = email.trim().rsplit_once('@')?;
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();

    if GENERIC_MAIL_DOMAINS.contains(&domain.as_str()) || domain.ends_with("calendar.google.com") {
        return None;
    }

    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }

    let mut index = labels.len() - 2;
    if labels.len() >= 3 && SECOND_LEVEL_LABELS.contains(&labels[index]) {
        index -= 1;
    }

    let words: Vec<String> = labels[index]
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    (!words.is_empty()).then(|| words.join(" "))
}

/// Returns the first employer found among `emails`, in order.
#[must_use]
pub fn guess_company<'a>(emails: impl IntoIterator<Item = &'a str>) -> String {
    emails
        .into_iter()
        .find_map(employer_from_email)
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn interview(id: &str, starts_at: DateTime<Utc>) -> Interview {
        Interview {
            id: id.to_string(),
            title: "Interview".to_string(),
            company: UNKNOWN_COMPANY.to_string(),
            starts_at,
            rating: None,
        }
    }

    #[test]
    fn employer_from_plain_domain() {
        assert_eq!(
            employer_from_email("recruiter@acme.com").as_deref(),
            Some("Acme")
        );
    }

    #[test]
    fn employer_skips_subdomains_and_two_level_suffix() {
        assert_eq!(
            employer_from_email("jane@talent.acme-robotics.co.uk").as_deref(),
            Some("Acme Robotics")
        );
    }

    #[test]
    fn employer_ignores_free_mail() {
        assert_eq!(employer_from_email("someone@gmail.com"), None);
        assert_eq!(employer_from_email("Someone@Outlook.com"), None);
    }

    #[test]
    fn employer_ignores_calendar_resources() {
        assert_eq!(
            employer_from_email("c_1888@resource.calendar.google.com"),
            None
        );
    }

    #[test]
    fn employer_rejects_malformed_addresses() {
        assert_eq!(employer_from_email("no-at-sign"), None);
        assert_eq!(employer_from_email("user@localhost"), None);
    }

    #[test]
    fn guess_company_uses_first_useful_address() {
        let company = guess_company(["me@gmail.com", "hiring@initech.io", "x@other.com"]);
        assert_eq!(company, "Initech");
    }

    #[test]
    fn guess_company_falls_back() {
        assert_eq!(guess_company(["me@gmail.com"]), UNKNOWN_COMPANY);
        assert_eq!(guess_company(Vec::<&str>::new()), UNKNOWN_COMPANY);
    }

    #[test]
    fn is_interview_matches_summary_or_description() {
        assert!(is_interview("Onsite INTERVIEW - Acme", None));
        assert!(is_interview("Chat", Some("Technical interview round")));
        assert!(!is_interview("Dentist", Some("cleaning")));
    }

    #[test]
    fn partition_splits_and_orders() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let schedule = InterviewSchedule::partition(
            vec![
                interview("later", Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap()),
                interview("old", Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()),
                interview("soon", Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()),
                interview("now", now),
                interview("recent", Utc.with_ymd_and_hms(2025, 5, 30, 9, 0, 0).unwrap()),
            ],
            now,
        );

        let ids = |list: &[Interview]| list.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&schedule.upcoming), ["soon", "later"]);
        assert_eq!(ids(&schedule.past), ["now", "recent", "old"]);
    }
}
