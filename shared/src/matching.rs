//! Duplicate-candidate scoring.
//!
//! The backend decides which records come back as candidates; this module
//! only explains them with an unweighted additive score over name, email,
//! and phone agreement. The sum is not clamped, so compounding checks can in
//! principle push past 100. Confidence buckets feed badge styling and never
//! gate which candidates are shown.

use crate::Donor;

/// Result of scoring one candidate against a reference donor.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch {
    pub score: u32,
    /// Human-readable reasons the score was awarded, in check order.
    pub factors: Vec<String>,
}

impl DuplicateMatch {
    pub fn confidence(&self) -> MatchConfidence {
        MatchConfidence::from_score(self.score)
    }
}

/// Presentation bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            MatchConfidence::High
        } else if score >= 50 {
            MatchConfidence::Medium
        } else {
            MatchConfidence::Low
        }
    }
}

/// Strip everything but digits: "(555) 123-4567" -> "5551234567".
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Score a candidate against the reference donor.
///
/// Name: exact case-insensitive match on the backend-computed full name is
/// worth 40; a one-way substring match either direction is worth 25; the two
/// are mutually exclusive with exact taking precedence. Email equality
/// (case-insensitive) adds 35. Phone equality after digit normalization adds
/// 25.
pub fn similarity(reference: &Donor, candidate: &Donor) -> DuplicateMatch {
    let mut score = 0;
    let mut factors = Vec::new();

    if let (Some(a), Some(b)) = (&reference.full_name, &candidate.full_name) {
        if !a.is_empty() && !b.is_empty() {
            let a = a.to_lowercase();
            let b = b.to_lowercase();
            if a == b {
                score += 40;
                factors.push("Exact name match".to_string());
            } else if a.contains(&b) || b.contains(&a) {
                score += 25;
                factors.push("Partial name match".to_string());
            }
        }
    }

    if let (Some(a), Some(b)) = (&reference.email, &candidate.email) {
        if !a.is_empty() && !b.is_empty() && a.to_lowercase() == b.to_lowercase() {
            score += 35;
            factors.push("Same email".to_string());
        }
    }

    if let (Some(a), Some(b)) = (&reference.phone, &candidate.phone) {
        if !a.is_empty() && !b.is_empty() && normalize_phone(a) == normalize_phone(b) {
            score += 25;
            factors.push("Same phone".to_string());
        }
    }

    DuplicateMatch { score, factors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor(full_name: Option<&str>, email: Option<&str>, phone: Option<&str>) -> Donor {
        Donor {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            full_name: full_name.map(str::to_string),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            city: None,
            state: None,
            company: None,
            donor_status: "active".to_string(),
            donor_type: "individual".to_string(),
            total_gifts: 0.0,
            total_gift_count: 0,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_exact_name_match() {
        let result = similarity(
            &donor(Some("Jane Doe"), None, None),
            &donor(Some("jane doe"), None, None),
        );
        assert_eq!(result.score, 40);
        assert_eq!(result.factors, vec!["Exact name match"]);
    }

    #[test]
    fn test_partial_name_match_either_direction() {
        let result = similarity(
            &donor(Some("Jane Doe"), None, None),
            &donor(Some("Jane Doe-Smith"), None, None),
        );
        assert_eq!(result.score, 25);
        assert_eq!(result.factors, vec!["Partial name match"]);

        let result = similarity(
            &donor(Some("Jane Doe-Smith"), None, None),
            &donor(Some("Jane Doe"), None, None),
        );
        assert_eq!(result.score, 25);
        assert_eq!(result.factors, vec!["Partial name match"]);
    }

    #[test]
    fn test_exact_and_partial_are_mutually_exclusive() {
        // An exact match also satisfies the substring test; only the 40 may
        // be awarded.
        let result = similarity(
            &donor(Some("Jane Doe"), None, None),
            &donor(Some("JANE DOE"), None, None),
        );
        assert_eq!(result.score, 40);
        assert_eq!(result.factors.len(), 1);
    }

    #[test]
    fn test_email_match_is_case_insensitive() {
        let result = similarity(
            &donor(None, Some("A@B.com"), None),
            &donor(None, Some("a@b.com"), None),
        );
        assert_eq!(result.score, 35);
        assert_eq!(result.factors, vec!["Same email"]);
    }

    #[test]
    fn test_phone_match_ignores_formatting() {
        let result = similarity(
            &donor(None, None, Some("(555) 123-4567")),
            &donor(None, None, Some("555-123-4567")),
        );
        assert_eq!(result.score, 25);
        assert_eq!(result.factors, vec!["Same phone"]);
    }

    #[test]
    fn test_different_phones_do_not_match() {
        let result = similarity(
            &donor(None, None, Some("555-123-4567")),
            &donor(None, None, Some("555-123-9999")),
        );
        assert_eq!(result.score, 0);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        // Each check independently skips when either side is absent or empty.
        let full = donor(Some("Jane Doe"), Some("jane@x.com"), Some("555-1234"));

        let no_name = similarity(&donor(None, Some("jane@x.com"), Some("555-1234")), &full);
        assert_eq!(no_name.score, 60);
        assert!(!no_name.factors.iter().any(|f| f.contains("name")));

        let no_email = similarity(&donor(Some("Jane Doe"), None, Some("555-1234")), &full);
        assert_eq!(no_email.score, 65);
        assert!(!no_email.factors.contains(&"Same email".to_string()));

        let no_phone = similarity(&donor(Some("Jane Doe"), Some("jane@x.com"), None), &full);
        assert_eq!(no_phone.score, 75);
        assert!(!no_phone.factors.contains(&"Same phone".to_string()));

        let empty = similarity(&donor(Some(""), Some(""), Some("")), &full);
        assert_eq!(empty.score, 0);
        assert!(empty.factors.is_empty());
    }

    #[test]
    fn test_full_match_scores_100() {
        let reference = donor(Some("Jane Doe"), Some("jane@x.com"), Some("555-1234"));
        let candidate = donor(Some("jane doe"), Some("jane@x.com"), Some("(555) 1234"));

        let result = similarity(&reference, &candidate);
        assert_eq!(result.score, 100);
        assert_eq!(
            result.factors,
            vec!["Exact name match", "Same email", "Same phone"]
        );
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            (
                donor(Some("Jane Doe"), Some("jane@x.com"), Some("555-1234")),
                donor(Some("jane doe"), Some("JANE@X.COM"), Some("(555) 1234")),
            ),
            (
                donor(Some("Jane Doe"), None, Some("555-1234")),
                donor(Some("Jane Doe-Smith"), Some("jane@x.com"), None),
            ),
            (
                donor(None, None, None),
                donor(Some("Jane Doe"), Some("jane@x.com"), Some("555-1234")),
            ),
        ];

        for (a, b) in &pairs {
            assert_eq!(similarity(a, b).score, similarity(b, a).score);
        }
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(MatchConfidence::from_score(0), MatchConfidence::Low);
        assert_eq!(MatchConfidence::from_score(49), MatchConfidence::Low);
        assert_eq!(MatchConfidence::from_score(50), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_score(69), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_score(70), MatchConfidence::High);
        assert_eq!(MatchConfidence::from_score(100), MatchConfidence::High);
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("555.123.4567 ext 2"), "55512345672");
        assert_eq!(normalize_phone(""), "");
    }
}
