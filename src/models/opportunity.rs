use serde::{Deserialize, Serialize};

// ============================================================================
// OPPORTUNITIES - hackathons, scholarships, competitions
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OpportunityKind {
    Hackathon,
    Scholarship,
    Competition,
}

impl OpportunityKind {
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityKind::Hackathon => "hackathon",
            OpportunityKind::Scholarship => "scholarship",
            OpportunityKind::Competition => "competition",
        }
    }

    /// CSS class for the card's gradient header.
    pub fn css_class(&self) -> &'static str {
        match self {
            OpportunityKind::Hackathon => "opp-hackathon",
            OpportunityKind::Scholarship => "opp-scholarship",
            OpportunityKind::Competition => "opp-competition",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    pub kind: OpportunityKind,
    pub prize: String,
    pub deadline: String,
    pub participants: String,
    pub description: String,
    pub link: String,
    pub saved: bool,
}

impl Opportunity {
    pub fn seed() -> Vec<Opportunity> {
        vec![
            Opportunity {
                id: 1,
                title: "Grizzly Hacks 2025".to_string(),
                kind: OpportunityKind::Hackathon,
                prize: "$10,000".to_string(),
                deadline: "2025-03-15".to_string(),
                participants: "500+ teams".to_string(),
                description: "Build innovative blockchain solutions for real-world problems"
                    .to_string(),
                link: "https://grizzlyhacks.com".to_string(),
                saved: false,
            },
            Opportunity {
                id: 2,
                title: "STEM Excellence Scholarship".to_string(),
                kind: OpportunityKind::Scholarship,
                prize: "$5,000".to_string(),
                deadline: "2025-04-01".to_string(),
                participants: "Open to all".to_string(),
                description: "For outstanding high school students pursuing STEM careers"
                    .to_string(),
                link: "https://example.com/scholarship".to_string(),
                saved: false,
            },
            Opportunity {
                id: 3,
                title: "National Science Bowl".to_string(),
                kind: OpportunityKind::Competition,
                prize: "$2,500".to_string(),
                deadline: "2025-02-28".to_string(),
                participants: "200+ schools".to_string(),
                description: "Academic competition testing science knowledge and teamwork"
                    .to_string(),
                link: "https://example.com/sciencebowl".to_string(),
                saved: false,
            },
            Opportunity {
                id: 4,
                title: "CodeQuest Innovation Challenge".to_string(),
                kind: OpportunityKind::Hackathon,
                prize: "$8,000".to_string(),
                deadline: "2025-05-20".to_string(),
                participants: "300+ participants".to_string(),
                description: "Create AI-powered educational tools for students".to_string(),
                link: "https://example.com/codequest".to_string(),
                saved: false,
            },
        ]
    }

    /// Flips `saved` on the matching entry. Returns the new value, or None
    /// if the id is unknown.
    pub fn toggle_saved(opportunities: &mut [Opportunity], id: u32) -> Option<bool> {
        let opportunity = opportunities.iter_mut().find(|o| o.id == id)?;
        opportunity.saved = !opportunity.saved;
        Some(opportunity.saved)
    }

    pub fn saved_count(opportunities: &[Opportunity]) -> usize {
        opportunities.iter().filter(|o| o.saved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_original_value() {
        let mut opps = Opportunity::seed();
        assert_eq!(Opportunity::toggle_saved(&mut opps, 3), Some(true));
        assert_eq!(Opportunity::toggle_saved(&mut opps, 3), Some(false));
        assert_eq!(opps, Opportunity::seed());
    }

    #[test]
    fn toggle_only_affects_the_matching_entry() {
        let mut opps = Opportunity::seed();
        Opportunity::toggle_saved(&mut opps, 1);
        assert!(opps[0].saved);
        assert!(opps[1..].iter().all(|o| !o.saved));
    }

    #[test]
    fn toggle_unknown_id_returns_none() {
        let mut opps = Opportunity::seed();
        assert_eq!(Opportunity::toggle_saved(&mut opps, 42), None);
    }

    #[test]
    fn saved_count_tracks_toggles() {
        let mut opps = Opportunity::seed();
        assert_eq!(Opportunity::saved_count(&opps), 0);
        Opportunity::toggle_saved(&mut opps, 1);
        Opportunity::toggle_saved(&mut opps, 2);
        assert_eq!(Opportunity::saved_count(&opps), 2);
        Opportunity::toggle_saved(&mut opps, 1);
        assert_eq!(Opportunity::saved_count(&opps), 1);
    }
}
