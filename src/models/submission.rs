use serde::{Deserialize, Serialize};

// ============================================================================
// TALENTSTAGE - talent submissions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub id: u32,
    pub title: String,
    pub creator: String,
    pub votes: u32,
    pub thumbnail: String,
    pub is_winner: bool,
}

impl Submission {
    pub fn seed() -> Vec<Submission> {
        vec![
            Submission {
                id: 1,
                title: "Piano Recital Performance".to_string(),
                creator: "Sarah M.".to_string(),
                votes: 45,
                thumbnail: "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?w=400"
                    .to_string(),
                is_winner: true,
            },
            Submission {
                id: 2,
                title: "Beatbox Freestyle".to_string(),
                creator: "Mike R.".to_string(),
                votes: 38,
                thumbnail: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400"
                    .to_string(),
                is_winner: false,
            },
            Submission {
                id: 3,
                title: "Dance Choreography".to_string(),
                creator: "Emma L.".to_string(),
                votes: 52,
                thumbnail: "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?w=400"
                    .to_string(),
                is_winner: false,
            },
            Submission {
                id: 4,
                title: "Spoken Word Poetry".to_string(),
                creator: "Jordan K.".to_string(),
                votes: 29,
                thumbnail: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400"
                    .to_string(),
                is_winner: false,
            },
        ]
    }

    /// Adds one vote to the matching submission. No upper bound.
    pub fn vote(submissions: &mut [Submission], id: u32) {
        if let Some(submission) = submissions.iter_mut().find(|s| s.id == id) {
            submission.votes += 1;
        }
    }

    /// Top three by votes, highest first.
    pub fn top_three(submissions: &[Submission]) -> Vec<Submission> {
        let mut sorted = submissions.to_vec();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted.truncate(3);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_increments_by_exactly_one() {
        let mut subs = Submission::seed();
        let before = subs[1].votes;
        Submission::vote(&mut subs, 2);
        assert_eq!(subs[1].votes, before + 1);
        // everyone else untouched
        assert_eq!(subs[0].votes, 45);
        assert_eq!(subs[2].votes, 52);
    }

    #[test]
    fn votes_are_monotone_and_unbounded() {
        let mut subs = Submission::seed();
        let before = subs[0].votes;
        for _ in 0..100 {
            Submission::vote(&mut subs, 1);
        }
        assert_eq!(subs[0].votes, before + 100);
    }

    #[test]
    fn vote_unknown_id_changes_nothing() {
        let mut subs = Submission::seed();
        let before = subs.clone();
        Submission::vote(&mut subs, 99);
        assert_eq!(subs, before);
    }

    #[test]
    fn top_three_is_sorted_by_votes() {
        let subs = Submission::seed();
        let top = Submission::top_three(&subs);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].creator, "Emma L.");
        assert_eq!(top[1].creator, "Sarah M.");
        assert_eq!(top[2].creator, "Mike R.");
    }

    #[test]
    fn top_three_reflects_new_votes() {
        let mut subs = Submission::seed();
        // push Spoken Word Poetry past everyone
        for _ in 0..30 {
            Submission::vote(&mut subs, 4);
        }
        let top = Submission::top_three(&subs);
        assert_eq!(top[0].creator, "Jordan K.");
    }
}
