use serde::{Deserialize, Serialize};

// ============================================================================
// LEADERBOARD - top contributors
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderEntry {
    pub rank: u32,
    pub name: String,
    pub xp: u32,
    pub avatar: String,
}

impl LeaderEntry {
    pub fn seed() -> Vec<LeaderEntry> {
        vec![
            LeaderEntry {
                rank: 1,
                name: "Emma L.".to_string(),
                xp: 3450,
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Emma".to_string(),
            },
            LeaderEntry {
                rank: 2,
                name: "Jordan K.".to_string(),
                xp: 3200,
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Jordan".to_string(),
            },
            LeaderEntry {
                rank: 3,
                name: "Sarah M.".to_string(),
                xp: 2980,
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah".to_string(),
            },
            LeaderEntry {
                rank: 4,
                name: "Mike R.".to_string(),
                xp: 2750,
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Mike".to_string(),
            },
            LeaderEntry {
                rank: 5,
                name: "Alex P.".to_string(),
                xp: 2650,
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex".to_string(),
            },
        ]
    }

    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }

    /// Medal emoji for the podium, rank number otherwise.
    pub fn rank_badge(&self) -> String {
        match self.rank {
            1 => "🏆".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            n => format!("#{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_sorted_by_xp() {
        let leaders = LeaderEntry::seed();
        assert!(leaders.windows(2).all(|w| w[0].xp >= w[1].xp));
        assert!(leaders
            .iter()
            .enumerate()
            .all(|(i, l)| l.rank == i as u32 + 1));
    }

    #[test]
    fn podium_and_badges() {
        let leaders = LeaderEntry::seed();
        assert!(leaders[2].is_podium());
        assert!(!leaders[3].is_podium());
        assert_eq!(leaders[0].rank_badge(), "🏆");
        assert_eq!(leaders[4].rank_badge(), "#5");
    }
}
