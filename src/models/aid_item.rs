use serde::{Deserialize, Serialize};

// ============================================================================
// AIDFLOW - donated items
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AidItemStatus {
    Available,
    Claimed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AidItem {
    pub id: u32,
    pub kind: String,
    pub title: String,
    /// Donor wallet, already display-truncated. Cosmetic.
    pub donor: String,
    pub image: String,
    pub status: AidItemStatus,
}

impl AidItem {
    pub fn is_available(&self) -> bool {
        self.status == AidItemStatus::Available
    }

    /// The demo pool of donated items.
    pub fn seed() -> Vec<AidItem> {
        vec![
            AidItem {
                id: 1,
                kind: "Textbook".to_string(),
                title: "AP Chemistry Textbook".to_string(),
                donor: "0x7a9...f42e".to_string(),
                image: "https://images.unsplash.com/photo-1532012197267-da84d127e765?w=400"
                    .to_string(),
                status: AidItemStatus::Available,
            },
            AidItem {
                id: 2,
                kind: "Calculator".to_string(),
                title: "TI-84 Plus CE".to_string(),
                donor: "0x3b2...891d".to_string(),
                image: "https://images.unsplash.com/photo-1611174493420-4f36d06c92f5?w=400"
                    .to_string(),
                status: AidItemStatus::Available,
            },
            AidItem {
                id: 3,
                kind: "Laptop".to_string(),
                title: "Dell Chromebook".to_string(),
                donor: "0x9ef...234a".to_string(),
                image: "https://images.unsplash.com/photo-1484788984921-03950022c9ef?w=400"
                    .to_string(),
                status: AidItemStatus::Available,
            },
        ]
    }

    /// Marks the matching item claimed. Returns true if it was newly
    /// claimed, false if absent or already gone.
    pub fn claim(items: &mut [AidItem], id: u32) -> bool {
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.is_available() => {
                item.status = AidItemStatus::Claimed;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_touches_only_the_matching_item() {
        let mut items = AidItem::seed();
        assert!(AidItem::claim(&mut items, 2));
        assert_eq!(items[1].status, AidItemStatus::Claimed);
        assert_eq!(items[0].status, AidItemStatus::Available);
        assert_eq!(items[2].status, AidItemStatus::Available);
    }

    #[test]
    fn claim_twice_reports_already_claimed() {
        let mut items = AidItem::seed();
        assert!(AidItem::claim(&mut items, 1));
        assert!(!AidItem::claim(&mut items, 1));
    }

    #[test]
    fn claim_unknown_id_is_a_no_op() {
        let mut items = AidItem::seed();
        let before = items.clone();
        assert!(!AidItem::claim(&mut items, 99));
        assert_eq!(items, before);
    }
}
