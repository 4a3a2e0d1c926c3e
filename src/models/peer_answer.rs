use serde::{Deserialize, Serialize};

// ============================================================================
// HELPDESK - peer answers + canned AI tutor
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeerAnswer {
    pub id: u32,
    pub author: String,
    pub question: String,
    pub body: String,
    pub helpful: u32,
}

impl PeerAnswer {
    pub fn seed() -> Vec<PeerAnswer> {
        vec![
            PeerAnswer {
                id: 1,
                author: "Emma L.".to_string(),
                question: "How do I balance redox equations?".to_string(),
                body: "Split it into half-reactions first, balance atoms, then balance \
                       charge with electrons before recombining."
                    .to_string(),
                helpful: 18,
            },
            PeerAnswer {
                id: 2,
                author: "Mike R.".to_string(),
                question: "What's the difference between velocity and speed?".to_string(),
                body: "Speed is the magnitude only; velocity also carries direction, so \
                       two cars at 60 km/h in opposite directions have equal speed but \
                       different velocities."
                    .to_string(),
                helpful: 11,
            },
            PeerAnswer {
                id: 3,
                author: "Jordan K.".to_string(),
                question: "Tips for the AP Calc free-response section?".to_string(),
                body: "Show every step. Partial credit is real, and a correct setup with \
                       an arithmetic slip still scores most of the points."
                    .to_string(),
                helpful: 24,
            },
        ]
    }

    /// Adds one helpful mark to the matching answer.
    pub fn mark_helpful(answers: &mut [PeerAnswer], id: u32) {
        if let Some(answer) = answers.iter_mut().find(|a| a.id == id) {
            answer.helpful += 1;
        }
    }
}

/// One question/answer round with the simulated AI tutor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiExchange {
    pub question: String,
    pub answer: String,
}

impl AiExchange {
    /// Canned response. The demo has no model behind it; the copy just
    /// acknowledges the question so the exchange reads plausibly.
    pub fn respond(question: &str) -> AiExchange {
        AiExchange {
            question: question.to_string(),
            answer: format!(
                "Great question! Here's how I'd approach \"{}\": break it into the \
                 smallest sub-problems you can name, solve each one on paper, then \
                 recombine. Post it to Peer Answers if you want a second opinion.",
                question
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_helpful_increments_by_one() {
        let mut answers = PeerAnswer::seed();
        PeerAnswer::mark_helpful(&mut answers, 3);
        assert_eq!(answers[2].helpful, 25);
        assert_eq!(answers[0].helpful, 18);
    }

    #[test]
    fn mark_helpful_unknown_id_is_a_no_op() {
        let mut answers = PeerAnswer::seed();
        let before = answers.clone();
        PeerAnswer::mark_helpful(&mut answers, 99);
        assert_eq!(answers, before);
    }

    #[test]
    fn ai_exchange_echoes_the_question() {
        let exchange = AiExchange::respond("What is osmosis?");
        assert_eq!(exchange.question, "What is osmosis?");
        assert!(exchange.answer.contains("What is osmosis?"));
    }
}
