//! "Explain Like I'm Five" canned explanations.

use std::time::Duration;

/// Mock "thinking" time before the explanation appears.
pub const EXPLAIN_DELAY: Duration = Duration::from_millis(2000);

/// A starter topic shown while no explanation has been requested yet.
#[derive(Debug, Clone, Copy)]
pub struct SuggestedTopic {
    /// The topic fed into the input when the card is clicked.
    pub topic: &'static str,
    /// Card heading, emoji included.
    pub heading: &'static str,
    /// One-line blurb under the heading.
    pub blurb: &'static str,
}

/// The four starter topics from the landing grid.
pub const SUGGESTED_TOPICS: [SuggestedTopic; 4] = [
    SuggestedTopic {
        topic: "Photosynthesis",
        heading: "\u{1F331} Photosynthesis",
        blurb: "How plants make their own food",
    },
    SuggestedTopic {
        topic: "Gravity",
        heading: "\u{1FA90} Gravity",
        blurb: "Why things fall down",
    },
    SuggestedTopic {
        topic: "Democracy",
        heading: "\u{1F5F3}\u{FE0F} Democracy",
        blurb: "How people choose their leaders",
    },
    SuggestedTopic {
        topic: "DNA",
        heading: "\u{1F9EC} DNA",
        blurb: "The instruction manual of life",
    },
];

/// Produce the templated five-year-old explanation after a fixed delay.
pub async fn explain_topic(topic: &str) -> String {
    tracing::debug!(topic, "generating mock explanation");
    tokio::time::sleep(EXPLAIN_DELAY).await;
    format!(
        "\u{1F31F} Let's learn about \"{topic}\" in a simple way!\n\
         \n\
         Imagine you're 5 years old and someone asks you about {topic}. \
         Here's how we'd explain it:\n\
         \n\
         \u{1F4DA} Think of {topic} like a toy box. Just like how you have \
         different toys for different games, {topic} has different parts \
         that work together.\n\
         \n\
         \u{1F3A8} Picture this: If {topic} was a crayon box, each part \
         would be a different color that helps create a beautiful picture \
         when used together.\n\
         \n\
         \u{1F3E0} It's like building blocks! Each piece of {topic} is like \
         a block, and when you stack them up just right, you build something \
         amazing.\n\
         \n\
         \u{1F308} Remember: Learning about {topic} is like going on an \
         adventure. Every new thing you discover is like finding a \
         treasure!\n\
         \n\
         Keep asking questions and stay curious! \u{1F680}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explanation_mentions_the_topic() {
        let text = explain_topic("Photosynthesis").await;
        assert!(text.contains("\"Photosynthesis\""));
        assert!(text.contains("building blocks"));
    }
}
