//! Mock handwriting-to-text conversion.

use std::time::Duration;

/// Mock OCR processing time.
pub const TRANSCRIBE_DELAY: Duration = Duration::from_millis(3000);

/// "Transcribe" an uploaded image after a fixed delay.
///
/// The file is never opened; the transcript is the same canned mathematics
/// notes regardless of input.
pub async fn transcribe(file_name: &str) -> String {
    tracing::debug!(file_name, "running mock handwriting recognition");
    tokio::time::sleep(TRANSCRIBE_DELAY).await;
    CANNED_TRANSCRIPT.to_owned()
}

const CANNED_TRANSCRIPT: &str = "\
Mathematics Notes - Chapter 5: Quadratic Equations

Key Concepts:
\u{2022} A quadratic equation is an equation of the form ax\u{B2} + bx + c = 0
\u{2022} The solutions can be found using the quadratic formula: x = (-b \u{B1} \u{221A}(b\u{B2}-4ac)) / 2a
\u{2022} The discriminant (b\u{B2}-4ac) determines the nature of roots

Example Problems:
1. Solve: x\u{B2} - 5x + 6 = 0
   Using factoring: (x-2)(x-3) = 0
   Solutions: x = 2 or x = 3

2. Find roots of: 2x\u{B2} + 3x - 1 = 0
   Using quadratic formula:
   x = (-3 \u{B1} \u{221A}(9+8)) / 4 = (-3 \u{B1} \u{221A}17) / 4

Important Notes:
- Always check if the equation can be factored first
- Remember to simplify radicals in final answers
- Graph opens upward if a > 0, downward if a < 0";

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transcript_is_input_independent() {
        let a = transcribe("notes.jpg").await;
        let b = transcribe("different.png").await;
        assert_eq!(a, b);
        assert!(a.starts_with("Mathematics Notes"));
    }
}
