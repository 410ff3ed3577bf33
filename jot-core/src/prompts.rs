use rand::Rng;

/// Questions offered before writing an entry.
pub const PROMPTS: [&str; 8] = [
    "Who was the most interesting person I interacted with today?",
    "What was the best part of my day?",
    "How did I see the hand of the Lord in my life today?",
    "What was the strongest emotion I felt today?",
    "If I had one thing I could do over today, what would it be?",
    "What was the most unexpected thing that happened today?",
    "Describe a goal or dream you have and what you did today to move closer to it.",
    "Write about a challenge you faced today and how you overcame it.",
];

/// Picks one prompt uniformly from [`PROMPTS`] using the caller's generator.
pub fn random_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PROMPTS[rng.random_range(0..PROMPTS.len())]
}
