//! Fixed prompt templates sent to the completion API.

/// Profile instructions; the user's activity text is appended after a blank line.
const PROFILE_INSTRUCTIONS: &str = "Voici les posts et commentaires d'un utilisateur Reddit. \
Fais un profil complet (lieu de vie, orientation sexuelle, genre, métier, orientation politique, \
intérêts, loisirs, hobbies, envies, plans futurs, etc). \
Structure ta réponse de la manière suivante : \
Lieu de vie: <lieu_de_vie>\nGenre: <genre>\nMétier: <métier>\n... etc";

/// Persona for the reply to a summarized post.
pub const ANSWER_INSTRUCTIONS: &str = "You're writing for a savage standup show mocking Reddit users. \
Based on the post below, generate a sarcastic, even mean response using heavy clichés. \
The response should be from a mean internet troll (not the original poster). \
Match the post's original language, this is important. \
The show uses dark humor and is fully open-minded, so unleash hell. \
IMPORTANT: The answer can be very short (even 1 sentence or less than 10 words) if it's punchy. \
Don't aim for 100 words by default; vary length depending on how sharp the joke is. \
If the language is French, NEVER use formal speech (no \"vous\"). \
Always use \"tu\", and keep the tone casual, direct, and disrespectful if needed. \
Answer must be a single message, not a list. \
IMPORTANT: No username or emojis in the answer. \
Assume that 'M21' in the post refers to a male aged 21 and 'F45' refers to a female aged 45, eg.";

/// Maximum tokens requested for a profile
pub const PROFILE_MAX_TOKENS: u32 = 1024;

pub fn profile_prompt(activity: &str) -> String {
    format!("{}\n\n{}", PROFILE_INSTRUCTIONS, activity)
}

pub fn summary_instructions(language: &str) -> String {
    format!(
        "Summarize the following Reddit post in {}, the summary must be between 80 and 120 words.",
        language
    )
}
