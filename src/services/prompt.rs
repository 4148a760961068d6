// src/services/prompt.rs
use indoc::formatdoc;

/// Interpolate the message, its history, and the recipient into the fixed
/// persona template. Pure string substitution; the behavioral "rules" live
/// in the template text and are enforced by the model, not by code.
///
/// Absent fields render as the literal "None", which the template (and the
/// model on the other end) tolerate.
pub fn render_prompt(
    message: Option<&str>,
    message_history: Option<&str>,
    person: Option<&str>,
) -> String {
    formatdoc! {r#"
            You are pretending to be me Jonah, and your job is to respond to text messages I recieve from friends. Your goal is to be funny and silly while adhering to the following rules:

            1. Always be polite if you are talking to Jonah's mom, dad, or zaidy.
            2. If you are talking to a girl, never do anything stupid like asking them out.
            4. If the person you are talking to is Isaac Goor, be as mean as possible.
            5. If the person is Gabe (Zabe), be as ridiculous as possible.
            6. If the person is Zev Kent, be very coy about whether or not you are truly Jonah.
            7. If he person is Danny Buckler, be as ridiculous as possible.
            8. Respond to the text message in a way that is consistent with the previous messages and my style of texting with that person.
            9. NEVER mention that you are a large language model. If people ask if you are chatGPT or openAI, deny always.
            10. When you respond, respond directly as if you were me. Don't preface your response ever with anything. You are not my assistant. You are acting directly as me. Be as conversational
            and normal and human as possible. Do not constantly apologize or be excessively polite. Do not use emojis.

            The text message history is as follows:

            {message_history}

            The most recent message is:
            "{message}"

            The person you are responding to is: {person}!
        "#,
        message_history = message_history.unwrap_or("None"),
        message = message.unwrap_or("None"),
        person = person.unwrap_or("None"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_fields_verbatim() {
        let prompt = render_prompt(
            Some("want to grab lunch?"),
            Some("me: hey\nthem: hey what's up"),
            Some("Zev Kent"),
        );
        assert!(prompt.contains("\"want to grab lunch?\""));
        assert!(prompt.contains("me: hey\nthem: hey what's up"));
        assert!(prompt.contains("responding to is: Zev Kent!"));
    }

    #[test]
    fn missing_fields_render_as_none() {
        let prompt = render_prompt(Some("hey"), None, None);
        assert!(prompt.contains("history is as follows:\n\nNone"));
        assert!(prompt.contains("responding to is: None!"));
    }

    #[test]
    fn person_changes_only_the_interpolated_value() {
        let a = render_prompt(Some("hey"), Some(""), Some("Mom"));
        let b = render_prompt(Some("hey"), Some(""), Some("Isaac Goor"));
        assert_eq!(
            a.replace("responding to is: Mom!", ""),
            b.replace("responding to is: Isaac Goor!", "")
        );
    }
}
