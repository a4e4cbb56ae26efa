/// The system prompt sent with every generated chat reply.
///
/// Loaded from `prompt.txt` at compile time so it can be edited without
/// dealing with Rust string syntax.
pub const CHAT_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Build the user turn carrying the recipe context, prior conversation and
/// the new message. Empty sections are left out.
pub fn build_user_turn(context_text: &str, history_text: &str, user_message: &str) -> String {
    let mut turn = String::new();

    let context = context_text.trim();
    if !context.is_empty() {
        turn.push_str("Recipe context:\n");
        turn.push_str(context);
        turn.push_str("\n\n");
    }

    let history = history_text.trim();
    if !history.is_empty() {
        turn.push_str("Conversation so far:\n");
        turn.push_str(history);
        turn.push_str("\n\n");
    }

    turn.push_str("User question: ");
    turn.push_str(user_message.trim());
    turn
}
