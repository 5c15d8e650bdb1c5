//! Line-oriented chat in the terminal.

use std::io::{self, BufRead, Write};

use clockwork_ai::conversation::display_text;
use clockwork_ai::BlockingConversation;

const PROMPT: &str = "you> ";

/// Read messages from `input` until EOF or `/quit`, printing each reply.
///
/// `/reset` starts a new conversation.
pub fn run_chat<R: BufRead, W: Write>(
    chat: &BlockingConversation,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Ask about the time. /reset starts over, /quit exits.")?;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let message = line.trim();
        match message {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                chat.reset();
                writeln!(output, "(conversation cleared)")?;
            }
            _ => {
                let reply = display_text(&chat.submit(message));
                writeln!(output, "agent> {reply}")?;
            }
        }
    }
    Ok(())
}
